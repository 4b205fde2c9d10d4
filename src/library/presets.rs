//! Built-in template presets the libraries are seeded with.

use chrono::Utc;

use crate::simulator::{
    App, Apps, Card, Cards, TemplateData, TimeFormat, TimeSettings, Weather,
};

use super::{TvTemplate, WebFile, WebFileKind, WebTemplate};

fn card(image: &str, title: &str, subtitle: &str, button_text: &str) -> Card {
    Card {
        subtitle: Some(subtitle.into()),
        button_text: Some(button_text.into()),
        ..Card::new(image, title)
    }
}

fn placeholder_apps() -> Apps {
    Apps {
        streamtv: App::named("/placeholder.svg", "Stream TV", ""),
        netflix: App::named("/placeholder.svg", "Netflix", ""),
        primevideo: App::named("/placeholder.svg", "Prime Video", ""),
        disney: App::named("/placeholder.svg", "Disney+", ""),
        youtube: App::named("/placeholder.svg", "YouTube", ""),
        wifi: App::named("/placeholder.svg", "Wi-Fi", ""),
    }
}

/// The TV presets every library starts with.
pub fn built_in_tv_templates() -> Vec<TvTemplate> {
    vec![
        TvTemplate {
            id: "hotel-hilton".into(),
            name: "Hotel Hilton".into(),
            description: "Plantilla elegante para hoteles con información completa".into(),
            thumbnail:
                "https://images.unsplash.com/photo-1551038247-3d9af20df552?w=300&h=200&fit=crop"
                    .into(),
            data: TemplateData {
                logo: "/placeholder.svg".into(),
                background_image:
                    "https://images.unsplash.com/photo-1551038247-3d9af20df552?w=1920&h=1080&fit=crop"
                        .into(),
                cards: Cards {
                    welcome: card(
                        "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=400&h=200&fit=crop",
                        "Welcome",
                        "Bienvenido a una experiencia única de hospitalidad",
                        "Explorar servicios",
                    ),
                    flights: card(
                        "https://images.unsplash.com/photo-1500673922987-e212871fec22?w=400&h=200&fit=crop",
                        "Flight status",
                        "Consulta el estado de tu vuelo en tiempo real",
                        "Ver vuelos",
                    ),
                    hotel: card(
                        "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?w=400&h=200&fit=crop",
                        "Enjoy your Hotel",
                        "Descubre todas las comodidades de tu habitación",
                        "Servicios de habitación",
                    ),
                    menu: card(
                        "/placeholder.svg",
                        "Menu and services",
                        "Explora nuestro menú y servicios adicionales",
                        "Ver menú",
                    ),
                    discover: card(
                        "/placeholder.svg",
                        "Discover El Salvador",
                        "Conoce los mejores lugares para visitar",
                        "Explorar destinos",
                    ),
                },
                apps: placeholder_apps(),
                weather: Weather {
                    enabled: true,
                    location: "San Salvador, El Salvador".into(),
                    country: Some("SV".into()),
                    icon: Some("🌤️".into()),
                    temperature: Some("18.28°C".into()),
                },
                time: TimeSettings::default(),
            },
            created_at: Utc::now(),
        },
        TvTemplate {
            id: "business-center".into(),
            name: "Business Center".into(),
            description: "Plantilla profesional para centros de negocios".into(),
            thumbnail:
                "https://images.unsplash.com/photo-1497366216548-37526070297c?w=300&h=200&fit=crop"
                    .into(),
            data: TemplateData {
                logo: "/placeholder.svg".into(),
                background_image:
                    "https://images.unsplash.com/photo-1497366216548-37526070297c?w=1920&h=1080&fit=crop"
                        .into(),
                cards: Cards {
                    welcome: card(
                        "https://images.unsplash.com/photo-1497366216548-37526070297c?w=400&h=200&fit=crop",
                        "Welcome to Business Center",
                        "Tu espacio de trabajo profesional",
                        "Comenzar",
                    ),
                    flights: card(
                        "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?w=400&h=200&fit=crop",
                        "Travel Information",
                        "Información de viajes y transportes",
                        "Ver información",
                    ),
                    hotel: card(
                        "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=400&h=200&fit=crop",
                        "Meeting Rooms",
                        "Salas equipadas para reuniones ejecutivas",
                        "Reservar sala",
                    ),
                    menu: card(
                        "/placeholder.svg",
                        "Business Services",
                        "Servicios empresariales especializados",
                        "Ver servicios",
                    ),
                    discover: card(
                        "/placeholder.svg",
                        "Local Attractions",
                        "Lugares de interés cercanos",
                        "Explorar",
                    ),
                },
                apps: placeholder_apps(),
                weather: Weather {
                    enabled: false,
                    location: "New York, USA".into(),
                    country: Some("US".into()),
                    icon: None,
                    temperature: None,
                },
                time: TimeSettings {
                    enabled: true,
                    format: TimeFormat::H12,
                },
            },
            created_at: Utc::now(),
        },
    ]
}

const HILTON_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>Hilton San Salvador - Bienvenido</title>
    <link rel="stylesheet" href="styles/main.css">
</head>
<body>
    <div class="tv-interface">
        <header class="header">
            <div class="logo-section">
                <div class="logo"><div class="logo-icon">H</div></div>
                <div class="brand-info"><h1>Hilton</h1><p>SAN SALVADOR</p></div>
            </div>
            <div class="time-weather">
                <div class="time" id="currentTime">12:30</div>
                <div class="weather"><span class="weather-icon">🌤️</span><span class="temperature">18.28°C</span></div>
            </div>
        </header>
        <main class="main-content">
            <div class="main-cards">
                <div class="card welcome-card">
                    <h2>Hilton Honors</h2>
                    <p>Únete a Hilton Honors y descubre todos los beneficios exclusivos que tenemos para ti!</p>
                    <button class="cta-button" onclick="navigateTo('honors.html')">Más información</button>
                </div>
                <div class="card flight-card" onclick="navigateTo('flights.html')"><h3>Flight status</h3></div>
            </div>
            <div class="secondary-cards">
                <div class="small-card hotel-card"><h4>Enjoy your Hotel</h4></div>
                <div class="small-card menu-card"><h4>Menu and services</h4></div>
                <div class="small-card discover-card"><h4>Discover El Salvador</h4></div>
            </div>
            <div class="apps-section">
                <div class="app-icon streamtv">Stream TV</div>
                <div class="app-icon netflix">N</div>
                <div class="app-icon prime">prime video</div>
                <div class="app-icon disney">Disney+</div>
                <div class="app-icon youtube">YouTube</div>
                <div class="app-icon wifi">Wi-Fi</div>
            </div>
        </main>
    </div>
    <script src="scripts/main.js"></script>
</body>
</html>"#;

const HILTON_HONORS_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>Hilton Honors</title>
</head>
<body>
    <div class="tv-interface">
        <h1>Hilton Honors</h1>
        <p>Acumula puntos en cada estadía y canjéalos por noches gratis.</p>
        <button onclick="navigateTo('index.html')">Volver</button>
    </div>
</body>
</html>"#;

const HILTON_MAIN_CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Segoe UI', sans-serif; background: #000; color: #fff; }
.tv-interface { width: 1200px; height: 675px; position: relative; overflow: hidden; }
.header { display: flex; justify-content: space-between; padding: 24px 48px; }
.time { font-size: 2.5rem; font-weight: bold; }
.main-cards { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; padding: 0 64px; }
.card { border-radius: 16px; padding: 24px; background: linear-gradient(to right, #1e3a8a, #1e40af); cursor: pointer; }
.secondary-cards { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; padding: 32px 64px; }
.small-card { border-radius: 12px; padding: 16px; background: rgba(255,255,255,0.1); cursor: pointer; }
.apps-section { display: flex; gap: 16px; padding: 0 64px; }
.app-icon { width: 120px; height: 64px; border-radius: 8px; background: #222; display: flex; align-items: center; justify-content: center; cursor: pointer; }
.cta-button { background: #2563eb; color: #fff; border: none; border-radius: 9999px; padding: 8px 24px; cursor: pointer; }"#;

const HILTON_MAIN_JS: &str = r#"function navigateTo(page) {
    window.parent.postMessage({ type: 'navigate', page: page }, '*');
}

function updateClock() {
    var el = document.getElementById('currentTime');
    if (!el) return;
    var now = new Date();
    el.textContent = now.toLocaleTimeString([], { hour: '2-digit', minute: '2-digit', hour12: false });
}

updateClock();
setInterval(updateClock, 1000);"#;

/// The web bundle preset the web library starts with.
pub fn built_in_web_templates() -> Vec<WebTemplate> {
    vec![WebTemplate {
        id: "hotel-hilton-complete".into(),
        name: "Hotel Hilton - Sitio Completo".into(),
        description: "Plantilla completa del hotel Hilton con múltiples páginas".into(),
        thumbnail:
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=300&h=200&fit=crop"
                .into(),
        main_file: "index.html".into(),
        files: vec![
            WebFile::new("index.html", WebFileKind::Html, "/index.html", HILTON_INDEX_HTML),
            WebFile::new("honors.html", WebFileKind::Html, "/honors.html", HILTON_HONORS_HTML),
            WebFile::new(
                "main.css",
                WebFileKind::Css,
                "/styles/main.css",
                HILTON_MAIN_CSS,
            ),
            WebFile::new(
                "main.js",
                WebFileKind::Js,
                "/scripts/main.js",
                HILTON_MAIN_JS,
            ),
        ],
        created_at: Utc::now(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tv_presets_have_unique_ids() {
        let presets = built_in_tv_templates();
        let mut seen = std::collections::HashSet::new();
        for preset in &presets {
            assert!(seen.insert(preset.id.clone()), "duplicate id {}", preset.id);
        }
    }

    #[test]
    fn test_web_preset_main_file_exists() {
        for template in built_in_web_templates() {
            assert!(template.file(&template.main_file).is_some());
        }
    }

    #[test]
    fn test_business_preset_uses_12h_clock() {
        let presets = built_in_tv_templates();
        let business = presets.iter().find(|t| t.id == "business-center").unwrap();
        assert_eq!(business.data.time.format, TimeFormat::H12);
        assert!(!business.data.weather.enabled);
    }

    #[test]
    fn test_presets_keep_card_defaults() {
        use crate::simulator::CardPosition;
        for preset in built_in_tv_templates() {
            assert_eq!(preset.data.cards.welcome.size, 100);
            assert_eq!(preset.data.cards.welcome.position, CardPosition::Center);
        }
    }
}
