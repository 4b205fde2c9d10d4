//! TV home screen preview renderer.
//!
//! Pure function from a [`TemplateData`] (plus the clock instant) to the
//! HTML the editor's TV frame and the preview endpoint display. Keeping
//! the clock an argument keeps the renderer deterministic; the server
//! passes `Local::now()`.

use chrono::{DateTime, Local};

use super::{App, Card, CardPosition, TemplateData, TimeFormat};

/// Fixed size of the simulated TV surface, in CSS pixels.
pub const TV_WIDTH: u32 = 1200;
pub const TV_HEIGHT: u32 = 675;

/// Render the simulated home screen.
pub fn render_preview(data: &TemplateData, now: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<div class=\"tv-screen\" style=\"width:{}px;height:{}px;background-image:url({})\">",
        TV_WIDTH, TV_HEIGHT, data.background_image
    ));
    out.push_str("<div class=\"tv-overlay\">");

    render_header(&mut out, data, now);
    render_cards(&mut out, data);
    render_apps(&mut out, data);

    out.push_str("</div></div>");
    out
}

fn render_header(out: &mut String, data: &TemplateData, now: DateTime<Local>) {
    out.push_str("<header class=\"tv-header\">");
    out.push_str(&format!(
        "<img class=\"tv-logo\" src=\"{}\" alt=\"logo\" />",
        data.logo
    ));

    out.push_str("<div class=\"tv-status\">");
    if data.time.enabled {
        out.push_str(&format!(
            "<div class=\"tv-clock\">{}</div>",
            format_clock(now, data.time.format)
        ));
    }
    if data.weather.enabled {
        let icon = data.weather.icon.as_deref().unwrap_or("🌤️");
        let temperature = data.weather.temperature.as_deref().unwrap_or("18.28°C");
        out.push_str(&format!(
            "<div class=\"tv-weather\"><span class=\"weather-icon\">{}</span><span class=\"temperature\">{}</span><span class=\"location\">{}</span></div>",
            icon, temperature, data.weather.location
        ));
    }
    out.push_str("</div></header>");
}

fn render_cards(out: &mut String, data: &TemplateData) {
    out.push_str("<main class=\"tv-cards\">");

    // Two large cards on the first row
    out.push_str("<div class=\"tv-cards-main\">");
    render_card(out, &data.cards.welcome, "welcome");
    render_card(out, &data.cards.flights, "flights");
    out.push_str("</div>");

    // Three small cards below
    out.push_str("<div class=\"tv-cards-secondary\">");
    render_card(out, &data.cards.hotel, "hotel");
    render_card(out, &data.cards.menu, "menu");
    render_card(out, &data.cards.discover, "discover");
    out.push_str("</div>");

    out.push_str("</main>");
}

fn render_card(out: &mut String, card: &Card, key: &str) {
    out.push_str(&format!(
        "<div class=\"tv-card tv-card-{}\" style=\"background-image:url({});transform:scale({});justify-content:{}\">",
        key,
        card.image,
        card.scale(),
        justify(card.position)
    ));
    out.push_str(&format!("<h3>{}</h3>", card.title));
    if let Some(subtitle) = &card.subtitle {
        out.push_str(&format!("<p>{}</p>", subtitle));
    }
    if let Some(button_text) = &card.button_text {
        out.push_str(&format!("<button>{}</button>", button_text));
    }
    out.push_str("</div>");
}

fn render_apps(out: &mut String, data: &TemplateData) {
    out.push_str("<div class=\"tv-apps\">");
    for (key, app) in [
        ("streamtv", &data.apps.streamtv),
        ("netflix", &data.apps.netflix),
        ("primevideo", &data.apps.primevideo),
        ("disney", &data.apps.disney),
        ("youtube", &data.apps.youtube),
        ("wifi", &data.apps.wifi),
    ] {
        render_app(out, app, key);
    }
    out.push_str("</div>");
}

fn render_app(out: &mut String, app: &App, key: &str) {
    let name = app.name.as_deref().unwrap_or("App");
    match &app.url {
        Some(url) if !url.is_empty() => out.push_str(&format!(
            "<a class=\"tv-app tv-app-{}\" href=\"{}\"><img src=\"{}\" alt=\"{}\" /><span>{}</span></a>",
            key, url, app.image, name, name
        )),
        _ => out.push_str(&format!(
            "<div class=\"tv-app tv-app-{}\"><img src=\"{}\" alt=\"{}\" /><span>{}</span></div>",
            key, app.image, name, name
        )),
    }
}

fn justify(position: CardPosition) -> &'static str {
    match position {
        CardPosition::Left => "flex-start",
        CardPosition::Center => "center",
        CardPosition::Right => "flex-end",
    }
}

fn format_clock(now: DateTime<Local>, format: TimeFormat) -> String {
    match format {
        TimeFormat::H24 => now.format("%H:%M").to_string(),
        TimeFormat::H12 => now.format("%-I:%M %p").to_string(),
    }
}
