//! The TV template configuration object and its update semantics.
//!
//! `TemplateData` is always valid: it is created from the hardcoded
//! default, mutated through [`TemplateData::apply_partial`] (top-level
//! shallow replace) or the per-field accessors, and reset by replacement
//! with the default. It is persisted as one opaque JSON blob, never
//! partially.
//!
//! ## Shallow replace, not deep merge
//!
//! `apply_partial` replaces every branch present in the patch WHOLESALE.
//! A caller patching `weather` with only `icon` set loses the other
//! weather fields — the historical contract of the form-driven editor.
//! The per-field accessors (`card_mut`, `app_mut`, `weather_mut`, …) are
//! the safe path for single-field edits; whole-branch replace remains for
//! bulk template loads.

use serde::{Deserialize, Serialize};

use crate::error::ConserjeError;

/// Horizontal anchoring of a card's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPosition {
    Left,
    #[default]
    Center,
    Right,
}

/// Clock format for the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    H12,
    #[default]
    #[serde(rename = "24h")]
    H24,
}

fn default_card_size() -> u16 {
    100
}

fn default_true() -> bool {
    true
}

/// One of the five fixed home-screen cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub image: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Percentage scale, clamped to 50–150 when read by the renderer.
    #[serde(default = "default_card_size")]
    pub size: u16,
    #[serde(default)]
    pub position: CardPosition,
}

impl Card {
    pub fn new(image: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            subtitle: None,
            button_text: None,
            size: default_card_size(),
            position: CardPosition::Center,
        }
    }

    /// Scale factor for the preview, with the percentage clamped to its
    /// valid 50–150 range.
    pub fn scale(&self) -> f64 {
        f64::from(self.size.clamp(50, 150)) / 100.0
    }
}

/// The five fixed cards of the home screen. Fixed shape: no card can be
/// added or removed, only edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cards {
    pub welcome: Card,
    pub flights: Card,
    pub hotel: Card,
    pub menu: Card,
    pub discover: Card,
}

/// Identifies one of the five fixed cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKey {
    Welcome,
    Flights,
    Hotel,
    Menu,
    Discover,
}

impl CardKey {
    pub const ALL: [CardKey; 5] = [
        CardKey::Welcome,
        CardKey::Flights,
        CardKey::Hotel,
        CardKey::Menu,
        CardKey::Discover,
    ];
}

/// One of the six fixed streaming/app tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl App {
    pub fn named(image: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            image: image.into(),
            name: Some(name.into()),
            url: if url.is_empty() { None } else { Some(url) },
        }
    }
}

/// The six fixed app tiles of the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apps {
    pub streamtv: App,
    pub netflix: App,
    pub primevideo: App,
    pub disney: App,
    pub youtube: App,
    pub wifi: App,
}

/// Identifies one of the six fixed app tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKey {
    Streamtv,
    Netflix,
    Primevideo,
    Disney,
    Youtube,
    Wifi,
}

impl AppKey {
    pub const ALL: [AppKey; 6] = [
        AppKey::Streamtv,
        AppKey::Netflix,
        AppKey::Primevideo,
        AppKey::Disney,
        AppKey::Youtube,
        AppKey::Wifi,
    ];
}

/// Header weather widget configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Weather {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
}

/// Header clock configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub format: TimeFormat,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            format: TimeFormat::H24,
        }
    }
}

/// The full simulated-TV configuration: one always-valid object with a
/// fixed nested shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub logo: String,
    pub background_image: String,
    pub cards: Cards,
    pub apps: Apps,
    pub weather: Weather,
    #[serde(default)]
    pub time: TimeSettings,
}

/// Partial update over [`TemplateData`]. Every branch present replaces
/// the current branch wholesale; absent branches are carried over.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePatch {
    pub logo: Option<String>,
    pub background_image: Option<String>,
    pub cards: Option<Cards>,
    pub apps: Option<Apps>,
    pub weather: Option<Weather>,
    pub time: Option<TimeSettings>,
}

impl Default for TemplateData {
    /// The hardcoded starting template the editor boots with.
    fn default() -> Self {
        Self {
            logo: "https://logos-world.net/wp-content/uploads/2020/06/Hilton-Logo.png".into(),
            background_image:
                "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=1920&h=1080&fit=crop"
                    .into(),
            cards: Cards {
                welcome: Card {
                    subtitle: Some(
                        "Únete a Hilton Honors y descubre todos los beneficios exclusivos que tenemos para ti!"
                            .into(),
                    ),
                    button_text: Some("Más información".into()),
                    ..Card::new(
                        "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=600&h=300&fit=crop",
                        "Hilton Honors",
                    )
                },
                flights: Card::new(
                    "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?w=600&h=300&fit=crop",
                    "Flight status",
                ),
                hotel: Card::new(
                    "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=400&h=200&fit=crop",
                    "Enjoy your Hotel",
                ),
                menu: Card::new(
                    "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=400&h=200&fit=crop",
                    "Menu and services",
                ),
                discover: Card::new(
                    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=200&fit=crop",
                    "Discover El Salvador",
                ),
            },
            apps: Apps {
                streamtv: App::named("/app-icons/streamtv.png", "Stream TV", ""),
                netflix: App::named("/app-icons/netflix.png", "Netflix", "https://netflix.com"),
                primevideo: App::named(
                    "/app-icons/primevideo.png",
                    "Prime Video",
                    "https://primevideo.com",
                ),
                disney: App::named("/app-icons/disney.png", "Disney+", "https://disneyplus.com"),
                youtube: App::named("/app-icons/youtube.png", "YouTube", "https://youtube.com"),
                wifi: App::named("/app-icons/wifi.png", "Wi-Fi", ""),
            },
            weather: Weather {
                enabled: true,
                location: "San Salvador, El Salvador".into(),
                country: Some("SV".into()),
                icon: Some("🌤️".into()),
                temperature: Some("18.28°C".into()),
            },
            time: TimeSettings::default(),
        }
    }
}

impl TemplateData {
    /// Apply a partial update: every branch present in the patch replaces
    /// the matching branch in full; everything else is untouched.
    ///
    /// Callers changing one nested field must read, copy and resend the
    /// whole branch — or use the per-field accessors below instead.
    pub fn apply_partial(&mut self, patch: TemplatePatch) {
        if let Some(logo) = patch.logo {
            self.logo = logo;
        }
        if let Some(background_image) = patch.background_image {
            self.background_image = background_image;
        }
        if let Some(cards) = patch.cards {
            self.cards = cards;
        }
        if let Some(apps) = patch.apps {
            self.apps = apps;
        }
        if let Some(weather) = patch.weather {
            self.weather = weather;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
    }

    /// Replace with the hardcoded default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_logo(&mut self, url: impl Into<String>) {
        self.logo = url.into();
    }

    pub fn set_background(&mut self, url: impl Into<String>) {
        self.background_image = url.into();
    }

    /// Single-field card edits without spreading the whole branch.
    pub fn card_mut(&mut self, key: CardKey) -> &mut Card {
        match key {
            CardKey::Welcome => &mut self.cards.welcome,
            CardKey::Flights => &mut self.cards.flights,
            CardKey::Hotel => &mut self.cards.hotel,
            CardKey::Menu => &mut self.cards.menu,
            CardKey::Discover => &mut self.cards.discover,
        }
    }

    pub fn card(&self, key: CardKey) -> &Card {
        match key {
            CardKey::Welcome => &self.cards.welcome,
            CardKey::Flights => &self.cards.flights,
            CardKey::Hotel => &self.cards.hotel,
            CardKey::Menu => &self.cards.menu,
            CardKey::Discover => &self.cards.discover,
        }
    }

    pub fn app_mut(&mut self, key: AppKey) -> &mut App {
        match key {
            AppKey::Streamtv => &mut self.apps.streamtv,
            AppKey::Netflix => &mut self.apps.netflix,
            AppKey::Primevideo => &mut self.apps.primevideo,
            AppKey::Disney => &mut self.apps.disney,
            AppKey::Youtube => &mut self.apps.youtube,
            AppKey::Wifi => &mut self.apps.wifi,
        }
    }

    pub fn app(&self, key: AppKey) -> &App {
        match key {
            AppKey::Streamtv => &self.apps.streamtv,
            AppKey::Netflix => &self.apps.netflix,
            AppKey::Primevideo => &self.apps.primevideo,
            AppKey::Disney => &self.apps.disney,
            AppKey::Youtube => &self.apps.youtube,
            AppKey::Wifi => &self.apps.wifi,
        }
    }

    pub fn weather_mut(&mut self) -> &mut Weather {
        &mut self.weather
    }

    pub fn time_mut(&mut self) -> &mut TimeSettings {
        &mut self.time
    }

    /// Export as pretty-printed JSON for the download interface.
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Import a previously exported template.
    pub fn import_json(raw: &str) -> Result<Self, ConserjeError> {
        serde_json::from_str(raw).map_err(|e| ConserjeError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_has_all_cards_and_apps() {
        let data = TemplateData::default();
        assert_eq!(data.cards.welcome.title, "Hilton Honors");
        assert_eq!(data.cards.discover.title, "Discover El Salvador");
        assert_eq!(data.apps.netflix.name.as_deref(), Some("Netflix"));
        assert!(data.weather.enabled);
        assert_eq!(data.time.format, TimeFormat::H24);
    }

    #[test]
    fn test_partial_update_replaces_only_present_branches() {
        let mut data = TemplateData::default();
        let original_cards = data.cards.clone();

        let mut weather = data.weather.clone();
        weather.icon = Some("☀️".into());
        data.apply_partial(TemplatePatch {
            weather: Some(weather),
            ..Default::default()
        });

        assert_eq!(data.weather.icon.as_deref(), Some("☀️"));
        // sibling weather fields survived because the caller spread them
        assert_eq!(data.weather.location, "San Salvador, El Salvador");
        // untouched branches carried over
        assert_eq!(data.cards, original_cards);
        assert_eq!(data.logo, TemplateData::default().logo);
    }

    #[test]
    fn test_partial_update_is_shallow_not_deep() {
        // The documented hazard: a caller that does NOT spread the branch
        // loses its sibling fields.
        let mut data = TemplateData::default();
        data.apply_partial(TemplatePatch {
            weather: Some(Weather {
                icon: Some("☀️".into()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(data.weather.icon.as_deref(), Some("☀️"));
        assert_eq!(data.weather.location, ""); // dropped
        assert!(!data.weather.enabled); // dropped
        assert_eq!(data.weather.temperature, None); // dropped
    }

    #[test]
    fn test_patch_from_json_carries_only_named_branches() {
        let patch: TemplatePatch =
            serde_json::from_str(r#"{"logo":"https://example.com/logo.png"}"#).unwrap();
        let mut data = TemplateData::default();
        let before = data.clone();
        data.apply_partial(patch);
        assert_eq!(data.logo, "https://example.com/logo.png");
        assert_eq!(data.cards, before.cards);
        assert_eq!(data.weather, before.weather);
    }

    #[test]
    fn test_card_mut_single_field_edit() {
        let mut data = TemplateData::default();
        data.card_mut(CardKey::Menu).title = "Carta y servicios".into();

        assert_eq!(data.cards.menu.title, "Carta y servicios");
        // siblings untouched — the safe path has no spread footgun
        assert_eq!(
            data.cards.menu.image,
            TemplateData::default().cards.menu.image
        );
    }

    #[test]
    fn test_card_scale_clamps_percentage() {
        let mut card = Card::new("", "t");
        card.size = 400;
        assert_eq!(card.scale(), 1.5);
        card.size = 10;
        assert_eq!(card.scale(), 0.5);
        card.size = 100;
        assert_eq!(card.scale(), 1.0);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut data = TemplateData::default();
        data.set_logo("otro");
        data.card_mut(CardKey::Welcome).title = "X".into();
        data.reset();
        assert_eq!(data, TemplateData::default());
    }

    #[test]
    fn test_export_import_roundtrip() {
        let mut data = TemplateData::default();
        data.weather_mut().temperature = Some("29.9°C".into());
        data.time_mut().format = TimeFormat::H12;

        let back = TemplateData::import_json(&data.export_json()).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        let err = TemplateData::import_json("{no json}").unwrap_err();
        assert!(matches!(err, ConserjeError::Parse(_)));
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let json = serde_json::to_value(TemplateData::default()).unwrap();
        assert!(json.get("backgroundImage").is_some());
        assert!(json["cards"]["welcome"].get("buttonText").is_some());
    }

    #[test]
    fn test_time_defaults_when_absent() {
        // Templates exported before the clock existed have no "time" key.
        let mut json = serde_json::to_value(TemplateData::default()).unwrap();
        json.as_object_mut().unwrap().remove("time");
        let data: TemplateData = serde_json::from_value(json).unwrap();
        assert!(data.time.enabled);
        assert_eq!(data.time.format, TimeFormat::H24);
    }

    #[test]
    fn test_time_format_wire_names() {
        assert_eq!(serde_json::to_value(TimeFormat::H12).unwrap(), "12h");
        assert_eq!(serde_json::to_value(TimeFormat::H24).unwrap(), "24h");
    }

    #[test]
    fn test_card_and_app_keys_cover_fixed_shape() {
        let mut data = TemplateData::default();
        for key in CardKey::ALL {
            data.card_mut(key).size = 80;
        }
        for key in AppKey::ALL {
            data.app_mut(key).url = Some("https://example.com".into());
        }
        assert_eq!(data.cards.discover.size, 80);
        assert_eq!(data.apps.wifi.url.as_deref(), Some("https://example.com"));
    }
}
