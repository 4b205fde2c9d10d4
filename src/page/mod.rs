//! # Canvas Element Model
//!
//! A single type hierarchy that is both the Rust API and the persisted
//! JSON shape of a CMS page element. `Element` is constructible in Rust
//! and deserializable from the stored page document.
//!
//! ```
//! use conserje::page::{Element, ElementKind};
//!
//! // Rust construction with palette defaults
//! let el = Element::new(ElementKind::Text, 10.0, 10.0);
//!
//! // JSON deserialization from a stored document
//! let el: Element = serde_json::from_str(
//!     r#"{"id":"e1","type":"text","x":10,"y":10,"width":100,"height":20,"content":"Hola"}"#,
//! ).unwrap();
//! assert_eq!(el.kind, ElementKind::Text);
//! ```
//!
//! ## The `content` quirk
//!
//! On the wire `content` is always a string. For every kind except
//! `event` the string is the literal text/URL the element displays. For
//! `event` the string is itself a JSON document carrying the event
//! payload (plus whatever extra fields the legacy page format stored).
//! Decoding happens once, here at the model boundary: an `event` element
//! whose content string is not valid JSON keeps the raw string and is
//! rendered in the visible invalid-event state everywhere downstream,
//! instead of each renderer re-parsing ad hoc.

pub mod html;
pub mod serialize;

pub use html::render_html;
pub use serialize::{PageContent, PageDocument, deserialize, serialize};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::ConserjeError;

/// The closed set of element kinds a canvas page can contain.
///
/// The kind determines both the editing affordances (inline edit, event
/// editor dialog) and the HTML tag emitted on render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Heading,
    Image,
    Button,
    Video,
    Link,
    List,
    Container,
    Event,
}

impl ElementKind {
    /// Every kind, in palette display order.
    pub const ALL: [ElementKind; 9] = [
        ElementKind::Text,
        ElementKind::Heading,
        ElementKind::Image,
        ElementKind::Button,
        ElementKind::Video,
        ElementKind::Link,
        ElementKind::List,
        ElementKind::Container,
        ElementKind::Event,
    ];

    /// Human-readable display label for the editor palette.
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Text => "Texto",
            ElementKind::Heading => "Título",
            ElementKind::Image => "Imagen",
            ElementKind::Button => "Botón",
            ElementKind::Video => "Video",
            ElementKind::Link => "Enlace",
            ElementKind::List => "Lista",
            ElementKind::Container => "Contenedor",
            ElementKind::Event => "Evento",
        }
    }

    /// Whether double-clicking this kind enters inline text editing.
    pub fn inline_editable(&self) -> bool {
        matches!(self, ElementKind::Text | ElementKind::Heading)
    }

    /// The serde type tag (the `"type"` field of the wire format).
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Heading => "heading",
            ElementKind::Image => "image",
            ElementKind::Button => "button",
            ElementKind::Video => "video",
            ElementKind::Link => "link",
            ElementKind::List => "list",
            ElementKind::Container => "container",
            ElementKind::Event => "event",
        }
    }
}

/// Structured payload of an `event` element.
///
/// `extra` preserves whatever additional fields the legacy page-template
/// format stored alongside title/description, so decoding and re-encoding
/// an event never loses data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EventPayload {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Parse the wire string of an `event` element.
    pub fn parse(raw: &str) -> Result<Self, ConserjeError> {
        serde_json::from_str(raw).map_err(|e| ConserjeError::InvalidEventContent(e.to_string()))
    }
}

/// Element content: plain text for most kinds, a decoded event payload
/// for `event` elements whose content string parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Plain(String),
    Event(EventPayload),
}

impl Content {
    /// Decode the wire string for the given kind.
    ///
    /// Only `event` elements attempt JSON decoding; a failed parse keeps
    /// the raw string so the element round-trips unchanged and renders
    /// the invalid-event state.
    pub fn decode(kind: ElementKind, raw: String) -> Self {
        if kind == ElementKind::Event {
            return match EventPayload::parse(&raw) {
                Ok(payload) => Content::Event(payload),
                Err(_) => Content::Plain(raw),
            };
        }
        Content::Plain(raw)
    }

    /// Encode back to the wire string representation.
    pub fn to_wire(&self) -> String {
        match self {
            Content::Plain(s) => s.clone(),
            Content::Event(payload) => {
                serde_json::to_value(payload).unwrap_or_default().to_string()
            }
        }
    }

    /// The plain text, or `None` for a decoded event payload.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Content::Plain(s) => Some(s),
            Content::Event(_) => None,
        }
    }

    /// The decoded event payload, if any.
    pub fn as_event(&self) -> Option<&EventPayload> {
        match self {
            Content::Plain(_) => None,
            Content::Event(payload) => Some(payload),
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Plain(s.to_string())
    }
}

/// One positioned, typed object on the editing canvas.
///
/// Position and size are canvas-local pixels. The canvas owner keeps
/// `0 <= x <= canvas.width - width` (same for `y`) after every drag and
/// resize; see [`crate::canvas::CanvasEditor`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Unique within the owning collection, stable for the element's lifetime.
    pub id: String,
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub content: Content,
    /// CSS-like properties, camelCase keys (e.g. `fontSize`). Empty = no
    /// inline styling.
    pub styles: BTreeMap<String, String>,
}

/// Wire shape of an element: identical fields, `content` as a string.
#[derive(Serialize, Deserialize)]
struct RawElement {
    id: String,
    #[serde(rename = "type")]
    kind: ElementKind,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    content: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    styles: BTreeMap<String, String>,
}

impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RawElement {
            id: self.id.clone(),
            kind: self.kind,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            content: self.content.to_wire(),
            styles: self.styles.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawElement::deserialize(deserializer)?;
        Ok(Element {
            content: Content::decode(raw.kind, raw.content),
            id: raw.id,
            kind: raw.kind,
            x: raw.x,
            y: raw.y,
            width: raw.width,
            height: raw.height,
            styles: raw.styles,
        })
    }
}

impl Element {
    /// Create an element with a fresh id and the palette defaults for its
    /// kind. New elements carry starter content so they are immediately
    /// visible on the canvas, not empty.
    pub fn new(kind: ElementKind, x: f64, y: f64) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            x,
            y,
            width,
            height,
            content: kind.default_content(),
            styles: BTreeMap::new(),
        }
    }

    /// Construct with an explicit id (tests and store round-trips).
    pub fn with_id(
        id: impl Into<String>,
        kind: ElementKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        content: Content,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            x,
            y,
            width,
            height,
            content,
            styles: BTreeMap::new(),
        }
    }
}

impl ElementKind {
    /// Default width/height for a freshly added element of this kind.
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            ElementKind::Text => (200.0, 40.0),
            ElementKind::Heading => (300.0, 48.0),
            ElementKind::Image => (240.0, 160.0),
            ElementKind::Button => (140.0, 40.0),
            ElementKind::Video => (320.0, 180.0),
            ElementKind::Link => (160.0, 32.0),
            ElementKind::List => (200.0, 80.0),
            ElementKind::Container => (240.0, 160.0),
            ElementKind::Event => (220.0, 96.0),
        }
    }

    /// Starter content for a freshly added element of this kind.
    pub fn default_content(&self) -> Content {
        match self {
            ElementKind::Text => Content::from("Texto de ejemplo"),
            ElementKind::Heading => Content::from("Título"),
            ElementKind::Image => Content::from("/placeholder.svg"),
            ElementKind::Button => Content::from("Botón"),
            ElementKind::Video => Content::from("https://example.com/video.mp4"),
            ElementKind::Link => Content::from("Enlace"),
            ElementKind::List => Content::from("Elemento de lista"),
            ElementKind::Container => Content::from(""),
            ElementKind::Event => Content::Event(EventPayload::new("Nuevo evento", "")),
        }
    }
}

/// Element kind metadata for the frontend palette.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteEntry {
    #[serde(rename = "type")]
    pub type_name: String,
    pub label: String,
}

/// Palette metadata for every element kind, in display order.
///
/// Injected into the editor frontend at serve time, the same way the
/// simulator exposes its card and app keys.
pub fn palette() -> Vec<PaletteEntry> {
    ElementKind::ALL
        .iter()
        .map(|kind| PaletteEntry {
            type_name: kind.type_name().to_string(),
            label: kind.label().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_type_names_match_serde() {
        for kind in ElementKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json.as_str().unwrap(), kind.type_name());
        }
    }

    #[test]
    fn test_new_element_has_unique_id() {
        let a = Element::new(ElementKind::Text, 0.0, 0.0);
        let b = Element::new(ElementKind::Text, 0.0, 0.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_plain_content_roundtrip() {
        let el = Element::with_id(
            "e1",
            ElementKind::Text,
            10.0,
            20.0,
            100.0,
            40.0,
            Content::from("Hola"),
        );
        let json = serde_json::to_string(&el).unwrap();
        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, el);
    }

    #[test]
    fn test_event_content_decodes_at_boundary() {
        let json = r#"{"id":"ev1","type":"event","x":0,"y":0,"width":220,"height":96,
                       "content":"{\"title\":\"13:16\",\"description\":\"29.9°C\"}"}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        let payload = el.content.as_event().expect("decoded event payload");
        assert_eq!(payload.title, "13:16");
        assert_eq!(payload.description, "29.9°C");
    }

    #[test]
    fn test_event_content_keeps_extra_fields() {
        let json = r#"{"id":"ev1","type":"event","x":0,"y":0,"width":220,"height":96,
                       "content":"{\"title\":\"Cena\",\"description\":\"\",\"location\":\"Lobby\"}"}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        let payload = el.content.as_event().unwrap();
        assert_eq!(payload.extra["location"], "Lobby");

        // Re-encoding carries the extra field along
        let wire = el.content.to_wire();
        let reparsed: EventPayload = serde_json::from_str(&wire).unwrap();
        assert_eq!(reparsed, *payload);
    }

    #[test]
    fn test_invalid_event_content_stays_plain() {
        let json = r#"{"id":"ev1","type":"event","x":0,"y":0,"width":220,"height":96,
                       "content":"not json"}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.content, Content::Plain("not json".into()));
        // and round-trips verbatim
        let back: Element = serde_json::from_str(&serde_json::to_string(&el).unwrap()).unwrap();
        assert_eq!(back.content, Content::Plain("not json".into()));
    }

    #[test]
    fn test_event_payload_parse_error_kind() {
        let err = EventPayload::parse("not json").unwrap_err();
        assert!(matches!(err, ConserjeError::InvalidEventContent(_)));
    }

    #[test]
    fn test_event_json_string_is_not_an_object() {
        // Valid JSON, but not an event object: treated as undecodable
        let content = Content::decode(ElementKind::Event, "\"solo texto\"".into());
        assert_eq!(content, Content::Plain("\"solo texto\"".into()));
    }

    #[test]
    fn test_non_event_kinds_never_decode() {
        let content = Content::decode(
            ElementKind::Text,
            "{\"title\":\"no\",\"description\":\"no\"}".into(),
        );
        assert!(content.as_event().is_none());
    }

    #[test]
    fn test_empty_styles_omitted_from_wire() {
        let el = Element::new(ElementKind::Button, 0.0, 0.0);
        let json = serde_json::to_value(&el).unwrap();
        assert!(json.get("styles").is_none());
    }

    #[test]
    fn test_styles_roundtrip() {
        let mut el = Element::new(ElementKind::Text, 0.0, 0.0);
        el.styles.insert("fontSize".into(), "16px".into());
        el.styles.insert("color".into(), "red".into());
        let back: Element =
            serde_json::from_str(&serde_json::to_string(&el).unwrap()).unwrap();
        assert_eq!(back.styles, el.styles);
    }

    #[test]
    fn test_palette_covers_all_kinds() {
        let entries = palette();
        assert_eq!(entries.len(), ElementKind::ALL.len());

        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            assert!(seen.insert(&entry.type_name), "duplicate: {}", entry.type_name);
        }
    }
}
