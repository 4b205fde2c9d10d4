//! Page document serialization.
//!
//! A page's `content` column holds a JSON-encoded document — a document
//! inside a document. This module is the only producer and consumer of
//! that encoding.
//!
//! The write path has exactly one shape, [`PageDocument`]. The read path
//! is a best-effort chain over three generations of stored pages:
//!
//! 1. a bare JSON array of elements (oldest format),
//! 2. an object with an `elements` field (current format),
//! 3. a raw HTML string that is not JSON at all (legacy pages),
//!
//! and anything else degrades to a fixed placeholder rather than failing
//! the public page render.

use serde::{Deserialize, Serialize};

use super::Element;

/// Layout tag stamped into every new page document.
pub const LAYOUT: &str = "tv";

/// Document format version carried in the persisted shape.
pub const VERSION: &str = "1.0";

/// Placeholder markup for content that parsed as JSON but has no
/// recognizable element list.
pub const INVALID_CONTENT_HTML: &str = "<p>Contenido no válido.</p>";

fn default_layout() -> String {
    LAYOUT.to_string()
}

fn default_version() -> String {
    VERSION.to_string()
}

/// The persisted shape of a CMS page: `{elements, layout, version}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub elements: Vec<Element>,
    #[serde(default = "default_layout")]
    pub layout: String,
    #[serde(default = "default_version")]
    pub version: String,
}

impl PageDocument {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            layout: LAYOUT.to_string(),
            version: VERSION.to_string(),
        }
    }
}

impl Default for PageDocument {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// What a stored `content` string turned out to hold.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    /// An element list, from either the current or the bare-array format.
    Elements(Vec<Element>),
    /// A pre-rendered HTML string, passed through unchanged.
    RawHtml(String),
    /// Valid JSON that is neither an array nor an `elements` object.
    Invalid,
}

impl PageContent {
    /// Render to the HTML fragment the public page host injects.
    pub fn render(&self) -> String {
        match self {
            PageContent::Elements(elements) => super::render_html(elements),
            PageContent::RawHtml(html) => html.clone(),
            PageContent::Invalid => INVALID_CONTENT_HTML.to_string(),
        }
    }

    pub fn elements(&self) -> Option<&[Element]> {
        match self {
            PageContent::Elements(elements) => Some(elements),
            _ => None,
        }
    }
}

/// Encode an element list into the persisted document string.
///
/// This is the only supported write shape; the legacy formats below are
/// read-only.
pub fn serialize(elements: &[Element]) -> String {
    let doc = PageDocument::new(elements.to_vec());
    serde_json::to_value(&doc).unwrap_or_default().to_string()
}

/// Decode a stored `content` string, attempting each legacy format in
/// order. First success wins; the chain never fails outright.
pub fn deserialize(raw: &str) -> PageContent {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        // Not JSON at all: a legacy plain-HTML page, passed through.
        Err(_) => return PageContent::RawHtml(raw.to_string()),
    };

    match value {
        serde_json::Value::Array(_) => match serde_json::from_value(value) {
            Ok(elements) => PageContent::Elements(elements),
            Err(_) => PageContent::Invalid,
        },
        serde_json::Value::Object(map) if map.contains_key("elements") => {
            match serde_json::from_value::<PageDocument>(serde_json::Value::Object(map)) {
                Ok(doc) => PageContent::Elements(doc.elements),
                Err(_) => PageContent::Invalid,
            }
        }
        _ => PageContent::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Content, ElementKind};
    use pretty_assertions::assert_eq;

    fn sample_elements() -> Vec<Element> {
        vec![
            Element::with_id(
                "e1",
                ElementKind::Heading,
                10.0,
                10.0,
                300.0,
                48.0,
                Content::from("Bienvenido"),
            ),
            Element::with_id(
                "e2",
                ElementKind::Text,
                10.0,
                80.0,
                200.0,
                40.0,
                Content::from("Hola"),
            ),
        ]
    }

    #[test]
    fn test_serialize_shape() {
        let raw = serialize(&sample_elements());
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["layout"], LAYOUT);
        assert_eq!(value["version"], VERSION);
        assert_eq!(value["elements"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_roundtrip_current_format() {
        let elements = sample_elements();
        let decoded = deserialize(&serialize(&elements));
        assert_eq!(decoded, PageContent::Elements(elements));
    }

    #[test]
    fn test_roundtrip_with_event_element() {
        let mut elements = sample_elements();
        elements.push(Element::with_id(
            "ev",
            ElementKind::Event,
            50.0,
            50.0,
            220.0,
            96.0,
            Content::Event(crate::page::EventPayload::new("13:16", "29.9°C")),
        ));
        let decoded = deserialize(&serialize(&elements));
        assert_eq!(decoded, PageContent::Elements(elements));
    }

    #[test]
    fn test_deserialize_bare_array() {
        let raw = r#"[{"id":"e1","type":"text","x":0,"y":0,"width":100,"height":20,"content":"Hola"}]"#;
        match deserialize(raw) {
            PageContent::Elements(elements) => {
                assert_eq!(elements.len(), 1);
                assert_eq!(elements[0].id, "e1");
            }
            other => panic!("expected elements, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_non_json_is_passthrough() {
        let raw = "<h1>Página legada</h1>";
        assert_eq!(deserialize(raw), PageContent::RawHtml(raw.to_string()));
    }

    #[test]
    fn test_deserialize_object_without_elements() {
        assert_eq!(deserialize(r#"{"layout":"tv"}"#), PageContent::Invalid);
        assert_eq!(deserialize("42"), PageContent::Invalid);
        assert_eq!(deserialize("\"cadena\""), PageContent::Invalid);
    }

    #[test]
    fn test_deserialize_malformed_element_entries() {
        // Array format but entries missing required fields: placeholder,
        // never a crash on the public page.
        let raw = r#"[{"type":"text"}]"#;
        assert_eq!(deserialize(raw), PageContent::Invalid);
    }

    #[test]
    fn test_invalid_renders_placeholder() {
        assert_eq!(PageContent::Invalid.render(), INVALID_CONTENT_HTML);
    }

    #[test]
    fn test_raw_html_renders_unchanged() {
        let html = "<div>tal cual</div>".to_string();
        assert_eq!(PageContent::RawHtml(html.clone()).render(), html);
    }

    #[test]
    fn test_document_defaults_fill_missing_tags() {
        let raw = r#"{"elements":[]}"#;
        let doc: PageDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.layout, LAYOUT);
        assert_eq!(doc.version, VERSION);
    }
}
