//! Static HTML rendering of an element list.
//!
//! Produces the fragment injected into the public page host. Elements are
//! emitted in list order — order IS stacking order, first element
//! earliest in the document — and concatenated with no separator, so the
//! output is a pure function of the list.
//!
//! Content is NOT HTML-escaped. Pages are authored by trusted hotel
//! operators; exposing this pipeline to untrusted authors would require
//! adding escaping first.

use super::{Content, Element, ElementKind};

/// Badge markup for an `event` element whose content never decoded.
pub const INVALID_EVENT_HTML: &str = "⚠️ Evento inválido";

/// Render each element to one HTML tag, in list order.
pub fn render_html(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        render_element(&mut out, element);
    }
    out
}

fn render_element(out: &mut String, element: &Element) {
    let style = style_attr(element);
    let content = content_text(element);

    match element.kind {
        ElementKind::Text => {
            out.push_str(&format!("<p style=\"{}\">{}</p>", style, content));
        }
        ElementKind::Heading => {
            out.push_str(&format!("<h1 style=\"{}\">{}</h1>", style, content));
        }
        ElementKind::Button => {
            out.push_str(&format!("<button style=\"{}\">{}</button>", style, content));
        }
        ElementKind::Image => {
            out.push_str(&format!("<img src=\"{}\" style=\"{}\" />", content, style));
        }
        ElementKind::Video => {
            out.push_str(&format!("<div style=\"{}\">[Video: {}]</div>", style, content));
        }
        ElementKind::List => {
            out.push_str(&format!("<ul style=\"{}\"><li>{}</li></ul>", style, content));
        }
        ElementKind::Event => {
            out.push_str(&render_event(element, &style));
        }
        // container, link: plain strings in a plain box
        ElementKind::Container | ElementKind::Link => {
            out.push_str(&format!("<div style=\"{}\">{}</div>", style, content));
        }
    }
}

/// An event renders as a small widget with title and description; content
/// that never decoded renders the visible error badge instead.
fn render_event(element: &Element, style: &str) -> String {
    match &element.content {
        Content::Event(payload) => {
            let title = if payload.title.is_empty() {
                "Evento sin título"
            } else {
                &payload.title
            };
            let description = if payload.description.is_empty() {
                "Sin descripción"
            } else {
                &payload.description
            };
            format!(
                "<div style=\"{}\"><div class=\"event-title\">{}</div><div class=\"event-description\">{}</div></div>",
                style, title, description
            )
        }
        Content::Plain(_) => format!("<div style=\"{}\">{}</div>", style, INVALID_EVENT_HTML),
    }
}

fn content_text(element: &Element) -> String {
    match &element.content {
        Content::Plain(s) => s.clone(),
        Content::Event(_) => element.content.to_wire(),
    }
}

/// Build the `style` attribute value: camelCase keys become kebab-case,
/// pairs join with `;`. An element with no styles yields the empty string
/// (the attribute itself is always emitted).
fn style_attr(element: &Element) -> String {
    element
        .styles
        .iter()
        .map(|(key, value)| format!("{}:{}", to_kebab_case(key), value))
        .collect::<Vec<_>>()
        .join(";")
}

fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::EventPayload;
    use pretty_assertions::assert_eq;

    fn element(kind: ElementKind, content: &str) -> Element {
        Element::with_id("e1", kind, 0.0, 0.0, 100.0, 20.0, Content::from(content))
    }

    #[test]
    fn test_text_tag() {
        assert_eq!(
            render_html(&[element(ElementKind::Text, "Hola")]),
            "<p style=\"\">Hola</p>"
        );
    }

    #[test]
    fn test_heading_tag() {
        assert_eq!(
            render_html(&[element(ElementKind::Heading, "Título")]),
            "<h1 style=\"\">Título</h1>"
        );
    }

    #[test]
    fn test_button_tag() {
        assert_eq!(
            render_html(&[element(ElementKind::Button, "Pulsa")]),
            "<button style=\"\">Pulsa</button>"
        );
    }

    #[test]
    fn test_image_tag_uses_content_as_src() {
        assert_eq!(
            render_html(&[element(ElementKind::Image, "/foto.jpg")]),
            "<img src=\"/foto.jpg\" style=\"\" />"
        );
    }

    #[test]
    fn test_video_placeholder() {
        assert_eq!(
            render_html(&[element(ElementKind::Video, "clip.mp4")]),
            "<div style=\"\">[Video: clip.mp4]</div>"
        );
    }

    #[test]
    fn test_list_single_item() {
        assert_eq!(
            render_html(&[element(ElementKind::List, "uno")]),
            "<ul style=\"\"><li>uno</li></ul>"
        );
    }

    #[test]
    fn test_container_and_link_fall_back_to_div() {
        assert_eq!(
            render_html(&[element(ElementKind::Container, "caja")]),
            "<div style=\"\">caja</div>"
        );
        assert_eq!(
            render_html(&[element(ElementKind::Link, "ir")]),
            "<div style=\"\">ir</div>"
        );
    }

    #[test]
    fn test_event_widget_shows_title_and_description() {
        let el = Element::with_id(
            "ev",
            ElementKind::Event,
            0.0,
            0.0,
            220.0,
            96.0,
            Content::Event(EventPayload::new("13:16", "29.9°C")),
        );
        let html = render_html(&[el]);
        assert!(html.contains("13:16"));
        assert!(html.contains("29.9°C"));
        assert!(!html.contains(INVALID_EVENT_HTML));
    }

    #[test]
    fn test_event_empty_fields_show_fallback_labels() {
        let el = Element::with_id(
            "ev",
            ElementKind::Event,
            0.0,
            0.0,
            220.0,
            96.0,
            Content::Event(EventPayload::default()),
        );
        let html = render_html(&[el]);
        assert!(html.contains("Evento sin título"));
        assert!(html.contains("Sin descripción"));
    }

    #[test]
    fn test_invalid_event_renders_error_badge() {
        let el = Element::with_id(
            "ev",
            ElementKind::Event,
            0.0,
            0.0,
            220.0,
            96.0,
            Content::Plain("not json".into()),
        );
        let html = render_html(&[el]);
        assert!(html.contains(INVALID_EVENT_HTML));
        assert!(!html.contains("not json"));
    }

    #[test]
    fn test_styles_kebab_cased_and_joined() {
        let mut el = element(ElementKind::Text, "x");
        el.styles.insert("fontSize".into(), "16px".into());
        el.styles.insert("backgroundColor".into(), "red".into());
        // BTreeMap iterates keys in lexicographic order
        assert_eq!(
            render_html(&[el]),
            "<p style=\"background-color:red;font-size:16px\">x</p>"
        );
    }

    #[test]
    fn test_concatenation_in_list_order() {
        let html = render_html(&[
            element(ElementKind::Heading, "A"),
            element(ElementKind::Text, "B"),
        ]);
        assert_eq!(html, "<h1 style=\"\">A</h1><p style=\"\">B</p>");
    }

    #[test]
    fn test_render_is_deterministic() {
        let elements = vec![
            element(ElementKind::Heading, "A"),
            element(ElementKind::Text, "B"),
            element(ElementKind::Image, "/a.png"),
        ];
        assert_eq!(render_html(&elements), render_html(&elements));
    }

    #[test]
    fn test_no_escaping_of_operator_content() {
        // Trusted-input pipeline: markup in content passes through as-is.
        assert_eq!(
            render_html(&[element(ElementKind::Text, "<b>negrita</b>")]),
            "<p style=\"\"><b>negrita</b></p>"
        );
    }
}
