//! # Page Pipeline Tests
//!
//! End-to-end coverage of the editing-to-rendering pipeline: compose
//! elements on a canvas, serialize to the persisted document, store and
//! reload them, and render the public HTML — plus the legacy-format
//! fallback chain the public page host depends on.

use pretty_assertions::assert_eq;

use conserje::canvas::{Canvas, CanvasEditor, PointerPos};
use conserje::cms::{MemoryStore, Page, PageStore};
use conserje::page::{
    Content, Element, ElementKind, EventPayload, PageContent, deserialize, render_html, serialize,
};

#[test]
fn compose_serialize_render() {
    let mut editor = CanvasEditor::new(Canvas::new(1200.0, 675.0));

    let heading = editor.add_element(ElementKind::Heading, 40.0, 40.0).id.clone();
    editor.add_element(ElementKind::Text, 40.0, 120.0);
    editor.start_inline_edit(&heading);
    editor.commit_inline_edit(&heading, "Bienvenido al Hotel");

    // Drag the heading; the final document stores the clamped position.
    editor.start_drag(&heading, PointerPos::new(50.0, 50.0));
    editor.pointer_move(PointerPos::new(5000.0, 50.0));
    editor.end_drag();

    let raw = serialize(editor.elements());
    let decoded = deserialize(&raw);
    assert_eq!(decoded, PageContent::Elements(editor.elements().to_vec()));

    let html = decoded.render();
    assert!(html.contains("<h1 style=\"\">Bienvenido al Hotel</h1>"));
    assert!(html.starts_with("<h1")); // list order is render order
}

#[tokio::test]
async fn store_roundtrip_preserves_document() {
    let mut editor = CanvasEditor::new(Canvas::default());
    editor.add_element(ElementKind::Heading, 10.0, 10.0);
    editor.add_element(ElementKind::Event, 10.0, 100.0);

    let mut page = Page::new("Inicio", "inicio");
    page.set_content(serialize(editor.elements()));

    let store = MemoryStore::new();
    store.save(page).await.unwrap();

    let loaded = store.load("inicio").await.unwrap();
    let decoded = deserialize(&loaded.content);
    assert_eq!(decoded, PageContent::Elements(editor.elements().to_vec()));
}

#[test]
fn legacy_bare_array_still_renders() {
    let raw = r#"[
        {"id":"e1","type":"heading","x":0,"y":0,"width":300,"height":48,"content":"Antiguo"},
        {"id":"e2","type":"image","x":0,"y":60,"width":240,"height":160,"content":"/foto.jpg"}
    ]"#;
    let html = deserialize(raw).render();
    assert_eq!(
        html,
        "<h1 style=\"\">Antiguo</h1><img src=\"/foto.jpg\" style=\"\" />"
    );
}

#[test]
fn legacy_plain_html_passes_through() {
    let raw = "<h1>Página legada</h1><p>sin JSON</p>";
    assert_eq!(deserialize(raw).render(), raw);
}

#[test]
fn unrecognized_json_degrades_to_placeholder() {
    assert_eq!(
        deserialize(r#"{"layout":"tv","version":"1.0"}"#).render(),
        "<p>Contenido no válido.</p>"
    );
}

#[test]
fn event_element_renders_decoded_widget() {
    let raw = serialize(&[Element::with_id(
        "ev",
        ElementKind::Event,
        0.0,
        0.0,
        220.0,
        96.0,
        Content::Event(EventPayload::new("13:16", "29.9°C")),
    )]);
    let html = deserialize(&raw).render();
    assert!(html.contains("13:16"));
    assert!(html.contains("29.9°C"));
}

#[test]
fn broken_event_element_renders_error_state() {
    // An event whose stored content is not JSON must surface the visible
    // error badge, never break the page render.
    let raw = r#"{"elements":[
        {"id":"ev","type":"event","x":0,"y":0,"width":220,"height":96,"content":"not json"}
    ],"layout":"tv","version":"1.0"}"#;
    let html = deserialize(raw).render();
    assert!(html.contains("⚠️ Evento inválido"));
}

#[test]
fn styles_render_kebab_cased() {
    let mut element = Element::with_id(
        "e1",
        ElementKind::Text,
        0.0,
        0.0,
        100.0,
        20.0,
        Content::from("Hola"),
    );
    element.styles.insert("fontSize".into(), "18px".into());
    element.styles.insert("textAlign".into(), "center".into());

    let raw = serialize(std::slice::from_ref(&element));
    let html = deserialize(&raw).render();
    assert_eq!(
        html,
        "<p style=\"font-size:18px;text-align:center\">Hola</p>"
    );
}

#[test]
fn render_is_stable_across_roundtrips() {
    let mut editor = CanvasEditor::new(Canvas::default());
    editor.add_element(ElementKind::Heading, 0.0, 0.0);
    editor.add_element(ElementKind::Button, 0.0, 80.0);
    editor.add_element(ElementKind::List, 0.0, 160.0);

    let first = render_html(editor.elements());
    let raw = serialize(editor.elements());
    let second = deserialize(&raw).render();
    let third = deserialize(&serialize(
        deserialize(&raw).elements().unwrap(),
    ))
    .render();

    assert_eq!(first, second);
    assert_eq!(second, third);
}
