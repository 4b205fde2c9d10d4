//! # Template Libraries
//!
//! In-memory catalogs of named template snapshots:
//!
//! - [`TemplateLibrary`] holds TV-template entries, each wrapping one
//!   [`TemplateData`] snapshot. Selecting an entry replaces the live
//!   simulator configuration.
//! - [`WebLibrary`] holds multi-file static site bundles with a
//!   designated entry page; [`WebLibrary::assemble`] inlines a bundle's
//!   CSS/JS around a chosen page for the TV frame.
//!
//! Both catalogs duplicate by value (fresh id, fresh timestamp, name
//! suffixed "(Copy)") and refuse to delete their last remaining entry.
//! Nothing here persists beyond the process; that belongs to the store
//! collaborator.

mod presets;

pub use presets::{built_in_tv_templates, built_in_web_templates};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConserjeError;
use crate::simulator::TemplateData;

/// A named, timestamped snapshot of the simulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub data: TemplateData,
    pub created_at: DateTime<Utc>,
}

/// Catalog of TV templates. Always holds at least one entry.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: Vec<TvTemplate>,
}

impl TemplateLibrary {
    /// A library seeded with the built-in presets.
    pub fn built_in() -> Self {
        Self {
            templates: built_in_tv_templates(),
        }
    }

    pub fn entries(&self) -> &[TvTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TvTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Snapshot the current simulator configuration under a new name.
    /// The thumbnail is the template's own background image.
    pub fn save(&mut self, name: impl Into<String>, data: TemplateData) -> &TvTemplate {
        let entry = TvTemplate {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: "Custom Template".into(),
            thumbnail: data.background_image.clone(),
            data,
            created_at: Utc::now(),
        };
        self.templates.push(entry);
        self.templates.last().expect("just pushed")
    }

    /// Duplicate an entry by value with a fresh id and timestamp.
    pub fn duplicate(&mut self, id: &str) -> Result<&TvTemplate, ConserjeError> {
        let source = self
            .get(id)
            .ok_or_else(|| ConserjeError::NotFound(format!("template '{}'", id)))?;
        let copy = TvTemplate {
            id: Uuid::new_v4().to_string(),
            name: format!("{} (Copy)", source.name),
            created_at: Utc::now(),
            ..source.clone()
        };
        self.templates.push(copy);
        Ok(self.templates.last().expect("just pushed"))
    }

    /// Remove an entry. The last remaining entry is protected.
    pub fn remove(&mut self, id: &str) -> Result<TvTemplate, ConserjeError> {
        let index = self
            .templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ConserjeError::NotFound(format!("template '{}'", id)))?;
        if self.templates.len() <= 1 {
            return Err(ConserjeError::LastEntry(format!("template '{}'", id)));
        }
        Ok(self.templates.remove(index))
    }

    /// Snapshot to load into the live simulator configuration.
    pub fn select(&self, id: &str) -> Result<TemplateData, ConserjeError> {
        self.get(id)
            .map(|t| t.data.clone())
            .ok_or_else(|| ConserjeError::NotFound(format!("template '{}'", id)))
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::built_in()
    }
}

/// File kind within a web template bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebFileKind {
    Html,
    Css,
    Js,
    Json,
    Image,
}

/// One file of a web template bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebFile {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WebFileKind,
    pub content: String,
    pub path: String,
}

impl WebFile {
    pub fn new(
        name: impl Into<String>,
        kind: WebFileKind,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            content: content.into(),
            path: path.into(),
        }
    }
}

/// A named bundle of static site files with a designated entry page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub files: Vec<WebFile>,
    /// Which file the TV shows first.
    pub main_file: String,
    pub created_at: DateTime<Utc>,
}

impl WebTemplate {
    pub fn html_pages(&self) -> Vec<&WebFile> {
        self.files
            .iter()
            .filter(|f| f.kind == WebFileKind::Html)
            .collect()
    }

    pub fn file(&self, name: &str) -> Option<&WebFile> {
        self.files.iter().find(|f| f.name == name)
    }
}

/// Catalog of web template bundles, with the same duplication and
/// last-entry rules as the TV library.
#[derive(Debug, Clone)]
pub struct WebLibrary {
    templates: Vec<WebTemplate>,
}

impl WebLibrary {
    pub fn built_in() -> Self {
        Self {
            templates: built_in_web_templates(),
        }
    }

    pub fn entries(&self) -> &[WebTemplate] {
        &self.templates
    }

    pub fn get(&self, id: &str) -> Option<&WebTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn add(&mut self, template: WebTemplate) -> &WebTemplate {
        self.templates.push(template);
        self.templates.last().expect("just pushed")
    }

    pub fn duplicate(&mut self, id: &str) -> Result<&WebTemplate, ConserjeError> {
        let source = self
            .get(id)
            .ok_or_else(|| ConserjeError::NotFound(format!("web template '{}'", id)))?;
        let copy = WebTemplate {
            id: Uuid::new_v4().to_string(),
            name: format!("{} (Copy)", source.name),
            created_at: Utc::now(),
            ..source.clone()
        };
        self.templates.push(copy);
        Ok(self.templates.last().expect("just pushed"))
    }

    pub fn remove(&mut self, id: &str) -> Result<WebTemplate, ConserjeError> {
        let index = self
            .templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ConserjeError::NotFound(format!("web template '{}'", id)))?;
        if self.templates.len() <= 1 {
            return Err(ConserjeError::LastEntry(format!("web template '{}'", id)));
        }
        Ok(self.templates.remove(index))
    }

    /// Assemble a full HTML page for the TV frame: the chosen page's body
    /// with every CSS file inlined as `<style>` and every JS file as
    /// `<script>`.
    pub fn assemble(&self, id: &str, page: Option<&str>) -> Result<String, ConserjeError> {
        let template = self
            .get(id)
            .ok_or_else(|| ConserjeError::NotFound(format!("web template '{}'", id)))?;
        let page_name = page.unwrap_or(&template.main_file);
        let file = template
            .file(page_name)
            .ok_or_else(|| ConserjeError::NotFound(format!("page '{}'", page_name)))?;
        if file.kind != WebFileKind::Html {
            return Err(ConserjeError::NotFound(format!(
                "page '{}' is not an HTML file",
                page_name
            )));
        }

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"UTF-8\">\n");
        out.push_str(&format!("<title>{} - {}</title>\n", template.name, page_name));
        for css in template.files.iter().filter(|f| f.kind == WebFileKind::Css) {
            out.push_str(&format!("<style>{}</style>\n", css.content));
        }
        out.push_str("</head>\n<body>\n");
        out.push_str(body_of(&file.content));
        out.push('\n');
        for js in template.files.iter().filter(|f| f.kind == WebFileKind::Js) {
            out.push_str(&format!("<script>{}</script>\n", js.content));
        }
        out.push_str("</body>\n</html>\n");
        Ok(out)
    }
}

impl Default for WebLibrary {
    fn default() -> Self {
        Self::built_in()
    }
}

/// Extract the body of a stored HTML page. Bundle files are full pages;
/// inlining one into the assembled shell must not nest doctype/head.
fn body_of(content: &str) -> &str {
    let Some(open) = content.find("<body") else {
        return content;
    };
    let Some(open_end) = content[open..].find('>') else {
        return content;
    };
    let inner_start = open + open_end + 1;
    let inner_end = content[inner_start..]
        .find("</body>")
        .map(|i| inner_start + i)
        .unwrap_or(content.len());
    content[inner_start..inner_end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_built_in_library_has_presets() {
        let library = TemplateLibrary::built_in();
        assert!(library.len() >= 2);
        assert!(library.entries().iter().any(|t| t.id == "hotel-hilton"));
    }

    #[test]
    fn test_save_snapshots_current_data() {
        let mut library = TemplateLibrary::built_in();
        let before = library.len();
        let mut data = TemplateData::default();
        data.set_background("https://example.com/fondo.jpg");

        let entry = library.save("Mi plantilla", data.clone());
        assert_eq!(entry.name, "Mi plantilla");
        assert_eq!(entry.thumbnail, "https://example.com/fondo.jpg");
        assert_eq!(entry.data, data);
        assert_eq!(library.len(), before + 1);
    }

    #[test]
    fn test_duplicate_gets_fresh_id_and_copy_suffix() {
        let mut library = TemplateLibrary::built_in();
        let copy = library.duplicate("hotel-hilton").unwrap().clone();
        assert_ne!(copy.id, "hotel-hilton");
        assert_eq!(copy.name, "Hotel Hilton (Copy)");
        assert_eq!(copy.data, library.get("hotel-hilton").unwrap().data);
    }

    #[test]
    fn test_duplicate_unknown_id_fails() {
        let mut library = TemplateLibrary::built_in();
        assert!(matches!(
            library.duplicate("nope"),
            Err(ConserjeError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove_protects_last_entry() {
        let mut library = TemplateLibrary::built_in();
        while library.len() > 1 {
            let id = library.entries()[0].id.clone();
            library.remove(&id).unwrap();
        }
        let last = library.entries()[0].id.clone();
        assert!(matches!(
            library.remove(&last),
            Err(ConserjeError::LastEntry(_))
        ));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_select_clones_the_snapshot() {
        let library = TemplateLibrary::built_in();
        let data = library.select("hotel-hilton").unwrap();
        assert_eq!(data, library.get("hotel-hilton").unwrap().data);
        assert!(matches!(
            library.select("nope"),
            Err(ConserjeError::NotFound(_))
        ));
    }

    #[test]
    fn test_web_library_html_pages() {
        let library = WebLibrary::built_in();
        let template = &library.entries()[0];
        let pages = template.html_pages();
        assert!(!pages.is_empty());
        assert!(pages.iter().any(|p| p.name == template.main_file));
    }

    #[test]
    fn test_web_assemble_inlines_css_and_js() {
        let library = WebLibrary::built_in();
        let template = &library.entries()[0];
        let html = library.assemble(&template.id, None).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<script>"));
        // the inner page's own document scaffolding must not nest
        assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    }

    #[test]
    fn test_web_assemble_unknown_page_fails() {
        let library = WebLibrary::built_in();
        let template = &library.entries()[0];
        assert!(matches!(
            library.assemble(&template.id, Some("nope.html")),
            Err(ConserjeError::NotFound(_))
        ));
    }

    #[test]
    fn test_web_assemble_rejects_non_html_page() {
        let library = WebLibrary::built_in();
        let template = &library.entries()[0];
        let css = template
            .files
            .iter()
            .find(|f| f.kind == WebFileKind::Css)
            .unwrap()
            .name
            .clone();
        assert!(library.assemble(&template.id, Some(&css)).is_err());
    }

    #[test]
    fn test_web_remove_protects_last_entry() {
        let mut library = WebLibrary::built_in();
        while library.entries().len() > 1 {
            let id = library.entries()[0].id.clone();
            library.remove(&id).unwrap();
        }
        let last = library.entries()[0].id.clone();
        assert!(matches!(
            library.remove(&last),
            Err(ConserjeError::LastEntry(_))
        ));
    }

    #[test]
    fn test_body_of_extracts_inner_body() {
        let html = "<!DOCTYPE html><html><head><title>x</title></head><body class=\"a\"><p>hola</p></body></html>";
        assert_eq!(body_of(html), "<p>hola</p>");
    }

    #[test]
    fn test_body_of_passes_fragments_through() {
        assert_eq!(body_of("<p>sin body</p>"), "<p>sin body</p>");
    }
}
