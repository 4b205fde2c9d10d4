//! HTTP request handlers.

pub mod pages;
pub mod simulator;
pub mod templates;

use axum::Json;

use crate::page::{PaletteEntry, palette};

/// GET /api/elements - Element palette metadata for the editor.
pub async fn elements() -> Json<Vec<PaletteEntry>> {
    Json(palette())
}
