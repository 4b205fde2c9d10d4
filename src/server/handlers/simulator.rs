//! Simulator API handlers: the live configuration and its TV preview.

use axum::{Json, extract::State, http::StatusCode, response::Html};
use chrono::Local;
use std::sync::Arc;

use crate::simulator::{TemplateData, TemplatePatch, render_preview};

use super::super::state::AppState;

/// GET /api/simulator - The live configuration.
pub async fn get(State(state): State<Arc<AppState>>) -> Json<TemplateData> {
    Json(state.template.read().await.clone())
}

/// PATCH /api/simulator - Apply a partial update (top-level shallow
/// replace, exactly the form editor's contract) and return the result.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<TemplatePatch>,
) -> Json<TemplateData> {
    let mut template = state.template.write().await;
    template.apply_partial(patch);
    Json(template.clone())
}

/// POST /api/simulator/reset - Back to the hardcoded default.
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<TemplateData> {
    let mut template = state.template.write().await;
    template.reset();
    Json(template.clone())
}

/// GET /api/simulator/export - Pretty JSON for the download interface.
pub async fn export(State(state): State<Arc<AppState>>) -> String {
    state.template.read().await.export_json()
}

/// POST /api/simulator/import - Replace the live configuration with an
/// exported blob.
pub async fn import(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<TemplateData>, (StatusCode, String)> {
    let data =
        TemplateData::import_json(&body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    *state.template.write().await = data.clone();
    Ok(Json(data))
}

/// GET /api/simulator/preview - The simulated home screen as HTML.
pub async fn preview(State(state): State<Arc<AppState>>) -> Html<String> {
    let template = state.template.read().await;
    Html(render_preview(&template, Local::now()))
}

/// POST /api/simulator/preview - Preview an arbitrary configuration
/// without touching the live one.
pub async fn preview_of(Json(data): Json<TemplateData>) -> Html<String> {
    Html(render_preview(&data, Local::now()))
}
