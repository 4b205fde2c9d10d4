//! Template library API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ConserjeError;
use crate::library::{TvTemplate, WebTemplate};
use crate::simulator::TemplateData;

use super::super::state::AppState;

fn reject(err: ConserjeError) -> (StatusCode, String) {
    let status = match err {
        ConserjeError::NotFound(_) => StatusCode::NOT_FOUND,
        ConserjeError::LastEntry(_) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

/// GET /api/templates - List the TV template catalog.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<TvTemplate>> {
    Json(state.tv_library.read().await.entries().to_vec())
}

/// Request body for saving the current configuration as a template.
#[derive(Deserialize)]
pub struct SaveTemplateRequest {
    pub name: String,
    /// Snapshot to store; defaults to the live configuration.
    pub data: Option<TemplateData>,
}

/// POST /api/templates - Save a snapshot under a new name.
pub async fn save(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveTemplateRequest>,
) -> Result<(StatusCode, Json<TvTemplate>), (StatusCode, String)> {
    if req.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "template name is empty".into()));
    }
    let data = match req.data {
        Some(data) => data,
        None => state.template.read().await.clone(),
    };
    let mut library = state.tv_library.write().await;
    let entry = library.save(req.name.trim(), data).clone();
    tracing::info!(id = %entry.id, name = %entry.name, "template saved");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/templates/:id/select - Load a snapshot into the live
/// configuration and return it.
pub async fn select(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TemplateData>, (StatusCode, String)> {
    let data = state.tv_library.read().await.select(&id).map_err(reject)?;
    *state.template.write().await = data.clone();
    Ok(Json(data))
}

/// POST /api/templates/:id/duplicate
pub async fn duplicate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<TvTemplate>), (StatusCode, String)> {
    let mut library = state.tv_library.write().await;
    let copy = library.duplicate(&id).map_err(reject)?.clone();
    Ok((StatusCode::CREATED, Json(copy)))
}

/// DELETE /api/templates/:id - Refused for the last remaining entry.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .tv_library
        .write()
        .await
        .remove(&id)
        .map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/web-templates - List the web bundle catalog.
pub async fn list_web(State(state): State<Arc<AppState>>) -> Json<Vec<WebTemplate>> {
    Json(state.web_library.read().await.entries().to_vec())
}

/// GET /api/web-templates/:id/pages - The bundle's HTML page names.
pub async fn web_pages(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    let library = state.web_library.read().await;
    let template = library
        .get(&id)
        .ok_or_else(|| reject(ConserjeError::NotFound(format!("web template '{}'", id))))?;
    Ok(Json(
        template
            .html_pages()
            .iter()
            .map(|f| f.name.clone())
            .collect(),
    ))
}

#[derive(Deserialize)]
pub struct RenderWebQuery {
    pub page: Option<String>,
}

/// GET /api/web-templates/:id/render?page=... - Assemble a bundle page
/// for the TV frame.
pub async fn render_web(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<RenderWebQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    state
        .web_library
        .read()
        .await
        .assemble(&id, query.page.as_deref())
        .map(Html)
        .map_err(reject)
}

/// DELETE /api/web-templates/:id
pub async fn delete_web(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .web_library
        .write()
        .await
        .remove(&id)
        .map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}
