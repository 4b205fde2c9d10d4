//! Page API handlers and the public page host.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::cms::{Page, PageStatus};
use crate::error::ConserjeError;
use crate::page;

use super::super::state::AppState;

fn error_status(err: &ConserjeError) -> StatusCode {
    match err {
        ConserjeError::NotFound(_) => StatusCode::NOT_FOUND,
        ConserjeError::Parse(_) | ConserjeError::InvalidEventContent(_) => StatusCode::BAD_REQUEST,
        ConserjeError::LastEntry(_) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(err: ConserjeError) -> (StatusCode, String) {
    (error_status(&err), err.to_string())
}

fn require_editor(state: &AppState) -> Result<(), (StatusCode, String)> {
    if state.session.role.can_edit() {
        Ok(())
    } else {
        Err((
            StatusCode::FORBIDDEN,
            format!("role '{:?}' cannot edit pages", state.session.role),
        ))
    }
}

/// GET /api/pages - List every page.
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Page>>, (StatusCode, String)> {
    state.store.list().await.map(Json).map_err(reject)
}

/// Request body for creating a page.
#[derive(Deserialize)]
pub struct CreatePageRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
}

/// POST /api/pages - Create a new draft page with an empty document.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePageRequest>,
) -> Result<(StatusCode, Json<Page>), (StatusCode, String)> {
    require_editor(&state)?;

    let title = req
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "Nueva Página".into());
    let slug = req
        .slug
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("pagina-{}", &uuid::Uuid::new_v4().to_string()[..8]));

    if state.store.load(&slug).await.is_ok() {
        return Err((
            StatusCode::CONFLICT,
            format!("slug '{}' already exists", slug),
        ));
    }

    let page = Page::new(title, slug);
    state.store.save(page.clone()).await.map_err(reject)?;
    tracing::info!(slug = %page.slug, "page created");
    Ok((StatusCode::CREATED, Json(page)))
}

/// GET /api/pages/:slug - Fetch one page row.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Page>, (StatusCode, String)> {
    state.store.load(&slug).await.map(Json).map_err(reject)
}

/// Request body for updating a page. Absent fields are untouched.
#[derive(Deserialize)]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub status: Option<PageStatus>,
    /// Replacement content document (the JSON-encoded string the
    /// serializer produced).
    pub content: Option<String>,
}

/// PUT /api/pages/:slug - Update title, status and/or content.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(req): Json<UpdatePageRequest>,
) -> Result<Json<Page>, (StatusCode, String)> {
    require_editor(&state)?;

    let mut page = state.store.load(&slug).await.map_err(reject)?;
    if let Some(title) = req.title {
        page.title = title;
    }
    if let Some(status) = req.status {
        page.status = status;
    }
    if let Some(content) = req.content {
        page.set_content(content);
    }
    state.store.save(page.clone()).await.map_err(reject)?;
    Ok(Json(page))
}

/// DELETE /api/pages/:slug
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    require_editor(&state)?;
    state.store.delete(&slug).await.map_err(reject)?;
    tracing::info!(%slug, "page deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /p/:slug - The public rendering host.
///
/// Resolves the slug through the store, runs the deserialize fallback
/// chain and injects the resulting fragment into a minimal shell. Always
/// renders something; a missing page is the only 404.
pub async fn view(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let page = match state.store.load(&slug).await {
        Ok(page) => page,
        Err(_) => {
            return Err((
                StatusCode::NOT_FOUND,
                Html("<p>Error: Página no encontrada.</p>".to_string()),
            ));
        }
    };

    let fragment = page::deserialize(&page.content).render();

    // Count the view; a failed save must not break the render.
    let mut counted = page.clone();
    counted.views += 1;
    if let Err(e) = state.store.save(counted).await {
        tracing::warn!(%slug, error = %e, "failed to count page view");
    }

    Ok(Html(format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head><meta charset=\"UTF-8\"><title>{}</title></head>\n<body>\n<div class=\"cms-page\">{}</div>\n</body>\n</html>\n",
        page.title, fragment
    )))
}
