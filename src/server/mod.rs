//! # HTTP Server for the TV Interface Editor
//!
//! Serves the embedded editor frontend, the page/template APIs and the
//! public page renderer.
//!
//! ## Usage
//!
//! ```bash
//! conserje serve --listen 0.0.0.0:8080
//! ```
//!
//! Then open http://localhost:8080 in a browser to edit, and
//! http://localhost:8080/p/&lt;slug&gt; to view a published page.

mod handlers;
mod state;
mod static_files;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::cms::Session;
use crate::error::ConserjeError;

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use conserje::cms::{Role, Session};
/// use conserje::server::{ServerConfig, serve};
///
/// # async fn example() -> Result<(), conserje::error::ConserjeError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
/// };
///
/// serve(config, Session::new("Admin", Role::Admin)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig, session: Session) -> Result<(), ConserjeError> {
    let app_state = Arc::new(AppState::new(config.clone(), session));

    let app = Router::new()
        // Frontend
        .route("/", get(static_files::index_handler))
        .route("/assets/*path", get(static_files::asset_handler))
        // Public page host
        .route("/p/:slug", get(handlers::pages::view))
        // Page API
        .route(
            "/api/pages",
            get(handlers::pages::list).post(handlers::pages::create),
        )
        .route(
            "/api/pages/:slug",
            get(handlers::pages::get)
                .put(handlers::pages::update)
                .delete(handlers::pages::delete),
        )
        // Element palette
        .route("/api/elements", get(handlers::elements))
        // Simulator API
        .route(
            "/api/simulator",
            get(handlers::simulator::get).patch(handlers::simulator::update),
        )
        .route("/api/simulator/reset", post(handlers::simulator::reset))
        .route("/api/simulator/export", get(handlers::simulator::export))
        .route("/api/simulator/import", post(handlers::simulator::import))
        .route(
            "/api/simulator/preview",
            get(handlers::simulator::preview).post(handlers::simulator::preview_of),
        )
        // TV template library API
        .route(
            "/api/templates",
            get(handlers::templates::list).post(handlers::templates::save),
        )
        .route(
            "/api/templates/:id",
            axum::routing::delete(handlers::templates::delete),
        )
        .route("/api/templates/:id/select", post(handlers::templates::select))
        .route(
            "/api/templates/:id/duplicate",
            post(handlers::templates::duplicate),
        )
        // Web template API
        .route("/api/web-templates", get(handlers::templates::list_web))
        .route(
            "/api/web-templates/:id",
            axum::routing::delete(handlers::templates::delete_web),
        )
        .route(
            "/api/web-templates/:id/pages",
            get(handlers::templates::web_pages),
        )
        .route(
            "/api/web-templates/:id/render",
            get(handlers::templates::render_web),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    println!("Conserje HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);
    println!();
    println!(
        "Open http://{}/ in your browser to edit",
        config.listen_addr
    );
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
