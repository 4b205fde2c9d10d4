//! Server state and configuration.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

use crate::cms::{MemoryStore, PageStore, Session};
use crate::library::{TemplateLibrary, WebLibrary};
use crate::simulator::TemplateData;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
    /// Current operator, constructed once at startup.
    pub session: Session,
    /// Persistence collaborator for pages.
    pub store: Arc<dyn PageStore>,
    /// The live simulator configuration being edited.
    pub template: RwLock<TemplateData>,
    pub tv_library: RwLock<TemplateLibrary>,
    pub web_library: RwLock<WebLibrary>,
}

impl AppState {
    pub fn new(config: ServerConfig, session: Session) -> Self {
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            config,
            boot_time,
            session,
            store: Arc::new(MemoryStore::new()),
            template: RwLock::new(TemplateData::default()),
            tv_library: RwLock::new(TemplateLibrary::built_in()),
            web_library: RwLock::new(WebLibrary::built_in()),
        }
    }
}
