//! # CMS Pages and the Store Boundary
//!
//! The [`Page`] entity, the operator [`Session`], and the persistence
//! collaborator behind the [`PageStore`] trait. The core never defines a
//! storage schema beyond the page's `content` document shape; the
//! in-memory [`MemoryStore`] is the reference implementation and the
//! server's default. A failed save surfaces as a [`ConserjeError::Store`]
//! and leaves the editor's working copy untouched.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ConserjeError;
use crate::page::serialize;

/// Publication state of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
    Review,
}

/// One CMS page row. `content` is the JSON-encoded page document
/// produced and consumed by [`crate::page::serialize`] and
/// [`crate::page::deserialize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    /// Unique URL-path identifier resolving to this page.
    pub slug: String,
    pub status: PageStatus,
    pub author: String,
    /// ISO date of the last edit (YYYY-MM-DD).
    pub last_modified: String,
    pub views: u64,
    pub content: String,
}

impl Page {
    /// A fresh draft with an empty element document.
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            slug: slug.into(),
            status: PageStatus::Draft,
            author: "Admin".into(),
            last_modified: today(),
            views: 0,
            content: serialize(&[]),
        }
    }

    /// Stamp a content update.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.last_modified = today();
    }
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Operator role supplied by the auth collaborator. The core's editing
/// logic is role-agnostic; roles only gate the mutation routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    pub fn can_edit(&self) -> bool {
        matches!(self, Role::Admin | Role::Editor)
    }

    pub fn parse(s: &str) -> Result<Self, ConserjeError> {
        match s {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "viewer" => Ok(Role::Viewer),
            other => Err(ConserjeError::Parse(format!("unknown role '{}'", other))),
        }
    }
}

/// The current operator, constructed once at process start and passed to
/// whichever component needs the role.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub operator: String,
    pub role: Role,
}

impl Session {
    pub fn new(operator: impl Into<String>, role: Role) -> Self {
        Self {
            operator: operator.into(),
            role,
        }
    }
}

/// Persistence collaborator for pages, keyed by slug.
///
/// Calls are point-to-point request/response; the core exposes no retry
/// policy and treats failures as external errors for the calling layer.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Insert or replace the page stored under its slug.
    async fn save(&self, page: Page) -> Result<(), ConserjeError>;
    async fn load(&self, slug: &str) -> Result<Page, ConserjeError>;
    async fn delete(&self, slug: &str) -> Result<(), ConserjeError>;
    async fn list(&self) -> Result<Vec<Page>, ConserjeError>;
}

/// In-memory page store. Process-lifetime only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: RwLock<HashMap<String, Page>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PageStore for MemoryStore {
    async fn save(&self, page: Page) -> Result<(), ConserjeError> {
        self.pages.write().await.insert(page.slug.clone(), page);
        Ok(())
    }

    async fn load(&self, slug: &str) -> Result<Page, ConserjeError> {
        self.pages
            .read()
            .await
            .get(slug)
            .cloned()
            .ok_or_else(|| ConserjeError::NotFound(format!("page '{}'", slug)))
    }

    async fn delete(&self, slug: &str) -> Result<(), ConserjeError> {
        self.pages
            .write()
            .await
            .remove(slug)
            .map(|_| ())
            .ok_or_else(|| ConserjeError::NotFound(format!("page '{}'", slug)))
    }

    async fn list(&self) -> Result<Vec<Page>, ConserjeError> {
        let mut pages: Vec<Page> = self.pages.read().await.values().cloned().collect();
        pages.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(pages)
    }
}
