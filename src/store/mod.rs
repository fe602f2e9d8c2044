//! Read-only collaborator interfaces for users and content.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::{ContentItem, ContentQuery};
use crate::models::user::UserRecord;

/// Loads user profile records by id.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// `Ok(None)` when no active user has this id.
    async fn load(&self, id: Uuid) -> Result<Option<UserRecord>, AppError>;
}

/// Runs filtered, sorted, limited listings over content items.
#[async_trait]
pub trait ContentStore: Send + Sync + std::fmt::Debug {
    async fn query(&self, query: &ContentQuery) -> Result<Vec<ContentItem>, AppError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
