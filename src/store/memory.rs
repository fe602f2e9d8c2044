//! In-memory stores with the same listing semantics as the SQL ones.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::{ContentItem, ContentQuery};
use crate::models::user::UserRecord;
use crate::store::{ContentStore, UserStore};

/// Immutable snapshot of users and content items.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: HashMap<Uuid, UserRecord>,
    items: Vec<ContentItem>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the backend were down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.users.insert(user.id, user);
        self
    }

    pub fn with_item(mut self, item: ContentItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = ContentItem>) -> Self {
        self.items.extend(items);
        self
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::StoreUnavailable(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn load(&self, id: Uuid) -> Result<Option<UserRecord>, AppError> {
        self.check_available()?;
        Ok(self.users.get(&id).cloned())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn query(&self, query: &ContentQuery) -> Result<Vec<ContentItem>, AppError> {
        self.check_available()?;
        let mut rows: Vec<ContentItem> = self
            .items
            .iter()
            .filter(|item| query.matches(item))
            .cloned()
            .collect();
        rows.sort_by(|a, b| query.compare(a, b));
        rows.truncate(usize::try_from(query.limit).unwrap_or(0));
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}
