//! Dashboard aggregation for the current user.

use std::sync::Arc;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::files::FileUrlGenerator;
use crate::models::content::{ContentItem, ContentQuery, ContentType, SortDirection, SortField};
use crate::store::{ContentStore, UserStore};

/// Number of recent articles shown in the news feed.
pub const NEWS_LIMIT: i64 = 3;

/// Number of upcoming events shown.
pub const EVENTS_LIMIT: i64 = 2;

// Placeholders until notifications and memberships are backed by data.
const NOTIFICATION_COUNT: i64 = 2;
const MEMBERSHIP_STATUS: &str = "Active";
const MEMBERSHIP_EXPIRES: &str = "2025-12-31";

/// Dashboard overview returned by `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub user: DashboardUser,
    pub news: Vec<DashboardEntry>,
    pub events: Vec<DashboardEntry>,
    pub notifications: i64,
    pub membership: Membership,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUser {
    pub name: String,
    pub photo: Option<String>,
}

/// Title and display date of an article or event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardEntry {
    pub title: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub status: String,
    pub expires: String,
}

impl Membership {
    fn placeholder() -> Self {
        Self {
            status: MEMBERSHIP_STATUS.to_string(),
            expires: MEMBERSHIP_EXPIRES.to_string(),
        }
    }
}

impl DashboardEntry {
    /// Articles show their creation day in the site's offset.
    fn from_article(item: ContentItem, site_offset: &FixedOffset) -> Self {
        Self {
            date: Some(
                item.created_at
                    .with_timezone(site_offset)
                    .format("%Y-%m-%d")
                    .to_string(),
            ),
            title: item.title,
        }
    }

    /// Events show the raw event date, if set.
    fn from_event(item: ContentItem) -> Self {
        Self {
            title: item.title,
            date: item.event_date,
        }
    }
}

/// Assembles dashboards from injected user and content stores.
#[derive(Debug, Clone)]
pub struct DashboardService {
    users: Arc<dyn UserStore>,
    content: Arc<dyn ContentStore>,
    files: FileUrlGenerator,
    site_offset: FixedOffset,
}

impl DashboardService {
    pub fn new(
        users: Arc<dyn UserStore>,
        content: Arc<dyn ContentStore>,
        files: FileUrlGenerator,
        site_offset: FixedOffset,
    ) -> Self {
        Self {
            users,
            content,
            files,
            site_offset,
        }
    }

    /// Build the dashboard for `user_id`. Fails with `NotFound` when the
    /// user has no record; store failures abort the whole payload.
    pub async fn build(&self, user_id: Uuid) -> Result<DashboardPayload, AppError> {
        let user = self
            .users
            .load(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let (news, events) = tokio::try_join!(self.fetch_news(), self.fetch_events())?;

        let photo = user
            .profile_photo
            .as_ref()
            .map(|file| self.files.create_file_url(file));

        tracing::debug!(
            user_id = %user_id,
            news = news.len(),
            events = events.len(),
            "Dashboard assembled"
        );

        Ok(DashboardPayload {
            user: DashboardUser {
                name: user.display_name,
                photo,
            },
            news,
            events,
            notifications: NOTIFICATION_COUNT,
            membership: Membership::placeholder(),
        })
    }

    /// Most recent published articles, newest first.
    async fn fetch_news(&self) -> Result<Vec<DashboardEntry>, AppError> {
        let query = ContentQuery::published(ContentType::Article)
            .sort(SortField::CreatedAt, SortDirection::Desc)
            .limit(NEWS_LIMIT);
        let rows = self.content.query(&query).await?;
        Ok(rows
            .into_iter()
            .map(|item| DashboardEntry::from_article(item, &self.site_offset))
            .collect())
    }

    /// Nearest published events by event date.
    async fn fetch_events(&self) -> Result<Vec<DashboardEntry>, AppError> {
        let query = ContentQuery::published(ContentType::Event)
            .sort(SortField::EventDate, SortDirection::Asc)
            .limit(EVENTS_LIMIT);
        let rows = self.content.query(&query).await?;
        Ok(rows.into_iter().map(DashboardEntry::from_event).collect())
    }
}
