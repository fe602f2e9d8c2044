//! Content items (articles and events) and the generic listing query.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "content_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    Event,
}

/// Content row as stored.
#[derive(Debug, Clone, FromRow)]
pub struct ContentItem {
    pub id: Uuid,
    pub content_type: ContentType,
    pub title: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    /// Raw event date string; only events carry one.
    pub event_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    EventDate,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::EventDate => "event_date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Filtered, sorted, limited listing of one content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    pub content_type: ContentType,
    pub published: bool,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub limit: i64,
}

impl ContentQuery {
    /// Published items of `content_type`, newest first, limit 10.
    pub fn published(content_type: ContentType) -> Self {
        Self {
            content_type,
            published: true,
            sort_field: SortField::CreatedAt,
            sort_direction: SortDirection::Desc,
            limit: 10,
        }
    }

    pub fn sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit.max(0);
        self
    }

    /// Whether `item` passes the type and status conditions.
    pub fn matches(&self, item: &ContentItem) -> bool {
        item.content_type == self.content_type && item.published == self.published
    }

    /// Ordering of two items under this query's sort.
    ///
    /// Missing event dates sort after every present date in both directions,
    /// and ties fall back to id ascending so listings are stable.
    pub fn compare(&self, a: &ContentItem, b: &ContentItem) -> Ordering {
        let primary = match self.sort_field {
            SortField::CreatedAt => self.directed(a.created_at.cmp(&b.created_at)),
            SortField::EventDate => match (&a.event_date, &b.event_date) {
                (Some(x), Some(y)) => self.directed(x.cmp(y)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }

    fn directed(&self, ordering: Ordering) -> Ordering {
        match self.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(id: u128, date: Option<&str>) -> ContentItem {
        ContentItem {
            id: Uuid::from_u128(id),
            content_type: ContentType::Event,
            title: format!("Event {id}"),
            published: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            event_date: date.map(str::to_string),
        }
    }

    #[test]
    fn content_type_serialization() {
        let json = serde_json::to_string(&ContentType::Article).unwrap();
        assert_eq!(json, "\"article\"");
    }

    #[test]
    fn builder_sets_sort_and_limit() {
        let q = ContentQuery::published(ContentType::Event)
            .sort(SortField::EventDate, SortDirection::Asc)
            .limit(2);
        assert!(q.published);
        assert_eq!(q.sort_field.column(), "event_date");
        assert_eq!(q.sort_direction.keyword(), "ASC");
        assert_eq!(q.limit, 2);
    }

    #[test]
    fn negative_limit_clamped() {
        let q = ContentQuery::published(ContentType::Article).limit(-5);
        assert_eq!(q.limit, 0);
    }

    #[test]
    fn missing_event_date_sorts_last() {
        let q = ContentQuery::published(ContentType::Event)
            .sort(SortField::EventDate, SortDirection::Asc);
        let dated = event(2, Some("2025-03-01"));
        let undated = event(1, None);
        assert_eq!(q.compare(&dated, &undated), Ordering::Less);

        let desc = q.clone().sort(SortField::EventDate, SortDirection::Desc);
        assert_eq!(desc.compare(&undated, &dated), Ordering::Greater);
    }

    #[test]
    fn ties_break_on_id() {
        let q = ContentQuery::published(ContentType::Event)
            .sort(SortField::EventDate, SortDirection::Asc);
        let a = event(1, Some("2025-03-01"));
        let b = event(2, Some("2025-03-01"));
        assert_eq!(q.compare(&a, &b), Ordering::Less);
    }
}
