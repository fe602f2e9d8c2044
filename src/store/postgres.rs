//! PostgreSQL-backed stores.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::{ContentItem, ContentQuery};
use crate::models::user::{User, UserRecord};
use crate::store::{ContentStore, UserStore};

#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn load(&self, id: Uuid) -> Result<Option<UserRecord>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.display_name, f.uri AS picture_uri
            FROM users u
            LEFT JOIN files f ON f.id = u.picture_file_id
            WHERE u.id = $1 AND u.is_active = true
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(UserRecord::from))
    }
}

#[derive(Debug, Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the listing SQL. Sort column and direction come from closed enums,
/// never from user input.
fn listing_sql(query: &ContentQuery) -> String {
    format!(
        r#"
        SELECT id, content_type, title, published, created_at, event_date
        FROM content_items
        WHERE content_type = $1 AND published = $2
        ORDER BY {} {} NULLS LAST, id ASC
        LIMIT $3
        "#,
        query.sort_field.column(),
        query.sort_direction.keyword(),
    )
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn query(&self, query: &ContentQuery) -> Result<Vec<ContentItem>, AppError> {
        let sql = listing_sql(query);
        let rows = sqlx::query_as::<_, ContentItem>(&sql)
            .bind(query.content_type)
            .bind(query.published)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
