//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` and `JWT_SECRET` environment variables (reads .env).
//! Prints an access token for the demo user so `/api/dashboard` can be called
//! straight away.

use memberdash::config::AppConfig;
use memberdash::services::auth::generate_access_token;
use sqlx::PgPool;
use uuid::Uuid;

const DEMO_USERNAME: &str = "alice";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let pool = memberdash::db::create_pool(&config.database_url, 5).await?;

    // Run migrations first
    memberdash::db::run_migrations(&pool).await?;

    println!("=== Member Dashboard Seed Script ===");

    let user_id = seed_demo_user(&pool).await?;
    seed_articles(&pool).await?;
    seed_events(&pool).await?;

    let token = generate_access_token(
        user_id,
        DEMO_USERNAME,
        &config.jwt_secret,
        config.jwt_access_token_expiry_secs,
    )?;

    println!("\n=== Seed complete! ===");
    println!("Demo user: {DEMO_USERNAME} ({user_id})");
    println!("curl -H 'Authorization: Bearer {token}' http://localhost:{}/api/dashboard", config.port);

    Ok(())
}

async fn seed_demo_user(pool: &PgPool) -> anyhow::Result<Uuid> {
    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
        .bind(DEMO_USERNAME)
        .fetch_optional(pool)
        .await?;

    if let Some(id) = existing {
        println!("[skip] Demo user already exists");
        return Ok(id);
    }

    let file_id: Uuid =
        sqlx::query_scalar("INSERT INTO files (uri) VALUES ('public://pictures/alice.jpg') RETURNING id")
            .fetch_one(pool)
            .await?;

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (username, display_name, picture_file_id)
         VALUES ($1, 'Alice Example', $2)
         RETURNING id",
    )
    .bind(DEMO_USERNAME)
    .bind(file_id)
    .fetch_one(pool)
    .await?;

    // A second member without a picture.
    sqlx::query("INSERT INTO users (username, display_name) VALUES ('bob', 'Bob Example')")
        .execute(pool)
        .await?;

    println!("[done] Created demo users");
    Ok(id)
}

async fn seed_articles(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM content_items WHERE content_type = 'article'")
            .fetch_one(pool)
            .await?;
    if count > 0 {
        println!("[skip] Articles already exist ({count})");
        return Ok(());
    }

    let articles = [
        ("Annual report published", true, "2024-11-20T10:00:00Z"),
        ("New board members elected", true, "2024-10-05T09:00:00Z"),
        ("Summer newsletter", true, "2024-07-01T08:00:00Z"),
        ("Spring newsletter", true, "2024-04-01T08:00:00Z"),
        ("Draft: winter programme", false, "2024-12-01T08:00:00Z"),
    ];

    for (title, published, created_at) in articles {
        sqlx::query(
            "INSERT INTO content_items (content_type, title, published, created_at)
             VALUES ('article', $1, $2, $3::timestamptz)",
        )
        .bind(title)
        .bind(published)
        .bind(created_at)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} articles", articles.len());
    Ok(())
}

async fn seed_events(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM content_items WHERE content_type = 'event'")
            .fetch_one(pool)
            .await?;
    if count > 0 {
        println!("[skip] Events already exist ({count})");
        return Ok(());
    }

    let events = [
        ("General assembly", Some("2025-03-14T18:00:00")),
        ("Members' dinner", Some("2025-05-22T19:30:00")),
        ("Autumn excursion", Some("2025-09-06")),
        ("Workshop (date to be announced)", None),
    ];

    for (title, event_date) in events {
        sqlx::query(
            "INSERT INTO content_items (content_type, title, published, event_date)
             VALUES ('event', $1, true, $2)",
        )
        .bind(title)
        .bind(event_date)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} events", events.len());
    Ok(())
}
