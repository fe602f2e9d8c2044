use std::env;

use chrono::{FixedOffset, Offset, Utc};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_access_token_expiry_secs: i64,
    pub frontend_url: String,
    pub public_files_base_url: String,
    /// UTC offset used when rendering article dates, e.g. `+02:00`.
    pub site_utc_offset: FixedOffset,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_access_token_expiry_secs: env::var("JWT_ACCESS_TOKEN_EXPIRY_SECS")
                .unwrap_or_else(|_| "900".to_string())
                .parse()
                .unwrap_or(900),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "https://localhost:5173".to_string()),
            public_files_base_url: env::var("PUBLIC_FILES_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/files".to_string()),
            site_utc_offset: parse_utc_offset(
                &env::var("SITE_TIMEZONE").unwrap_or_else(|_| "+00:00".to_string()),
            ),
        })
    }
}

/// Parse a `+hh:mm` / `-hh:mm` offset, falling back to UTC.
pub fn parse_utc_offset(value: &str) -> FixedOffset {
    value.trim().parse().unwrap_or_else(|_| Utc.fix())
}
