//! User model and the read-only profile record the dashboard consumes.

use sqlx::FromRow;
use uuid::Uuid;

/// User row joined with its picture file (if any).
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub display_name: String,
    pub picture_uri: Option<String>,
}

/// Reference to a stored file, by stream-wrapper URI or absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub uri: String,
}

impl FileRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// Profile data for the requesting user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub display_name: String,
    pub profile_photo: Option<FileRef>,
}

impl From<User> for UserRecord {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            display_name: u.display_name,
            profile_photo: u.picture_uri.map(FileRef::new),
        }
    }
}
