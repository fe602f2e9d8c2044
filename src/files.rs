//! Public URL generation for stored files.

use crate::models::user::FileRef;

const PUBLIC_SCHEME: &str = "public://";

/// Turns file URIs into URLs a browser can fetch.
#[derive(Debug, Clone)]
pub struct FileUrlGenerator {
    public_base_url: String,
}

impl FileUrlGenerator {
    pub fn new(public_base_url: &str) -> Self {
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `public://a/b.jpg` becomes `<base>/a/b.jpg`. Absolute and
    /// protocol-relative URLs pass through; other paths are joined onto the base.
    pub fn create_file_url(&self, file: &FileRef) -> String {
        let uri = file.uri.as_str();
        if uri.starts_with("http://") || uri.starts_with("https://") || uri.starts_with("//") {
            return uri.to_string();
        }

        let path = uri
            .strip_prefix(PUBLIC_SCHEME)
            .unwrap_or(uri)
            .trim_start_matches('/');
        format!("{}/{}", self.public_base_url, path)
    }
}
