//! Application configuration loaded from environment variables.
//!
//! Values are read once at startup. The admin password is the only required
//! setting; everything else has a local-development default.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Directory holding items.json, sellers.json and analytics.json
    pub data_dir: PathBuf,
    /// Directory receiving uploaded item photos
    pub uploads_dir: PathBuf,
    /// Directory holding the static HTML pages
    pub views_dir: PathBuf,
    /// Base URL used when building widget links (e.g. "https://fitmirror.example").
    /// When unset, the request's Host header is used.
    pub public_base_url: Option<String>,
    /// Request body limit for item uploads
    pub max_upload_bytes: usize,

    // --- Secrets ---
    /// Shared secret for the admin panel
    pub admin_password: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("data"),
            uploads_dir: PathBuf::from("public/uploads"),
            views_dir: PathBuf::from("views"),
            public_base_url: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            admin_password: "test_admin_password".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            uploads_dir: env::var("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public/uploads")),
            views_dir: env::var("VIEWS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("views")),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty()),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),

            admin_password: env::var("ADMIN_PASSWORD")
                .map(|v| v.trim().to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing("ADMIN_PASSWORD"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
