//! Environment-driven server configuration.

use anyhow::{bail, Result};

/// Runtime configuration, read once at startup from `BB_*` variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the SQLite database file.
    pub data_dir: String,
    pub listen_addr: String,
    /// HS256 signing secret for session tokens.
    pub jwt_secret: String,
    /// Sign-ups with this email become the admin account.
    pub admin_email: Option<String>,
    pub ai_api_url: String,
    pub ai_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let jwt_secret = std::env::var("BB_JWT_SECRET").unwrap_or_default();
        if jwt_secret.trim().is_empty() {
            bail!("BB_JWT_SECRET must be set to a non-empty signing secret");
        }
        Ok(Self {
            data_dir: std::env::var("BB_DB_PATH").unwrap_or_else(|_| "./data".to_string()),
            listen_addr: std::env::var("BB_LISTEN_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            jwt_secret,
            admin_email: std::env::var("BB_ADMIN_EMAIL")
                .ok()
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty()),
            ai_api_url: std::env::var("BB_AI_API_URL").unwrap_or_default(),
            ai_api_key: std::env::var("BB_AI_API_KEY").unwrap_or_default(),
        })
    }
}
