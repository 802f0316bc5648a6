use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use sha2::{Digest, Sha256};

pub const DOCUMENTS_FILE: &str = "pdfs.json";
pub const REQUESTS_FILE: &str = "requests.json";
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Clone, Debug)]
pub struct Config {
    pub bind: String,
    pub data_dir: PathBuf,
    pub admin_user: String,
    // SHA-256 hex of the admin password; the plaintext is not kept
    pub admin_password_sha256: String,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env if present

        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        let session_ttl = match env::var("KPDF_SESSION_TTL_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .context("KPDF_SESSION_TTL_SECS must be a whole number of seconds")?,
            ),
            Err(_) => DEFAULT_SESSION_TTL,
        };

        let password = env::var("KPDF_ADMIN_PASSWORD")
            .context("KPDF_ADMIN_PASSWORD must be set")?;

        Ok(Config {
            bind: env::var("KPDF_BIND").unwrap_or_else(|_| format!("0.0.0.0:{}", port)),

            data_dir: env::var("KPDF_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),

            admin_user: env::var("KPDF_ADMIN_USER").unwrap_or_else(|_| "admin".to_string()),

            admin_password_sha256: password_digest(&password),

            session_ttl,
        })
    }

    /// Data location only, for CLI commands that never touch credentials.
    pub fn data_dir_from_env() -> PathBuf {
        dotenv().ok();
        env::var("KPDF_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"))
    }

    pub fn documents_path(&self) -> PathBuf {
        self.data_dir.join(DOCUMENTS_FILE)
    }

    pub fn requests_path(&self) -> PathBuf {
        self.data_dir.join(REQUESTS_FILE)
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        password_digest(candidate) == self.admin_password_sha256
    }
}

pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
