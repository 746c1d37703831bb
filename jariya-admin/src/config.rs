//! Application configuration
//!
//! Central location for the fixed paths, messages and limits used across
//! the crate, plus the runtime configuration loaded from the environment.

use crate::error::{AppError, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

// ===== Proxy =====

/// Same-origin path the browser-facing client talks to
pub const PROXY_BASE_PATH: &str = "/api/proxy";

/// Upstream API host every proxied request is forwarded to
pub const DEFAULT_UPSTREAM_API_URL: &str = "https://api.jariya.net/api";

/// Default listen address for the proxy relay
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Default directory for persisted client state
pub const DEFAULT_DATA_DIR: &str = "./data";

// ===== Envelope messages =====

/// Message used when a failed envelope carries no message of its own
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// Message used when a transport error has no usable description
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Body message the relay answers with when forwarding fails
pub const PROXY_FAILURE_MESSAGE: &str = "Proxy request failed";

// ===== Session =====

/// Storage key holding the JSON-encoded admin session
pub const AUTH_STORAGE_KEY: &str = "jariya_admin";

/// File name of the session slot inside the data directory
pub const SESSION_FILE_NAME: &str = "session.json";

// ===== Dashboard =====

/// Number of zikrs shown in the "recent" panel
pub const RECENT_ZIKR_LIMIT: usize = 5;

// ===== Quran =====

/// Placeholder text sent with Quran deletes.
/// Upstream validates `textAr` as non-empty on every Quran payload.
pub const QURAN_DELETE_PLACEHOLDER_TEXT: &str = "a";

// ===== Translations =====

/// Language codes accepted for translations, with display names
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("ur", "Urdu"),
    ("ar", "Arabic"),
    ("tr", "Turkish"),
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("bn", "Bengali"),
];

/// Display name for a language code, or the code itself when unknown
pub fn language_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Whether a language code is one of the supported translation languages
pub fn is_supported_language(code: &str) -> bool {
    LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the proxy relay listens on (e.g., "127.0.0.1:3000")
    pub bind_address: SocketAddr,

    /// Upstream API base, without trailing slash
    pub upstream_api_url: String,

    /// Directory holding the persisted session slot
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let bind_address = env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.into())
            .parse()
            .map_err(|e| AppError::Config(format!("BIND_ADDRESS is invalid: {}", e)))?;

        let upstream_api_url = env::var("UPSTREAM_API_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        if upstream_api_url.is_empty() {
            return Err(AppError::Config("UPSTREAM_API_URL is empty".to_string()));
        }

        let data_dir = env::var("JARIYA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Ok(Self {
            bind_address,
            upstream_api_url,
            data_dir,
        })
    }
}
