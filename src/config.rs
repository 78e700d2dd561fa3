//! Application configuration loaded from environment variables.
//!
//! Secrets (the auth provider's JWT secret and the seed token) are injected
//! as environment variables by the deployment and read once at startup.

use std::env;
use std::str::FromStr;

/// Default UTC offset (Brasília time, UTC-3).
const DEFAULT_UTC_OFFSET_MINUTES: i32 = -180;

/// Which persistence backend the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Hosted Firestore (or the emulator when FIRESTORE_EMULATOR_HOST is set)
    Firestore,
    /// Process-local maps, for tests and local development
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Firestore => "firestore",
            StorageBackend::Memory => "memory",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(StorageBackend::Firestore),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::Invalid("STORAGE_BACKEND", s.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Persistence backend
    pub storage_backend: StorageBackend,
    /// Offset from UTC used to decide what "today" is for users
    pub utc_offset_minutes: i32,
    /// Seed the default workout types when the server starts
    pub seed_on_start: bool,

    // --- Secrets ---
    /// Shared secret the auth provider signs session tokens with (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Expected `aud` claim, if the provider sets one
    pub jwt_audience: Option<String>,
    /// Token required by `POST /seed`; seeding over HTTP is disabled when unset
    pub seed_token: Option<String>,
}

impl Config {
    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            storage_backend: StorageBackend::Memory,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            seed_on_start: false,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            jwt_audience: None,
            seed_token: Some("test_seed_token".to_string()),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => StorageBackend::Firestore,
        };

        let utc_offset_minutes = match env::var("UTC_OFFSET_MINUTES") {
            Ok(raw) => raw
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|m| m.abs() < 24 * 60)
                .ok_or(ConfigError::Invalid("UTC_OFFSET_MINUTES", raw))?,
            Err(_) => DEFAULT_UTC_OFFSET_MINUTES,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            storage_backend,
            utc_offset_minutes,
            seed_on_start: env::var("SEED_ON_START")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),

            jwt_signing_key: env::var("AUTH_JWT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("AUTH_JWT_SECRET"))?
                .into_bytes(),
            jwt_audience: env::var("AUTH_JWT_AUDIENCE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            seed_token: env::var("SEED_TOKEN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("AUTH_JWT_SECRET", "test_jwt_key_32_bytes_minimum!!");
        env::set_var("STORAGE_BACKEND", "memory");
        env::set_var("SEED_TOKEN", "  seed-me  ");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.jwt_signing_key, b"test_jwt_key_32_bytes_minimum!!");
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.seed_token.as_deref(), Some("seed-me"));
    }

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!(
            "Firestore".parse::<StorageBackend>().unwrap(),
            StorageBackend::Firestore
        );
        assert_eq!(
            " memory ".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
        assert!(matches!(
            "postgres".parse::<StorageBackend>(),
            Err(ConfigError::Invalid("STORAGE_BACKEND", _))
        ));
    }
}
