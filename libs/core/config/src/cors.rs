use crate::{ConfigError, FromEnv, env_or_default};

/// Default origins cover the usual local frontend dev servers.
const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:3000,http://localhost:5173,http://localhost:8080";

/// CORS configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }
}

impl FromEnv for CorsConfig {
    /// Reads `ALLOWED_ORIGINS` as a comma-separated list, with local
    /// development defaults when unset.
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS);

        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "ALLOWED_ORIGINS".to_string(),
                details: "no origins after parsing".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .split(',')
                .map(str::to_string)
                .collect(),
        }
    }
}
