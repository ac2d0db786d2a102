use crate::error::ConfigError;

/// Base URL for the EVE Swagger Interface (ESI).
pub const DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest";

/// Base URL for the zKillboard API.
pub const DEFAULT_ZKILLBOARD_URL: &str = "https://zkillboard.com";

/// Runtime configuration for the aggregation core.
///
/// Both CCP and zKillboard require a descriptive `User-Agent` identifying the
/// application and a point of contact; requests without one get throttled or
/// blocked. The base URLs exist so tests can point both repositories at a
/// mock server.
#[derive(Debug, Clone)]
pub struct Config {
    pub user_agent: String,
    pub esi_url: String,
    pub zkillboard_url: String,
}

impl Config {
    /// Configuration against the live APIs.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            esi_url: DEFAULT_ESI_URL.to_string(),
            zkillboard_url: DEFAULT_ZKILLBOARD_URL.to_string(),
        }
    }

    /// Reads configuration from the environment.
    ///
    /// `EVESPY_USER_AGENT` is required; `EVESPY_ESI_URL` and
    /// `EVESPY_ZKILLBOARD_URL` fall back to the live endpoints.
    pub fn from_env() -> Result<Self, ConfigError> {
        let user_agent = std::env::var("EVESPY_USER_AGENT")
            .map_err(|_| ConfigError::MissingEnvVar("EVESPY_USER_AGENT".to_string()))?;

        Ok(Self {
            user_agent,
            esi_url: std::env::var("EVESPY_ESI_URL")
                .unwrap_or_else(|_| DEFAULT_ESI_URL.to_string()),
            zkillboard_url: std::env::var("EVESPY_ZKILLBOARD_URL")
                .unwrap_or_else(|_| DEFAULT_ZKILLBOARD_URL.to_string()),
        })
    }
}
