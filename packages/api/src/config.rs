//! Client configuration.

use url::Url;

use crate::error::ConfigError;

/// Base URL used when no configuration source provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Environment variable holding the API base URL.
pub const ENV_VAR: &str = "API_BASE_URL";

/// Where the resource clients send their requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate and normalize a base URL: http or https only, trailing slashes trimmed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = base_url.as_ref().trim();
        let parsed = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            source,
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self {
                base_url: raw.trim_end_matches('/').to_string(),
            }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Layer configuration sources: `primary`, then `secondary`, then
    /// [`DEFAULT_API_BASE_URL`].
    ///
    /// Blank values and unreplaced `${...}` deploy placeholders count as absent.
    /// A present value that is not a valid URL is an error rather than a silent
    /// fallback.
    pub fn resolve(primary: Option<&str>, secondary: Option<&str>) -> Result<Self, ConfigError> {
        let chosen = [primary, secondary]
            .into_iter()
            .flatten()
            .find_map(usable)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self::new(chosen)
    }

    /// Build from the environment.
    ///
    /// - `API_BASE_URL` at runtime (native targets)
    /// - `API_BASE_URL` at compile time (the only source in the browser)
    /// - otherwise [`DEFAULT_API_BASE_URL`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let runtime = std::env::var(ENV_VAR).ok();
        Self::resolve(runtime.as_deref(), option_env!("API_BASE_URL"))
    }

    pub fn with_base_url(self, base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

fn usable(value: &str) -> Option<String> {
    non_empty(value).filter(|v| !is_placeholder(v))
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn is_placeholder(value: &str) -> bool {
    value.contains("${")
}
