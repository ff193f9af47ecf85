use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default remote API used when nothing is configured at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client-side configuration for the remote API and the hosted bookmark table.
///
/// The WASM bundle cannot read the environment at runtime, so the values are
/// baked in at compile time (see [`ClientConfig::compiled`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the news/AI backend (e.g. `http://localhost:8000`).
    pub api_base_url: String,
    /// Base URL of the hosted database service.
    #[serde(default)]
    pub hosted_url: Option<String>,
    /// Anonymous API key for the hosted database service.
    #[serde(default)]
    pub hosted_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            hosted_url: None,
            hosted_key: None,
        }
    }
}

impl ClientConfig {
    /// Build the config from compile-time environment variables.
    ///
    /// Recognised variables:
    /// - `SIGNAL7_API_URL`
    /// - `SIGNAL7_HOSTED_URL`
    /// - `SIGNAL7_HOSTED_KEY`
    pub fn compiled() -> Self {
        Self::from_parts(
            option_env!("SIGNAL7_API_URL"),
            option_env!("SIGNAL7_HOSTED_URL"),
            option_env!("SIGNAL7_HOSTED_KEY"),
        )
    }

    /// Build with explicit values (useful for testing).
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// Attach hosted database credentials.
    pub fn with_hosted(mut self, url: impl Into<String>, key: impl Into<String>) -> Self {
        self.hosted_url = Some(url.into());
        self.hosted_key = Some(key.into());
        self
    }

    fn from_parts(api: Option<&str>, hosted_url: Option<&str>, hosted_key: Option<&str>) -> Self {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(String::from);
        Self {
            api_base_url: non_empty(api).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            hosted_url: non_empty(hosted_url),
            hosted_key: non_empty(hosted_key),
        }
    }

    /// Hosted database URL and key, or a configuration error naming what is missing.
    pub fn hosted_credentials(&self) -> Result<(&str, &str), AppError> {
        match (self.hosted_url.as_deref(), self.hosted_key.as_deref()) {
            (Some(url), Some(key)) => Ok((url, key)),
            (None, _) => Err(AppError::Config("SIGNAL7_HOSTED_URL not set".into())),
            (_, None) => Err(AppError::Config("SIGNAL7_HOSTED_KEY not set".into())),
        }
    }

    /// Log missing hosted settings. Rendering continues either way.
    pub fn validate(&self) -> bool {
        match self.hosted_credentials() {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Missing hosted database settings, bookmarks are disabled: {e}");
                false
            }
        }
    }
}

/// Server-side settings for the SSR binary.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Where `/api/*` requests are forwarded.
    #[serde(default = "default_upstream")]
    pub api_upstream: String,
    /// Value of the `Content-Security-Policy` header added to every response.
    #[serde(default = "default_csp")]
    pub content_security_policy: String,
}

#[cfg(feature = "ssr")]
fn default_upstream() -> String {
    DEFAULT_API_URL.to_string()
}

#[cfg(feature = "ssr")]
fn default_csp() -> String {
    "default-src 'self'; script-src 'self' 'unsafe-inline' 'unsafe-eval' 'wasm-unsafe-eval' https: http:; \
     style-src 'self' 'unsafe-inline' https:; img-src 'self' data: https:; font-src 'self' data: https:; \
     connect-src 'self' http://localhost:* https://* ws://localhost:*; frame-src 'self' https: http:;"
        .to_string()
}

#[cfg(feature = "ssr")]
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_upstream: default_upstream(),
            content_security_policy: default_csp(),
        }
    }
}

#[cfg(feature = "ssr")]
impl ServerConfig {
    /// Load from an optional `signal7.toml` and `SIGNAL7_*` environment variables.
    ///
    /// Environment variables win over the file, e.g. `SIGNAL7_API_UPSTREAM`.
    pub fn load() -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::File::with_name("signal7").required(false))
            .add_source(config::Environment::with_prefix("SIGNAL7"))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
