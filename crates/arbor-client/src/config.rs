//! Client configuration, resolved once at startup

use crate::error::{ClientError, Result};

/// Environment variable holding the bearer token.
pub const TOKEN_VAR: &str = "CANVAS_TOKEN";
/// Environment variable overriding the API base url.
pub const BASE_URL_VAR: &str = "CANVAS_BASE_URL";
/// Environment variable overriding the listing page size.
pub const PER_PAGE_VAR: &str = "CANVAS_PER_PAGE";

const DEFAULT_BASE_URL: &str = "https://canvas.instructure.com";
const DEFAULT_PER_PAGE: u32 = 100;

/// Everything the client needs to talk to the service.
///
/// Built once at the entry point and passed down explicitly; nothing
/// below `main` reads the process environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub token: String,
    pub base_url: String,
    pub per_page: u32,
}

impl ClientConfig {
    /// Create a configuration with the default base url and page size.
    /// An empty token is rejected up front, before any network call.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(ClientError::MissingToken(TOKEN_VAR));
        }
        Ok(ClientConfig {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_VAR).unwrap_or_default();
        let mut config = ClientConfig::new(token)?;
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }
        if let Some(per_page) =
            std::env::var(PER_PAGE_VAR).ok().and_then(|v| v.parse().ok())
        {
            config = config.with_per_page(per_page);
        }
        Ok(config)
    }
}
