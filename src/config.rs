//! Client configuration
//!
//! Loads the YAML file describing how to reach a paged API:
//!
//! ```yaml
//! base_url: https://api.example.com/v1
//! auth:
//!   type: basic
//!   username: ${API_USER}
//!   password: ${API_PASSWORD}
//! http:
//!   timeout_seconds: 10
//! paging:
//!   page_size: 100
//!   max_pages: 20
//! ```

use crate::auth::AuthConfig;
use crate::engine::WalkConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::PageCriteria;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete client configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for API requests
    #[serde(default)]
    pub base_url: String,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Default paging settings
    #[serde(default)]
    pub paging: PagingConfig,
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

/// Default paging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Page size requested from the server
    #[serde(default)]
    pub page_size: Option<i64>,

    /// Maximum pages fetched by one walk
    #[serde(default)]
    pub max_pages: Option<u32>,
}

impl ClientConfig {
    /// Check the configuration for values that could never work
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.http.timeout_seconds == 0 {
            return Err(Error::invalid_value(
                "http.timeout_seconds",
                "must be greater than zero",
            ));
        }

        if let Some(page_size) = self.paging.page_size {
            if page_size <= 0 {
                return Err(Error::invalid_value(
                    "paging.page_size",
                    format!("must be a positive integer, got {page_size}"),
                ));
            }
        }

        Ok(())
    }

    /// HTTP client settings derived from this config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.as_str())
            .timeout(Duration::from_secs(self.http.timeout_seconds));
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        for (key, value) in &self.http.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder.build()
    }

    /// Build an authenticated HTTP client
    pub fn build_client(&self) -> Result<HttpClient> {
        HttpClient::with_auth(self.http_client_config(), self.auth.clone())
    }

    /// Page criteria for the first page of a walk
    pub fn page_criteria(&self) -> PageCriteria {
        PageCriteria {
            cursor: None,
            page_size: self.paging.page_size,
        }
    }

    /// Walk limits from this config
    pub fn walk_config(&self) -> WalkConfig {
        WalkConfig {
            max_pages: self.paging.max_pages,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a client configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    load_config_from_str(&content)
}

/// Load a client configuration from a YAML string
///
/// Secret fields written as `${NAME}` are replaced with the value of the
/// environment variable `NAME`.
pub fn load_config_from_str(yaml: &str) -> Result<ClientConfig> {
    let mut config: ClientConfig = serde_yaml::from_str(yaml)?;

    for secret in config.auth.secrets_mut() {
        resolve_env(secret)?;
    }

    config.validate()?;
    Ok(config)
}

/// Replace a whole-value `${NAME}` reference with the variable's value
fn resolve_env(value: &mut String) -> Result<()> {
    let Some(name) = value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return Ok(());
    };

    let resolved = std::env::var(name)
        .map_err(|_| Error::config(format!("environment variable '{name}' is not set")))?;
    *value = resolved;
    Ok(())
}
