use std::borrow::Cow;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, SharedError};
use crate::models::auth0::Auth0Config;

/// Deployment target a record was authored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = SharedError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(SharedError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// One complete environment record as the front-end imports it.
///
/// A deployment swaps in a different whole record; fields are never
/// patched in place, so there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    production: bool,

    /// Base of every backend request (scheme, host and port)
    #[serde(rename = "apiServerUrl")]
    api_server_url: Cow<'static, str>,

    auth0: Auth0Config,
}

impl EnvironmentConfig {
    pub const fn new(production: bool, api_server_url: &'static str, auth0: Auth0Config) -> Self {
        Self {
            production,
            api_server_url: Cow::Borrowed(api_server_url),
            auth0,
        }
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth0(&self) -> &Auth0Config {
        &self.auth0
    }

    pub fn environment(&self) -> Environment {
        if self.production {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn api_server_url_parsed(&self) -> Result<Url> {
        Url::parse(&self.api_server_url)
            .map_err(|e| SharedError::invalid_url("apiServerUrl", &self.api_server_url, e))
    }

    /// JSON with the camelCase field names the front-end code reads.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug!("Read {} environment record from JSON", config.environment());
        Ok(config)
    }
}
