use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, SharedError};

/// Auth0 hosts every tenant under this domain.
pub const AUTH0_DOMAIN_SUFFIX: &str = "auth0.com";

/// Auth0 client settings the front-end needs to start a login.
///
/// Values are held exactly as authored. Nothing here checks them; a bad
/// value shows up when a consumer parses or sends it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Auth0Config {
    /// Tenant domain prefix, e.g. `sfnd.us`
    url: Cow<'static, str>,

    /// Identifier of the protected API the issued tokens are scoped to
    audience: Cow<'static, str>,

    /// Public client id registered for this application
    #[serde(rename = "clientId")]
    client_id: Cow<'static, str>,

    /// Where Auth0 sends the browser back after login
    #[serde(rename = "callbackURL")]
    callback_url: Cow<'static, str>,
}

impl Auth0Config {
    pub const fn new(
        url: &'static str,
        audience: &'static str,
        client_id: &'static str,
        callback_url: &'static str,
    ) -> Self {
        Self {
            url: Cow::Borrowed(url),
            audience: Cow::Borrowed(audience),
            client_id: Cow::Borrowed(client_id),
            callback_url: Cow::Borrowed(callback_url),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Full tenant host built from the domain prefix (`sfnd.us` -> `sfnd.us.auth0.com`).
    pub fn domain(&self) -> String {
        format!("{}.{}", self.url, AUTH0_DOMAIN_SUFFIX)
    }

    pub fn callback_url_parsed(&self) -> Result<Url> {
        Url::parse(&self.callback_url)
            .map_err(|e| SharedError::invalid_url("auth0.callbackURL", &self.callback_url, e))
    }
}
