use log::debug;
use shared::{Auth0Config, Result, SharedError};
use url::Url;

/// Page the app lands on after Auth0 redirects back.
pub const CALLBACK_PATH: &str = "/tabs/user-page";

fn tenant_url(auth0: &Auth0Config, path: &str) -> Result<Url> {
    let raw = format!("https://{}{}", auth0.domain(), path);
    Url::parse(&raw)
        .map_err(|e| SharedError::invalid_url("auth0.url", auth0.url(), e))
}

/// Implicit-grant authorize link. `callback_path` is appended to the
/// configured callback URL to form `redirect_uri`.
pub fn build_login_link(auth0: &Auth0Config, callback_path: &str) -> Result<Url> {
    let mut link = tenant_url(auth0, "/authorize")?;
    link.query_pairs_mut()
        .append_pair("audience", auth0.audience())
        .append_pair("response_type", "token")
        .append_pair("client_id", auth0.client_id())
        .append_pair("redirect_uri", &format!("{}{}", auth0.callback_url(), callback_path));

    debug!("Auth0 login link: {}", link);
    Ok(link)
}

pub fn build_logout_link(auth0: &Auth0Config) -> Result<Url> {
    let mut link = tenant_url(auth0, "/v2/logout")?;
    link.query_pairs_mut()
        .append_pair("client_id", auth0.client_id())
        .append_pair("returnTo", auth0.callback_url());

    debug!("Auth0 logout link: {}", link);
    Ok(link)
}

pub fn token_endpoint(auth0: &Auth0Config) -> Result<Url> {
    let endpoint = tenant_url(auth0, "/oauth/token")?;
    debug!("Auth0 token endpoint: {}", endpoint);
    Ok(endpoint)
}
