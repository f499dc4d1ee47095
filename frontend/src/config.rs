use log::{info, warn};
use shared::{Auth0Config, EnvironmentConfig, Result, SharedError};
use url::Url;

use crate::environments::ENVIRONMENT;

/// Read-only view of the record compiled into this build.
pub struct Config;

impl Config {
    pub fn environment() -> &'static EnvironmentConfig {
        ENVIRONMENT
    }

    pub fn is_production() -> bool {
        ENVIRONMENT.production()
    }

    /// Base URL of the backend API, exactly as authored.
    pub fn api_base_url() -> String {
        ENVIRONMENT.api_server_url().to_string()
    }

    pub fn auth0() -> &'static Auth0Config {
        ENVIRONMENT.auth0()
    }

    /// Appends `path` to the API base, e.g. `/drinks`.
    pub fn api_url(path: &str) -> Result<Url> {
        api_url_for(ENVIRONMENT, path)
    }

    pub fn log_configuration() {
        log_configuration_for(ENVIRONMENT);
    }
}

/// Request URL for `path` under `apiServerUrl`. The base keeps its own
/// path prefix; `path` may not name another scheme or host.
pub fn api_url_for(config: &EnvironmentConfig, path: &str) -> Result<Url> {
    if path.starts_with("//") || Url::parse(path).is_ok() {
        return Err(SharedError::InvalidUrl(format!(
            "path = {:?}: must be relative to apiServerUrl",
            path
        )));
    }

    let mut url = config.api_server_url_parsed()?;
    url.path_segments_mut()
        .map_err(|_| {
            SharedError::InvalidUrl(format!(
                "apiServerUrl = {:?}: cannot be a base",
                config.api_server_url()
            ))
        })?
        .pop_if_empty()
        .extend(path.trim_start_matches('/').split('/'));

    Ok(url)
}

pub fn log_configuration_for(config: &EnvironmentConfig) {
    let auth0 = config.auth0();
    info!("Environment: {}", config.environment());
    info!("API server: {}", config.api_server_url());
    info!(
        "Auth0: {} (audience: {}, client: {})",
        auth0.domain(),
        auth0.audience(),
        auth0.client_id()
    );
    info!("Auth0 callback: {}", auth0.callback_url());

    if !config.production() {
        warn!("Running with a development environment record");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const BROKEN: EnvironmentConfig = EnvironmentConfig::new(
        false,
        "not a url",
        Auth0Config::new("tenant", "api", "id", "http://localhost:4200"),
    );

    #[test_log::test]
    fn test_api_base_url_is_verbatim() {
        assert_eq!(Config::api_base_url(), Config::environment().api_server_url());
    }

    #[test_log::test]
    fn test_api_url_appends_path() {
        let url = Config::api_url("/drinks").unwrap();
        assert_eq!(url.path(), "/drinks");
        assert_eq!(url.port(), Config::environment().api_server_url_parsed().unwrap().port());
    }

    #[test_log::test]
    fn test_api_url_relative_path() {
        let url = Config::api_url("drinks-detail").unwrap();
        assert_eq!(url.path(), "/drinks-detail");
    }

    #[rstest]
    #[test_log::test]
    #[case("https://shop.example.com/api", "/drinks", "https://shop.example.com/api/drinks")]
    #[case("https://shop.example.com/api/", "/drinks", "https://shop.example.com/api/drinks")]
    #[case("https://shop.example.com/api", "drinks/1", "https://shop.example.com/api/drinks/1")]
    #[case("https://shop.example.com/api", "/../admin", "https://shop.example.com/api/admin")]
    #[case("http://127.0.0.1:5000", "/drinks/1", "http://127.0.0.1:5000/drinks/1")]
    fn test_api_url_keeps_base_prefix(
        #[case] base: &'static str,
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        let config = EnvironmentConfig::new(false, base, BROKEN.auth0().clone());
        assert_eq!(api_url_for(&config, path).unwrap().as_str(), expected);
    }

    #[rstest]
    #[test_log::test]
    #[case("//evil.com/x")]
    #[case("https://other.example/x")]
    #[case("http://127.0.0.1:5000/drinks")]
    fn test_api_url_rejects_other_hosts(#[case] path: &str) {
        let err = Config::api_url(path).unwrap_err();
        assert!(
            matches!(err, SharedError::InvalidUrl(ref msg) if msg.contains("must be relative"))
        );
    }

    #[test_log::test]
    fn test_api_url_with_malformed_base() {
        let err = api_url_for(&BROKEN, "/drinks").unwrap_err();
        assert!(
            matches!(err, SharedError::InvalidUrl(ref msg) if msg.contains("apiServerUrl"))
        );
    }

    #[test_log::test]
    fn test_api_url_with_opaque_base() {
        let opaque =
            EnvironmentConfig::new(false, "mailto:api@example.com", BROKEN.auth0().clone());
        let err = api_url_for(&opaque, "/drinks").unwrap_err();
        assert!(
            matches!(err, SharedError::InvalidUrl(ref msg) if msg.contains("cannot be a base"))
        );
    }

    #[test_log::test]
    fn test_is_production_matches_record() {
        assert_eq!(Config::is_production(), Config::environment().production());
    }
}
