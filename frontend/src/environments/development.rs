use shared::{Auth0Config, EnvironmentConfig};

// Replace these with the values of your own Auth0 tenant and API.
pub static DEVELOPMENT: EnvironmentConfig = EnvironmentConfig::new(
    false,
    // the running Flask API server
    "http://127.0.0.1:5000",
    Auth0Config::new(
        // tenant domain prefix
        "sfnd.us",
        // audience set for the Auth0 API
        "coffeeShopApi",
        // client id generated for the Auth0 app
        "OAdmIOaaNKLyiV1g9uuyA1BlJlurlTeg",
        // base url of the running Ionic app
        "http://localhost:4200",
    ),
);
