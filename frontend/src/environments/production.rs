use shared::{Auth0Config, EnvironmentConfig};

// No separate production tenant exists yet, so only the flag differs.
pub static PRODUCTION: EnvironmentConfig = EnvironmentConfig::new(
    true,
    "http://127.0.0.1:5000",
    Auth0Config::new(
        "sfnd.us",
        "coffeeShopApi",
        "OAdmIOaaNKLyiV1g9uuyA1BlJlurlTeg",
        "http://localhost:4200",
    ),
);
