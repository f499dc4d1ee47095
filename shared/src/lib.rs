pub mod models {
    pub mod auth0;
    pub mod environment;
}

pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    auth0::{Auth0Config, AUTH0_DOMAIN_SUFFIX},
    environment::{Environment, EnvironmentConfig},
};
