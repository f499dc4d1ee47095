pub mod auth;
pub mod config;
pub mod environments;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use config::Config;
pub use environments::{DEVELOPMENT, ENVIRONMENT, PRODUCTION};
