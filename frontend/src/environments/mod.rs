//! Authored environment records.
//!
//! Each deployment target gets one whole record. The `production` Cargo
//! feature decides which one is compiled in as [`ENVIRONMENT`]; nothing
//! switches records at runtime.

mod development;
mod production;

use shared::EnvironmentConfig;

pub use development::DEVELOPMENT;
pub use production::PRODUCTION;

/// The record this build runs with.
#[cfg(not(feature = "production"))]
pub static ENVIRONMENT: &EnvironmentConfig = &DEVELOPMENT;

/// The record this build runs with.
#[cfg(feature = "production")]
pub static ENVIRONMENT: &EnvironmentConfig = &PRODUCTION;
