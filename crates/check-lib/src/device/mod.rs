//! Device web interfaces: running-config download for both device families.

mod digitizer;
mod fortimus;

pub use digitizer::DigitizerInterface;
pub use fortimus::fetch_fortimus_config;

use thiserror::Error;

/// Login credentials for a device web interface.
#[derive(Debug, Clone)]
pub struct DeviceCredentials {
    pub username: String,
    pub password: String,
}

/// Errors downloading a running config from a device.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("device request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("host has no install variant, cannot select credentials")]
    MissingVariant,
    #[error("no credentials for install variant {0:?}")]
    UnknownVariant(String),
}
