//! Credential file handling
//!
//! Credentials live in an INI file with a `[nagios]` section holding the
//! XI API key and NRDP token, and a `[TitanSMA]` section holding the web
//! interface username plus one password per install variant:
//!
//! ```ini
//! [nagios]
//! api_key = ...
//! nrdp_token = ...
//!
//! [TitanSMA]
//! username = admin
//! polarsite = ...
//! vault = ...
//! ```

use std::collections::HashMap;
use std::path::Path;

use check_lib::device::DeviceCredentials;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("could not read credential file: {0}")]
    Unreadable(#[from] config::ConfigError),
    #[error("credential file is missing key {0}")]
    MissingKey(String),
}

#[derive(Debug, Deserialize)]
struct NagiosSection {
    api_key: String,
    nrdp_token: String,
}

#[derive(Debug, Deserialize)]
struct RawCredentials {
    nagios: NagiosSection,
    titansma: HashMap<String, String>,
}

/// Credentials loaded from the INI file. Section and key names are
/// lowercased by the loader.
#[derive(Debug)]
pub struct Credentials {
    pub api_key: String,
    pub nrdp_token: String,
    titansma: HashMap<String, String>,
}

impl Credentials {
    pub fn load(path: &Path) -> Result<Self, CredentialsError> {
        let raw: RawCredentials = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Ini))
            .build()?
            .try_deserialize()?;

        Ok(Credentials {
            api_key: raw.nagios.api_key,
            nrdp_token: raw.nagios.nrdp_token,
            titansma: raw.titansma,
        })
    }

    /// The web interface login for a given install variant. Variant names
    /// are matched case-insensitively.
    pub fn device_credentials(&self, variant: &str) -> Result<DeviceCredentials, CredentialsError> {
        let username = self
            .titansma
            .get("username")
            .ok_or_else(|| CredentialsError::MissingKey("titansma.username".to_string()))?;
        let password = self
            .titansma
            .get(&variant.to_lowercase())
            .ok_or_else(|| CredentialsError::MissingKey(format!("titansma.{variant}")))?;

        Ok(DeviceCredentials {
            username: username.clone(),
            password: password.clone(),
        })
    }
}
