//! Shared data models for the station config checker.

use serde::{Deserialize, Serialize};

/// Device family of a monitored station host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    TitanSma,
    Fortimus,
}

impl DeviceType {
    /// Stable discriminator used in golden image paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::TitanSma => "titansma",
            DeviceType::Fortimus => "fortimus",
        }
    }

    /// Nagios hostgroup holding all devices of this family.
    pub fn hostgroup(&self) -> &'static str {
        match self {
            DeviceType::TitanSma => "titan-sma",
            DeviceType::Fortimus => "fortimus",
        }
    }
}

/// Host record resolved from the monitoring server's inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    /// Nagios host name, `NET-STA-...` shaped.
    pub hostname: String,
    /// IP address or resolvable name of the device itself.
    pub address: String,
    /// Install variant selecting which credential set applies at login.
    pub install_variant: Option<String>,
    /// Whether the monitoring server currently considers the host up.
    pub reachable: bool,
}
