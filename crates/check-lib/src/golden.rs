//! Golden image store.
//!
//! Filesystem-backed baseline store: one plain-text configuration blob per
//! `(network, station, device type)` key, at
//! `<root>/<network>/<station>/<device_type>/latest`. Only the most recent
//! write is addressable; there is no versioning or history. Baselines are
//! seeded the first time a device is seen and are only ever replaced by an
//! explicit write — drift is reported, never reconciled.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::models::DeviceType;

const BASELINE_FILE: &str = "latest";

#[derive(Debug, Error)]
pub enum GoldenImageError {
    #[error("no golden image at {path}")]
    NotFound { path: PathBuf },
    #[error("host identifier {0:?} has no network-station prefix")]
    BadHostname(String),
    #[error("golden image io: {0}")]
    Io(#[from] io::Error),
}

/// Composite key addressing one device's baseline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceKey {
    pub network: String,
    pub station: String,
    pub device_type: DeviceType,
}

impl DeviceKey {
    /// Derive the key from a `-`-separated host identifier (`NET-STA-...`).
    ///
    /// Host identifiers with fewer than two segments have no defined
    /// baseline location and are rejected.
    pub fn from_hostname(hostname: &str, device_type: DeviceType) -> Result<Self, GoldenImageError> {
        let mut segments = hostname.split('-');
        match (segments.next(), segments.next()) {
            (Some(network), Some(station)) if !network.is_empty() && !station.is_empty() => {
                Ok(Self {
                    network: network.to_string(),
                    station: station.to_string(),
                    device_type,
                })
            }
            _ => Err(GoldenImageError::BadHostname(hostname.to_string())),
        }
    }
}

/// Filesystem store of golden images under a single root directory.
#[derive(Debug, Clone)]
pub struct GoldenImageStore {
    root: PathBuf,
}

impl GoldenImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn baseline_path(&self, key: &DeviceKey) -> PathBuf {
        self.root
            .join(&key.network)
            .join(&key.station)
            .join(key.device_type.as_str())
            .join(BASELINE_FILE)
    }

    /// Load the baseline for a device. `NotFound` means the device has
    /// never been seeded.
    pub fn load(&self, key: &DeviceKey) -> Result<String, GoldenImageError> {
        let path = self.baseline_path(key);
        if !path.exists() {
            return Err(GoldenImageError::NotFound { path });
        }
        Ok(fs::read_to_string(&path)?)
    }

    /// Seed or fully overwrite the baseline for a device. Parent
    /// directories are created as needed.
    pub fn write(&self, key: &DeviceKey, config: &str) -> Result<(), GoldenImageError> {
        let path = self.baseline_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), "writing golden image");
        fs::write(&path, config)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn key() -> DeviceKey {
        DeviceKey::from_hostname("QW-BCL11-titansma", DeviceType::TitanSma).unwrap()
    }

    #[test]
    fn test_key_from_hostname() {
        let key = key();
        assert_eq!(key.network, "QW");
        assert_eq!(key.station, "BCL11");
        assert_eq!(key.device_type, DeviceType::TitanSma);
    }

    #[test]
    fn test_two_segment_hostname_accepted() {
        assert!(DeviceKey::from_hostname("QW-BCL11", DeviceType::Fortimus).is_ok());
    }

    #[test]
    fn test_malformed_hostname_rejected() {
        for hostname in ["", "QWBCL11", "QW-", "-BCL11"] {
            let err = DeviceKey::from_hostname(hostname, DeviceType::TitanSma).unwrap_err();
            assert!(matches!(err, GoldenImageError::BadHostname(_)), "{hostname:?}");
        }
    }

    #[test]
    fn test_load_missing_baseline() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        let err = store.load(&key()).unwrap_err();
        assert!(matches!(err, GoldenImageError::NotFound { .. }));
    }

    #[test]
    fn test_seed_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        store.write(&key(), "config v1\n").unwrap();
        assert_eq!(store.load(&key()).unwrap(), "config v1\n");
    }

    #[test]
    fn test_write_overwrites_previous_baseline() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        store.write(&key(), "config v1\n").unwrap();
        store.write(&key(), "config v2\n").unwrap();
        assert_eq!(store.load(&key()).unwrap(), "config v2\n");
    }

    #[test]
    fn test_device_types_keep_separate_baselines() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        let titan = key();
        let fortimus = DeviceKey::from_hostname("QW-BCL11-fmus", DeviceType::Fortimus).unwrap();
        store.write(&titan, "titan config").unwrap();
        store.write(&fortimus, "fortimus config").unwrap();
        assert_eq!(store.load(&titan).unwrap(), "titan config");
        assert_eq!(store.load(&fortimus).unwrap(), "fortimus config");
    }

    #[test]
    fn test_baseline_path_layout() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        store.write(&key(), "config").unwrap();
        assert!(dir.path().join("QW/BCL11/titansma/latest").is_file());
    }
}
