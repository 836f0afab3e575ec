//! Per-host check pipeline.
//!
//! Walks one host through the run state machine: directory reachability,
//! config fetch, golden image load or seed, comparison. Every failure is
//! converted into a check result at this boundary so one bad host cannot
//! abort or corrupt the rest of the run.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::device::FetchError;
use crate::golden::{DeviceKey, GoldenImageError, GoldenImageStore};
use crate::models::{DeviceType, HostInfo};
use crate::report::{config_check_result, CheckResult, NagiosStatus};

/// Downloads the running configuration for one host.
#[async_trait]
pub trait ConfigFetcher {
    async fn fetch_config(&self, host: &HostInfo) -> Result<String, FetchError>;
}

/// Run the full check pipeline for one host. Always yields a result.
pub async fn check_host<F>(
    store: &GoldenImageStore,
    fetcher: &F,
    host: &HostInfo,
    device_type: DeviceType,
) -> CheckResult
where
    F: ConfigFetcher + Sync,
{
    if !host.reachable {
        return CheckResult::config_check(&host.hostname, NagiosStatus::Unknown, "Host unreachable.");
    }

    debug!(hostname = %host.hostname, address = %host.address, "downloading running config");
    let running = match fetcher.fetch_config(host).await {
        Ok(config) => config,
        Err(err) => {
            warn!(hostname = %host.hostname, error = %err, "running config download failed");
            return CheckResult::config_check(
                &host.hostname,
                NagiosStatus::Critical,
                "Host unreachable when downloading running config",
            );
        }
    };

    let key = match DeviceKey::from_hostname(&host.hostname, device_type) {
        Ok(key) => key,
        Err(err) => {
            warn!(hostname = %host.hostname, error = %err, "cannot derive golden image key");
            return CheckResult::config_check(&host.hostname, NagiosStatus::Unknown, err.to_string());
        }
    };

    match store.load(&key) {
        Ok(golden) => {
            debug!(hostname = %host.hostname, "comparing against golden image");
            config_check_result(&host.hostname, &golden, &running)
        }
        Err(GoldenImageError::NotFound { .. }) => {
            debug!(hostname = %host.hostname, "no golden image, seeding from running config");
            match store.write(&key, &running) {
                Ok(()) => CheckResult::config_check(
                    &host.hostname,
                    NagiosStatus::Ok,
                    "No Golden Image present. New golden image saved.",
                ),
                Err(err) => {
                    warn!(hostname = %host.hostname, error = %err, "seeding golden image failed");
                    CheckResult::config_check(&host.hostname, NagiosStatus::Unknown, err.to_string())
                }
            }
        }
        Err(err) => {
            warn!(hostname = %host.hostname, error = %err, "golden image load failed");
            CheckResult::config_check(&host.hostname, NagiosStatus::Unknown, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Fetcher with a canned outcome per call.
    struct FixedFetcher {
        config: Result<String, ()>,
    }

    #[async_trait]
    impl ConfigFetcher for FixedFetcher {
        async fn fetch_config(&self, _host: &HostInfo) -> Result<String, FetchError> {
            match &self.config {
                Ok(config) => Ok(config.clone()),
                Err(()) => Err(FetchError::MissingVariant),
            }
        }
    }

    fn host(hostname: &str, reachable: bool) -> HostInfo {
        HostInfo {
            hostname: hostname.to_string(),
            address: "192.0.2.1".to_string(),
            install_variant: Some("standard".to_string()),
            reachable,
        }
    }

    fn fetcher(config: &str) -> FixedFetcher {
        FixedFetcher {
            config: Ok(config.to_string()),
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_short_circuits() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        let result = check_host(
            &store,
            &fetcher("unused"),
            &host("QW-BCL11-titansma", false),
            DeviceType::TitanSma,
        )
        .await;

        assert_eq!(result.state, NagiosStatus::Unknown);
        assert_eq!(result.output, "Host unreachable.");
        // The comparator was never reached: nothing was seeded.
        let key = DeviceKey::from_hostname("QW-BCL11-titansma", DeviceType::TitanSma).unwrap();
        assert!(store.load(&key).is_err());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_critical_and_isolated() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        let failing = FixedFetcher { config: Err(()) };
        let result = check_host(
            &store,
            &failing,
            &host("QW-BCL11-titansma", true),
            DeviceType::TitanSma,
        )
        .await;

        assert_eq!(result.state, NagiosStatus::Critical);
        assert_eq!(result.output, "Host unreachable when downloading running config");
    }

    #[tokio::test]
    async fn test_first_sight_seeds_golden_image() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        let result = check_host(
            &store,
            &fetcher("fresh config\n"),
            &host("QW-BCL11-titansma", true),
            DeviceType::TitanSma,
        )
        .await;

        assert_eq!(result.state, NagiosStatus::Ok);
        assert_eq!(result.output, "No Golden Image present. New golden image saved.");

        let key = DeviceKey::from_hostname("QW-BCL11-titansma", DeviceType::TitanSma).unwrap();
        assert_eq!(store.load(&key).unwrap(), "fresh config\n");
    }

    #[tokio::test]
    async fn test_second_run_compares_against_seed() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        let titan = host("QW-BCL11-titansma", true);

        check_host(&store, &fetcher("line one\nline two"), &titan, DeviceType::TitanSma).await;
        let result =
            check_host(&store, &fetcher("line one\nline two"), &titan, DeviceType::TitanSma).await;

        assert_eq!(result.state, NagiosStatus::Ok);
        assert!(result.output.starts_with("Similarity between config files: 100%"));
    }

    #[tokio::test]
    async fn test_drift_is_critical_and_baseline_untouched() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        let titan = host("QW-BCL11-titansma", true);

        check_host(&store, &fetcher("line one\nline two"), &titan, DeviceType::TitanSma).await;
        let result =
            check_host(&store, &fetcher("line one\nline 2"), &titan, DeviceType::TitanSma).await;

        assert_eq!(result.state, NagiosStatus::Critical);
        assert!(result.output.contains("Changes:\nline 2"));

        // Drift is reported, not reconciled.
        let key = DeviceKey::from_hostname("QW-BCL11-titansma", DeviceType::TitanSma).unwrap();
        assert_eq!(store.load(&key).unwrap(), "line one\nline two");
    }

    #[tokio::test]
    async fn test_malformed_hostname_isolated_as_unknown() {
        let dir = TempDir::new().unwrap();
        let store = GoldenImageStore::new(dir.path());
        let result = check_host(
            &store,
            &fetcher("config"),
            &host("nodashes", true),
            DeviceType::Fortimus,
        )
        .await;

        assert_eq!(result.state, NagiosStatus::Unknown);
        assert!(result.output.contains("nodashes"));
    }
}
