//! Station configuration checker
//!
//! Polls the Nagios XI inventory for seismic station hardware, downloads
//! each device's running configuration, compares it against the golden
//! image on disk and pushes the results back to Nagios over NRDP.

mod config;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use check_lib::device::{fetch_fortimus_config, DigitizerInterface, FetchError};
use check_lib::nagios::{self, NagiosXiClient};
use check_lib::{check_host, CheckResult, CheckResultBatch, ConfigFetcher, DeviceType,
    GoldenImageStore, HostInfo, NagiosStatus};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Credentials;

/// Station configuration checker
#[derive(Parser)]
#[command(name = "check-station-config")]
#[command(author, version, about = "Compare station device configs against golden images", long_about = None)]
struct Cli {
    /// Base URL of the Nagios server (can also be set via NAGIOS_URL env var)
    #[arg(long, env = "NAGIOS_URL")]
    nagios_url: String,

    /// Parent directory of the config golden images
    #[arg(long)]
    golden_dir: PathBuf,

    /// Path to the credential file
    #[arg(long)]
    cred_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check all TitanSMA digitizers
    Titansma,
    /// Check all Fortimus digitizers
    Fortimus,
}

/// Fetches a TitanSMA config through its authenticated web interface.
/// The login password depends on the host's install variant.
struct TitanSmaFetcher<'a> {
    credentials: &'a Credentials,
}

#[async_trait]
impl ConfigFetcher for TitanSmaFetcher<'_> {
    async fn fetch_config(&self, host: &HostInfo) -> Result<String, FetchError> {
        let variant = host
            .install_variant
            .as_deref()
            .ok_or(FetchError::MissingVariant)?;
        let login = self
            .credentials
            .device_credentials(variant)
            .map_err(|_| FetchError::UnknownVariant(variant.to_string()))?;

        let digitizer = DigitizerInterface::new(&host.address)?;
        digitizer.login(&login).await?;
        digitizer.configuration().await
    }
}

/// Fetches a Fortimus config over its unauthenticated HTTP interface.
struct FortimusFetcher {
    client: reqwest::Client,
}

impl FortimusFetcher {
    fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(FortimusFetcher { client })
    }
}

#[async_trait]
impl ConfigFetcher for FortimusFetcher {
    async fn fetch_config(&self, host: &HostInfo) -> Result<String, FetchError> {
        fetch_fortimus_config(&self.client, &host.address).await
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    let credentials = Credentials::load(&cli.cred_file)
        .with_context(|| format!("loading credentials from {}", cli.cred_file.display()))?;

    match cli.command {
        Commands::Titansma => {
            let fetcher = TitanSmaFetcher {
                credentials: &credentials,
            };
            run_check(&cli, &credentials, DeviceType::TitanSma, &fetcher).await
        }
        Commands::Fortimus => {
            let fetcher = FortimusFetcher::new()?;
            run_check(&cli, &credentials, DeviceType::Fortimus, &fetcher).await
        }
    }
}

/// Check every member of the device type's hostgroup and submit the batch.
async fn run_check<F>(
    cli: &Cli,
    credentials: &Credentials,
    device_type: DeviceType,
    fetcher: &F,
) -> Result<()>
where
    F: ConfigFetcher + Sync,
{
    let directory = NagiosXiClient::new(&cli.nagios_url, &credentials.api_key)?;
    let store = GoldenImageStore::new(&cli.golden_dir);

    let members = directory
        .hostgroup_members(device_type.hostgroup())
        .await
        .with_context(|| format!("listing {} hosts", device_type.hostgroup()))?;
    info!(
        hostgroup = device_type.hostgroup(),
        hosts = members.len(),
        "starting config check run"
    );

    let mut batch = CheckResultBatch::new();
    for hostname in &members {
        let result = match directory.host_info(hostname).await {
            Ok(host) => check_host(&store, fetcher, &host, device_type).await,
            Err(err) => {
                warn!(hostname = %hostname, error = %err, "host lookup failed");
                CheckResult::config_check(hostname, NagiosStatus::Unknown, "Host unreachable.")
            }
        };
        batch.push(result);
    }

    let client = reqwest::Client::new();
    nagios::submit(&client, &batch, &cli.nagios_url, &credentials.nrdp_token)
        .await
        .context("submitting check results over NRDP")?;
    info!(results = batch.len(), "submitted check results");
    Ok(())
}
