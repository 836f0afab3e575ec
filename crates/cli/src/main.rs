//! TitanSMA configuration tool
//!
//! Downloads the running configuration from a single TitanSMA and
//! translates it into the setting names shown by the device's own web
//! interface.

mod output;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use check_lib::device::{DeviceCredentials, DigitizerInterface};
use check_lib::translate;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// TitanSMA configuration tool
#[derive(Parser)]
#[command(name = "titan-config")]
#[command(author, version, about = "Download and translate a TitanSMA running configuration", long_about = None)]
struct Cli {
    /// The IP address of the TitanSMA to retrieve the config from
    #[arg(short = 'i', long)]
    titansma_ip: String,

    /// Where to store the raw config file. If unset, the raw config is not stored
    #[arg(short = 'c', long)]
    config_output: Option<PathBuf>,

    /// File to store the readable output in. If unset, output goes to the screen
    #[arg(short = 'o', long)]
    output_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    format: output::OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    let credentials = prompt_credentials()?;

    let digitizer = DigitizerInterface::new(&cli.titansma_ip)?;
    debug!(address = %cli.titansma_ip, "logging in");
    digitizer
        .login(&credentials)
        .await
        .context("logging into the TitanSMA")?;
    let running_config = digitizer
        .configuration()
        .await
        .context("downloading the running config")?;

    if let Some(path) = &cli.config_output {
        std::fs::write(path, &running_config)
            .with_context(|| format!("writing raw config to {}", path.display()))?;
    }

    let report = translate::parse_config(&running_config);

    if cli.output_file.is_some() {
        // No ANSI codes when writing to a file
        colored::control::set_override(false);
    }
    let rendered = output::render(&report, cli.format)?;

    match &cli.output_file {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("writing output to {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Prompt the operator for the device login.
fn prompt_credentials() -> Result<DeviceCredentials> {
    let username = prompt("Enter the TitanSMA Username: ")?;
    let password = prompt("Enter the TitanSMA Password: ")?;
    Ok(DeviceCredentials { username, password })
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
