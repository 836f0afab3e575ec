//! Fortimus running-config download.
//!
//! Fortimus units export their configuration as plain text without a
//! login step.

use reqwest::Client;
use tracing::debug;

use super::FetchError;

/// Download the running configuration from the Fortimus at `address`.
pub async fn fetch_fortimus_config(client: &Client, address: &str) -> Result<String, FetchError> {
    let url = format!("http://{address}/config.txt");
    debug!(url = %url, "downloading running config");
    let response = client.get(&url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
