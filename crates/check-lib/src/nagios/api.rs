//! Host directory backed by the Nagios XI objects API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::models::HostInfo;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid Nagios URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Nagios request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected Nagios response: {0}")]
    BadResponse(String),
}

/// Client for the Nagios XI objects API of one server.
pub struct NagiosXiClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl NagiosXiClient {
    /// Create a client for the server at `base_url` (scheme and host, e.g.
    /// `http://nagios.example.org`).
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, DirectoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        // A trailing slash keeps Url::join from eating path segments.
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    async fn get_object<T: DeserializeOwned>(
        &self,
        object: &str,
        params: &[(&str, &str)],
    ) -> Result<T, DirectoryError> {
        let url = self
            .base_url
            .join(&format!("nagiosxi/api/v1/objects/{object}"))?;
        let mut query: Vec<(&str, &str)> = vec![("apikey", &self.api_key)];
        query.extend_from_slice(params);

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// List the member host names of a hostgroup, in server order.
    pub async fn hostgroup_members(&self, hostgroup: &str) -> Result<Vec<String>, DirectoryError> {
        let body: HostgroupMembersResponse = self
            .get_object("hostgroupmembers", &[("hostgroup_name", hostgroup)])
            .await?;
        let group = body.hostgroup.into_iter().next().ok_or_else(|| {
            DirectoryError::BadResponse(format!("hostgroup {hostgroup} not found"))
        })?;
        Ok(group.members.host)
    }

    /// Resolve one host's address, install variant and reachability.
    pub async fn host_info(&self, host_name: &str) -> Result<HostInfo, DirectoryError> {
        let body: HostResponse = self
            .get_object("host", &[("host_name", host_name)])
            .await?;
        let host = body
            .host
            .into_iter()
            .next()
            .ok_or_else(|| DirectoryError::BadResponse(format!("host {host_name} not found")))?;

        let status: HostStatusResponse = self
            .get_object("hoststatus", &[("host_name", host_name)])
            .await?;
        let reachable = status
            .hoststatus
            .first()
            .map(|s| s.current_state == "0")
            .unwrap_or(false);

        Ok(HostInfo {
            hostname: host.host_name,
            address: host.address,
            install_variant: host.notes.filter(|notes| !notes.is_empty()),
            reachable,
        })
    }
}

// Response shapes, limited to the fields the checker consumes. Nagios XI
// reports numeric status fields as strings.

#[derive(Debug, Deserialize)]
struct HostgroupMembersResponse {
    hostgroup: Vec<HostgroupEntry>,
}

#[derive(Debug, Deserialize)]
struct HostgroupEntry {
    members: HostgroupMembers,
}

#[derive(Debug, Deserialize)]
struct HostgroupMembers {
    host: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct HostResponse {
    host: Vec<HostObject>,
}

#[derive(Debug, Deserialize)]
struct HostObject {
    host_name: String,
    address: String,
    #[serde(default)]
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HostStatusResponse {
    #[serde(default)]
    hoststatus: Vec<HostStatusObject>,
}

#[derive(Debug, Deserialize)]
struct HostStatusObject {
    current_state: String,
}
