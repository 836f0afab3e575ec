//! TitanSMA digitizer web interface.
//!
//! Login is a challenge handshake: fetch a one-time key from `/key`, then
//! post `md5(md5(password) + key)` with the username in `X-NMX-*` headers.
//! The session cookie issued alongside the key must accompany the login
//! and config requests, so each interface owns its own cookie-enabled
//! client scoped to a single fetch.

use std::time::Duration;

use md5::{Digest, Md5};
use reqwest::Client;
use tracing::debug;

use super::{DeviceCredentials, FetchError};

pub struct DigitizerInterface {
    client: Client,
    address: String,
}

impl DigitizerInterface {
    /// Create a session-scoped interface for the digitizer at `address`.
    pub fn new(address: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            address: address.to_string(),
        })
    }

    fn url(&self, relative: &str) -> String {
        format!("http://{}/{}", self.address, relative)
    }

    async fn key(&self) -> Result<String, FetchError> {
        let url = self.url("key");
        debug!(url = %url, "requesting login key");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Log into the digitizer, establishing the session cookie.
    pub async fn login(&self, credentials: &DeviceCredentials) -> Result<(), FetchError> {
        let key = self.key().await?;
        let encoded = md5_hex(&format!("{}{}", md5_hex(&credentials.password), key));

        let url = self.url("login");
        debug!(url = %url, username = %credentials.username, "logging in");
        self.client
            .post(&url)
            .header("X-NMX-USERNAME", &credentials.username)
            .header("X-NMX-PASSWORD", encoded)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Download the running configuration dump.
    pub async fn configuration(&self) -> Result<String, FetchError> {
        let url = self.url("config");
        debug!(url = %url, "downloading running config");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_known_vectors() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_password_encoding_depends_on_key() {
        let with_key_a = md5_hex(&format!("{}{}", md5_hex("pw"), "key-a"));
        let with_key_b = md5_hex(&format!("{}{}", md5_hex("pw"), "key-b"));
        assert_eq!(with_key_a.len(), 32);
        assert_ne!(with_key_a, with_key_b);
        assert_ne!(with_key_a, md5_hex("pw"));
    }
}
