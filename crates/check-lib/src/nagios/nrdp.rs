//! NRDP passive check submission.
//!
//! The batch is serialized to the NRDP `checkresults` XML document and
//! posted as form data (`token`, `cmd=submitcheck`, `XMLDATA`) to the
//! server's `/nrdp/` endpoint.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::report::CheckResultBatch;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("NRDP submission failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl CheckResultBatch {
    /// Render the batch as an NRDP `checkresults` document.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<checkresults>");
        for result in self.iter() {
            let kind = if result.service_name.is_some() {
                "service"
            } else {
                "host"
            };
            xml.push_str(&format!("<checkresult type=\"{kind}\">"));
            xml.push_str(&format!("<hostname>{}</hostname>", escape_text(&result.hostname)));
            if let Some(service) = &result.service_name {
                xml.push_str(&format!("<servicename>{}</servicename>", escape_text(service)));
            }
            xml.push_str(&format!("<state>{}</state>", result.state.code()));
            xml.push_str(&format!("<output>{}</output>", escape_text(&result.output)));
            xml.push_str("</checkresult>");
        }
        xml.push_str("</checkresults>");
        xml
    }
}

/// Text-node escaping for the fixed NRDP document. Config dumps are full
/// of `<identifier>` tokens, so this is not optional.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Submit a batch of passive check results to the Nagios NRDP endpoint.
pub async fn submit(
    client: &Client,
    batch: &CheckResultBatch,
    nagios_url: &str,
    token: &str,
) -> Result<(), SubmitError> {
    let xml = batch.to_xml();
    let form = [
        ("token", token),
        ("cmd", "submitcheck"),
        ("XMLDATA", xml.as_str()),
    ];

    let response = client
        .post(format!("{}/nrdp/", nagios_url.trim_end_matches('/')))
        .form(&form)
        .send()
        .await?;
    debug!(status = %response.status(), "NRDP response");
    response.error_for_status()?;
    Ok(())
}

#[cfg(test)]
mod xml_tests {
    use super::*;
    use crate::report::{CheckResult, NagiosStatus};

    #[test]
    fn test_empty_batch_xml() {
        assert_eq!(CheckResultBatch::new().to_xml(), "<checkresults></checkresults>");
    }

    #[test]
    fn test_service_result_xml() {
        let mut batch = CheckResultBatch::new();
        batch.push(CheckResult::config_check(
            "QW-BCL11",
            NagiosStatus::Critical,
            "drift",
        ));
        assert_eq!(
            batch.to_xml(),
            "<checkresults><checkresult type=\"service\"><hostname>QW-BCL11</hostname>\
             <servicename>Config Check</servicename><state>2</state><output>drift</output>\
             </checkresult></checkresults>"
        );
    }

    #[test]
    fn test_host_result_omits_servicename() {
        let mut batch = CheckResultBatch::new();
        batch.push(CheckResult {
            hostname: "QW-BCL11".to_string(),
            service_name: None,
            state: NagiosStatus::Unknown,
            output: "Host unreachable.".to_string(),
        });
        let xml = batch.to_xml();
        assert!(xml.contains("type=\"host\""));
        assert!(!xml.contains("<servicename>"));
        assert!(xml.contains("<state>3</state>"));
    }

    #[test]
    fn test_output_markup_is_escaped() {
        let mut batch = CheckResultBatch::new();
        batch.push(CheckResult::config_check(
            "QW-BCL11",
            NagiosStatus::Critical,
            "Changes:\n<networking/mode> & more",
        ));
        let xml = batch.to_xml();
        assert!(xml.contains("&lt;networking/mode&gt; &amp; more"));
        assert!(!xml.contains("<networking/mode>"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let mut batch = CheckResultBatch::new();
        for hostname in ["QW-AAA01", "QW-BBB02", "QW-CCC03"] {
            batch.push(CheckResult::config_check(hostname, NagiosStatus::Ok, "ok"));
        }
        let xml = batch.to_xml();
        let first = xml.find("QW-AAA01").unwrap();
        let second = xml.find("QW-BBB02").unwrap();
        let third = xml.find("QW-CCC03").unwrap();
        assert!(first < second && second < third);
    }
}
