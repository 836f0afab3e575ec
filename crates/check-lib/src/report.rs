//! Nagios plugin output model and the config check result builder.
//!
//! Output formats follow the plugin development guidelines
//! (<https://nagios-plugins.org/doc/guidelines.html>): a one-line summary,
//! a `|`-separated performance-data segment, and an optional multi-line
//! details block.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compare::{changed_lines, similarity_ratio};

/// Service name under which config drift results are reported.
pub const CONFIG_CHECK_SERVICE: &str = "Config Check";

/// Nagios plugin status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NagiosStatus {
    Ok,
    Warning,
    Critical,
    #[default]
    Unknown,
}

impl NagiosStatus {
    /// Numeric state code used on the wire (0=ok, 1=warning, 2=critical,
    /// 3=unknown).
    pub fn code(&self) -> u8 {
        match self {
            NagiosStatus::Ok => 0,
            NagiosStatus::Warning => 1,
            NagiosStatus::Critical => 2,
            NagiosStatus::Unknown => 3,
        }
    }
}

/// One performance-data sample: `'label'=value[uom];warn;crit;min;max`.
#[derive(Debug, Clone, Default)]
pub struct NagiosPerformance {
    pub label: String,
    pub value: f64,
    pub uom: String,
    pub warning: Option<f64>,
    pub critical: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl fmt::Display for NagiosPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |value: Option<f64>| value.map(|v| format!("{v:.5}")).unwrap_or_default();
        write!(
            f,
            "'{}'={}{};{};{};{};{}",
            self.label,
            self.value,
            self.uom,
            bound(self.warning),
            bound(self.critical),
            bound(self.minimum),
            bound(self.maximum),
        )
    }
}

/// How much of the structured output to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Minimal,
    SingleLine,
    Multiline,
}

/// Structured plugin output, rendered per the plugin guidelines.
#[derive(Debug, Clone)]
pub struct PluginOutput {
    pub summary: String,
    pub verbosity: Verbosity,
    pub performances: Vec<NagiosPerformance>,
    pub details: String,
}

impl fmt::Display for PluginOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verbosity == Verbosity::Minimal {
            return write!(f, "{}", self.summary);
        }
        write!(f, "{} |", self.summary)?;
        for performance in &self.performances {
            write!(f, " {performance}")?;
        }
        if self.verbosity == Verbosity::Multiline {
            write!(f, "\n{}", self.details)?;
        }
        Ok(())
    }
}

/// One passive check outcome for a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub hostname: String,
    /// `None` marks a host check rather than a service check.
    pub service_name: Option<String>,
    pub state: NagiosStatus,
    pub output: String,
}

impl CheckResult {
    /// Result for the config check service on one host.
    pub fn config_check(hostname: &str, state: NagiosStatus, output: impl Into<String>) -> Self {
        Self {
            hostname: hostname.to_string(),
            service_name: Some(CONFIG_CHECK_SERVICE.to_string()),
            state,
            output: output.into(),
        }
    }
}

/// Ordered accumulation of one run's results, submitted in one batch.
///
/// Order matches host enumeration order.
#[derive(Debug, Clone, Default)]
pub struct CheckResultBatch {
    results: Vec<CheckResult>,
}

impl CheckResultBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter()
    }
}

/// Compare a running config against its golden image and build the check
/// result for the host.
///
/// Any similarity below 100% is critical: an unexpected change to a
/// deployed station configuration is always operationally significant, so
/// there is no warning tier.
pub fn config_check_result(hostname: &str, golden: &str, running: &str) -> CheckResult {
    let ratio = similarity_ratio(golden, running) * 100.0;
    let changes = changed_lines(golden, running);

    let state = if ratio < 100.0 {
        NagiosStatus::Critical
    } else {
        NagiosStatus::Ok
    };

    let output = PluginOutput {
        summary: format!("Similarity between config files: {ratio}%"),
        verbosity: Verbosity::Multiline,
        performances: vec![NagiosPerformance {
            label: "Config".to_string(),
            value: ratio,
            uom: "%".to_string(),
            ..Default::default()
        }],
        details: format!("Changes:\n{}", changes.join("\n")),
    };

    CheckResult::config_check(hostname, state, output.to_string())
}
