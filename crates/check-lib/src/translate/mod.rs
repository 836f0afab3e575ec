//! Translation of the raw TitanSMA configuration dump into readable settings.
//!
//! The digitizer exposes its configuration as one triple per line:
//!
//! ```text
//! <retrieval/stationName> = "BCL11"^^xsd:string.
//! ```
//!
//! Only the identifier and the value are of interest. Values wrapped in an
//! `xsd` type annotation are unwrapped; everything else keeps its literal
//! form minus the trailing period.

mod fields;

use std::collections::HashMap;

use serde::Serialize;

pub use fields::{
    DEVICE_FIELDS, STREAMER_EXISTS, STREAMER_FIELDS, STREAMER_SLOTS, WEBSOCKET_EXISTS,
    WEBSOCKET_FIELDS, WEBSOCKET_SLOTS,
};

/// A single readable configuration setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamerKind {
    Np,
    Websocket,
}

impl StreamerKind {
    pub fn title(&self) -> &'static str {
        match self {
            StreamerKind::Np => "NP Streamer",
            StreamerKind::Websocket => "Websocket Streamer",
        }
    }
}

/// One populated streamer slot.
#[derive(Debug, Clone, Serialize)]
pub struct StreamerReport {
    pub kind: StreamerKind,
    pub index: usize,
    pub entries: Vec<ConfigEntry>,
}

/// The full translated configuration of a device.
#[derive(Debug, Clone, Serialize)]
pub struct TitanSmaReport {
    pub device: Vec<ConfigEntry>,
    pub streamers: Vec<StreamerReport>,
}

/// Translates a raw configuration dump into a structured report.
pub fn parse_config(raw: &str) -> TitanSmaReport {
    let indexed = index_config(raw);

    let device = DEVICE_FIELDS
        .iter()
        .filter_map(|(identifier, name)| {
            indexed.get(*identifier).map(|value| ConfigEntry {
                name: (*name).to_string(),
                value: translate_value(value),
            })
        })
        .collect();

    let mut streamers = Vec::new();
    for slot in 1..=STREAMER_SLOTS {
        if slot_exists(&indexed, STREAMER_EXISTS, slot) {
            streamers.push(StreamerReport {
                kind: StreamerKind::Np,
                index: slot,
                entries: slot_entries(&indexed, STREAMER_FIELDS, slot),
            });
        }
    }
    for slot in 1..=WEBSOCKET_SLOTS {
        if slot_exists(&indexed, WEBSOCKET_EXISTS, slot) {
            streamers.push(StreamerReport {
                kind: StreamerKind::Websocket,
                index: slot,
                entries: slot_entries(&indexed, WEBSOCKET_FIELDS, slot),
            });
        }
    }

    TitanSmaReport { device, streamers }
}

/// Indexes a raw dump by identifier. Each line carries the identifier as its
/// first token and the value as its third; lines without both are skipped.
fn index_config(raw: &str) -> HashMap<String, String> {
    let mut indexed = HashMap::new();
    for line in raw.lines() {
        let mut tokens = line.split_whitespace();
        let identifier = tokens.next();
        tokens.next();
        let value = tokens.next();
        if let (Some(identifier), Some(value)) = (identifier, value) {
            indexed.insert(identifier.to_string(), value.to_string());
        }
    }
    indexed
}

/// Unwraps a raw value: trailing period dropped, `"v"^^xsd:type` reduced
/// to `v`, surrounding quotes stripped from plain strings.
fn translate_value(raw: &str) -> String {
    let trimmed = raw.strip_suffix('.').unwrap_or(raw);
    if let Some((literal, _)) = trimmed.split_once("^^xsd:") {
        literal.trim_matches('"').to_string()
    } else {
        trimmed.trim_matches('"').to_string()
    }
}

fn slot_exists(indexed: &HashMap<String, String>, template: &str, slot: usize) -> bool {
    let key = template.replace("{i}", &slot.to_string());
    indexed
        .get(&key)
        .map(|value| translate_value(value) == "true")
        .unwrap_or(false)
}

fn slot_entries(
    indexed: &HashMap<String, String>,
    fields: &[(&str, &str)],
    slot: usize,
) -> Vec<ConfigEntry> {
    fields
        .iter()
        .filter_map(|(template, name)| {
            let key = template.replace("{i}", &slot.to_string());
            indexed.get(&key).map(|value| ConfigEntry {
                name: (*name).to_string(),
                value: translate_value(value),
            })
        })
        .collect()
}
