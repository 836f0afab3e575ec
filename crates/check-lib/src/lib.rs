//! Core library for seismic station configuration checks
//!
//! This crate provides the building blocks for:
//! - Fetching running configurations from TitanSMA and Fortimus devices
//! - Comparing running configurations against golden images
//! - Building Nagios check results and submitting them over NRDP
//! - Querying the Nagios XI inventory
//! - Translating raw TitanSMA configuration dumps into readable settings

pub mod compare;
pub mod device;
pub mod golden;
pub mod models;
pub mod nagios;
pub mod report;
pub mod runner;
pub mod translate;

pub use golden::{DeviceKey, GoldenImageError, GoldenImageStore};
pub use models::{DeviceType, HostInfo};
pub use report::{CheckResult, CheckResultBatch, NagiosStatus, PluginOutput};
pub use runner::{check_host, ConfigFetcher};
