//! Nagios XI collaborators: inventory lookups and passive result submission.

pub mod api;
pub mod nrdp;


pub use api::{DirectoryError, NagiosXiClient};
pub use nrdp::{submit, SubmitError};
