//! Output format selection.

use std::fmt;
use std::str::FromStr;

use crate::errors::{MonitorError, Result};

/// How check messages are rendered on the output channels.
///
/// Selecting an unknown format name is a configuration error and must be
/// surfaced before any server query is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Messages pass through unchanged
    Default,
    /// Messages carry a `vault <SEVERITY> -` prefix for Nagios consumption
    Nagios,
}

impl FromStr for OutputFormat {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(OutputFormat::Default),
            "nagios" => Ok(OutputFormat::Nagios),
            _ => Err(MonitorError::Config(format!("Unknown output format: {}", s))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Default => write!(f, "default"),
            OutputFormat::Nagios => write!(f, "nagios"),
        }
    }
}
