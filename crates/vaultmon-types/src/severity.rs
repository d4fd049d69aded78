//! The four-level outcome model shared by every monitoring check.

use std::fmt;

/// Outcome of a monitoring check, ordered by increasing urgency.
///
/// The numeric encoding is the Nagios plugin convention and is the contract
/// between every command and the calling monitoring system: the exit code of
/// a check is always `severity.exit_code()` and nothing else.
///
/// `Undefined` is reserved for situations where the requested fact could not
/// be determined (configuration errors, argument errors, communication
/// failures). A successfully determined bad state (sealed vault, missing
/// policy, expired token) is `Critical`, never `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The monitored condition is healthy
    Ok,
    /// The monitored condition is approaching a critical state
    Warning,
    /// The monitored condition is in a bad state
    Critical,
    /// The monitored condition could not be determined
    Undefined,
}

impl Severity {
    /// The process exit code for this severity (0, 1, 2 or 3).
    pub const fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Undefined => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "OK"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Undefined => write!(f, "UNDEFINED"),
        }
    }
}
