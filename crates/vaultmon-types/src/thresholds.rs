//! Warning/critical threshold pairs and duration helpers.

use chrono::Duration;

use crate::errors::{MonitorError, Result};
use crate::severity::Severity;

/// Default warning threshold for token expiration checks.
pub const DEFAULT_WARNING_TOKEN_EXPIRATION: &str = "168h";

/// Default critical threshold for token expiration checks.
pub const DEFAULT_CRITICAL_TOKEN_EXPIRATION: &str = "72h";

/// Parse a duration from a string (e.g. "90s", "30m", "168h", "2d").
///
/// A bare number is interpreted as seconds.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    let parsed = if let Some(v) = s.strip_suffix('s') {
        v.parse::<i64>().ok().map(Duration::seconds)
    } else if let Some(v) = s.strip_suffix('m') {
        v.parse::<i64>().ok().map(Duration::minutes)
    } else if let Some(v) = s.strip_suffix('h') {
        v.parse::<i64>().ok().map(Duration::hours)
    } else if let Some(v) = s.strip_suffix('d') {
        v.parse::<i64>().ok().map(Duration::days)
    } else {
        s.parse::<i64>().ok().map(Duration::seconds)
    };

    parsed.ok_or_else(|| MonitorError::Config(format!("invalid duration: '{}'", s)))
}

/// Format a duration in human-readable form.
pub fn pretty_duration(duration: Duration) -> String {
    let secs = duration.num_seconds();

    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

/// A parsed warning/critical threshold pair for duration-until-event checks.
///
/// No ordering invariant is enforced between the two values; a warning
/// threshold below the critical one is accepted as configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Remaining time under which the check degrades to Warning
    pub warning: Duration,
    /// Remaining time under which the check degrades to Critical
    pub critical: Duration,
}

impl Thresholds {
    /// Parse both threshold strings; either failing is a configuration error.
    pub fn parse(warning: &str, critical: &str) -> Result<Self> {
        Ok(Self {
            warning: parse_duration(warning)?,
            critical: parse_duration(critical)?,
        })
    }

    /// Classify the remaining time until an event against the thresholds.
    ///
    /// A remaining time of zero or less is Critical regardless of the
    /// threshold values. The comparisons at both edges are strict, so a
    /// remaining time exactly equal to the critical threshold is still
    /// Warning-eligible.
    pub fn classify(&self, remaining: Duration) -> Severity {
        if remaining <= Duration::zero() {
            Severity::Critical
        } else if remaining < self.critical {
            Severity::Critical
        } else if remaining < self.warning {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }
}
