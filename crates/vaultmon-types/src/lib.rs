//! # Vaultmon Types
//!
//! Core types shared by the vaultmon monitoring plugin crates.
//!
//! This crate provides the building blocks every monitoring check composes:
//!
//! - The four-level severity model with its fixed Nagios exit-code mapping
//! - The output format selector (`default` or `nagios`)
//! - Warning/critical threshold pairs and their classification logic
//! - Error types and a result alias
//!
//! ## Example
//!
//! ```
//! use chrono::Duration;
//! use vaultmon_types::{Severity, Thresholds};
//!
//! let thresholds = Thresholds::parse("168h", "72h").unwrap();
//! assert_eq!(thresholds.classify(Duration::hours(200)), Severity::Ok);
//! assert_eq!(thresholds.classify(Duration::hours(100)), Severity::Warning);
//! assert_eq!(thresholds.classify(Duration::hours(10)), Severity::Critical);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod format;
pub mod severity;
pub mod thresholds;

pub use errors::{MonitorError, Result};
pub use format::OutputFormat;
pub use severity::Severity;
pub use thresholds::{
    parse_duration, pretty_duration, Thresholds, DEFAULT_CRITICAL_TOKEN_EXPIRATION,
    DEFAULT_WARNING_TOKEN_EXPIRATION,
};
