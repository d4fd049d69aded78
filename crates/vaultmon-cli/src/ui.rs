//! Output channel abstraction for check messages.
//!
//! Commands never write to stdout/stderr directly; they go through a `Ui`
//! so tests can capture everything a check emits.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use colored::Colorize;

type Channel = Arc<Mutex<dyn Write + Send>>;

/// The two output channels of a check, with optional severity coloring.
pub struct Ui {
    out: Channel,
    err: Channel,
    color: bool,
}

impl Ui {
    /// A `Ui` bound to the process stdout/stderr, with coloring enabled.
    pub fn stdio() -> Self {
        Self {
            out: Arc::new(Mutex::new(io::stdout())),
            err: Arc::new(Mutex::new(io::stderr())),
            color: true,
        }
    }

    /// Write a message to the normal channel.
    pub fn output(&self, msg: &str) {
        let styled = if self.color {
            msg.green().to_string()
        } else {
            msg.to_string()
        };
        Self::emit(&self.out, &styled);
    }

    /// Write a warning message to the error channel.
    pub fn warn(&self, msg: &str) {
        let styled = if self.color {
            msg.yellow().to_string()
        } else {
            msg.to_string()
        };
        Self::emit(&self.err, &styled);
    }

    /// Write an error message to the error channel.
    pub fn error(&self, msg: &str) {
        let styled = if self.color {
            msg.red().to_string()
        } else {
            msg.to_string()
        };
        Self::emit(&self.err, &styled);
    }

    fn emit(channel: &Channel, msg: &str) {
        if let Ok(mut w) = channel.lock() {
            let _ = writeln!(w, "{}", msg);
        }
    }
}

#[cfg(test)]
pub(crate) use test_support::TestOutput;
