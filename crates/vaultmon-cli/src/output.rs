//! Severity-tagged message emission.

use vaultmon_types::OutputFormat;

use crate::ui::Ui;

/// Emission helpers for the selected output format.
///
/// The outputter does not decide severities; the command calls whichever of
/// the four emission functions matches the severity it determined, and the
/// outputter supplies the channel and, for the Nagios format, the
/// `vault <SEVERITY> -` prefix.
pub struct Outputter<'a> {
    format: OutputFormat,
    ui: &'a Ui,
}

impl<'a> Outputter<'a> {
    /// Tie an output format to a pair of channels.
    pub fn new(format: OutputFormat, ui: &'a Ui) -> Self {
        Self { format, ui }
    }

    /// Emit an Ok-level message on the normal channel.
    pub fn output(&self, msg: &str) {
        match self.format {
            OutputFormat::Default => self.ui.output(msg),
            OutputFormat::Nagios => self.ui.output(&format!("vault OK - {}", msg)),
        }
    }

    /// Emit a Warning-level message on the error channel.
    pub fn warning(&self, msg: &str) {
        match self.format {
            OutputFormat::Default => self.ui.warn(msg),
            OutputFormat::Nagios => self.ui.warn(&format!("vault WARNING - {}", msg)),
        }
    }

    /// Emit a Critical-level message on the error channel.
    pub fn critical(&self, msg: &str) {
        match self.format {
            OutputFormat::Default => self.ui.error(msg),
            OutputFormat::Nagios => self.ui.error(&format!("vault CRITICAL - {}", msg)),
        }
    }

    /// Emit an Undefined-level message on the error channel.
    pub fn undefined(&self, msg: &str) {
        match self.format {
            OutputFormat::Default => self.ui.error(msg),
            OutputFormat::Nagios => self.ui.error(&format!("vault UNDEFINED - {}", msg)),
        }
    }
}
