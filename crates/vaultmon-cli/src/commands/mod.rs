//! Monitoring check implementations.
//!
//! Every check follows the same sequence: validate its arguments, obtain the
//! shared client, perform exactly one read against the Vault server, classify
//! the result into a severity and emit exactly one message through the
//! selected outputter.

pub mod get;
pub mod hastatus;
pub mod policies;
pub mod status;
pub mod token_lookup;

use once_cell::sync::OnceCell;
use vaultmon_client::{VaultClient, VaultConfig};
use vaultmon_types::{OutputFormat, Result};

use crate::cli::BaseOpts;
use crate::output::Outputter;
use crate::ui::Ui;

/// Shared per-invocation state for a monitoring check: the resolved common
/// options, the output channels and the lazily constructed Vault client.
pub struct CheckContext {
    /// Common options resolved from flags, environment and defaults
    pub opts: BaseOpts,
    /// The check's output channels
    pub ui: Ui,
    client: OnceCell<VaultClient>,
}

impl CheckContext {
    /// Build a context bound to the process stdout/stderr.
    pub fn new(opts: BaseOpts) -> Self {
        Self {
            opts,
            ui: Ui::stdio(),
            client: OnceCell::new(),
        }
    }

    /// The Vault client for this invocation.
    ///
    /// Built on first call from the resolved options; every later call
    /// returns the same handle. Construction failures are configuration
    /// problems, distinct from the monitored fact being in a bad state.
    pub fn client(&self) -> Result<&VaultClient> {
        self.client.get_or_try_init(|| {
            let mut config = VaultConfig::default();
            if !self.opts.address.is_empty() {
                config.address = self.opts.address.clone();
            }
            if !self.opts.token.is_empty() {
                config.token = Some(self.opts.token.clone());
            }
            VaultClient::new(config)
        })
    }

    /// Select the outputter for the configured format.
    ///
    /// An unknown format name is a configuration error; no query is
    /// performed in that case.
    pub fn outputter(&self) -> Result<Outputter<'_>> {
        let format: OutputFormat = self.opts.output.parse()?;
        Ok(Outputter::new(format, &self.ui))
    }
}
