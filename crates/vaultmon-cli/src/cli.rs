//! CLI structure and command definitions.

use clap::{Args, Parser, Subcommand};
use vaultmon_client::DEFAULT_VAULT_ADDR;
use vaultmon_types::{DEFAULT_CRITICAL_TOKEN_EXPIRATION, DEFAULT_WARNING_TOKEN_EXPIRATION};

#[derive(Parser)]
#[command(name = "vaultmon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Nagios-compatible monitoring checks for HashiCorp Vault", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every monitoring check.
#[derive(Args, Debug, Clone)]
pub struct BaseOpts {
    /// Address of the Vault server
    #[arg(long, env = "VAULT_ADDR", default_value = DEFAULT_VAULT_ADDR)]
    pub address: String,

    /// Token used to authenticate against Vault
    #[arg(long, env = "VAULT_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    /// Output format ('default' or 'nagios')
    #[arg(long, default_value = "default")]
    pub output: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report whether the Vault server is sealed
    Status {
        #[command(flatten)]
        opts: BaseOpts,
    },

    /// Report the HA cluster status of the Vault server
    #[command(name = "hastatus")]
    HaStatus {
        #[command(flatten)]
        opts: BaseOpts,
    },

    /// Check that the given policies are defined on the server
    Policies {
        #[command(flatten)]
        opts: BaseOpts,

        /// Policy names that must all be defined
        names: Vec<String>,
    },

    /// Read a secret from the KV store and check one of its fields
    Get {
        #[command(flatten)]
        opts: BaseOpts,

        /// Field to extract from the secret
        #[arg(long)]
        field: Option<String>,

        /// Path of the secret (e.g. secret/test)
        path: Option<String>,
    },

    /// Check the expiration time of a Vault token
    #[command(name = "token-lookup")]
    TokenLookup {
        #[command(flatten)]
        opts: BaseOpts,

        /// Token accessor to look up instead of the client's own token
        #[arg(long)]
        token_accessor: Option<String>,

        /// Warning threshold for the remaining token lifetime
        #[arg(long, default_value = DEFAULT_WARNING_TOKEN_EXPIRATION)]
        warning: String,

        /// Critical threshold for the remaining token lifetime
        #[arg(long, default_value = DEFAULT_CRITICAL_TOKEN_EXPIRATION)]
        critical: String,
    },
}

impl Cli {
    /// Dispatch the parsed subcommand and return its process exit code.
    pub async fn execute(self) -> i32 {
        use crate::commands::*;

        let severity = match self.command {
            Commands::Status { opts } => {
                let ctx = CheckContext::new(opts);
                status::run(&ctx).await
            }
            Commands::HaStatus { opts } => {
                let ctx = CheckContext::new(opts);
                hastatus::run(&ctx).await
            }
            Commands::Policies { opts, names } => {
                let ctx = CheckContext::new(opts);
                policies::run(&ctx, &names).await
            }
            Commands::Get { opts, field, path } => {
                let ctx = CheckContext::new(opts);
                get::run(&ctx, field.as_deref(), path.as_deref()).await
            }
            Commands::TokenLookup {
                opts,
                token_accessor,
                warning,
                critical,
            } => {
                let ctx = CheckContext::new(opts);
                token_lookup::run(&ctx, token_accessor.as_deref(), &warning, &critical).await
            }
        };

        severity.exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_subcommands_fail_to_parse() {
        assert!(Cli::try_parse_from(["vaultmon", "frobnicate"]).is_err());
    }

    #[test]
    fn no_subcommand_fails_to_parse() {
        assert!(Cli::try_parse_from(["vaultmon"]).is_err());
    }

    #[test]
    fn status_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["vaultmon", "status", "extra"]).is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "vaultmon",
            "status",
            "--address",
            "https://vault.example.com:8200",
            "--output",
            "nagios",
        ])
        .unwrap();

        match cli.command {
            Commands::Status { opts } => {
                assert_eq!(opts.address, "https://vault.example.com:8200");
                assert_eq!(opts.output, "nagios");
            }
            _ => panic!("expected the status command"),
        }
    }

    #[test]
    fn token_lookup_carries_threshold_defaults() {
        let cli = Cli::try_parse_from(["vaultmon", "token-lookup"]).unwrap();

        match cli.command {
            Commands::TokenLookup {
                warning, critical, ..
            } => {
                assert_eq!(warning, "168h");
                assert_eq!(critical, "72h");
            }
            _ => panic!("expected the token-lookup command"),
        }
    }
}
