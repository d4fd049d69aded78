//! # Vaultmon Client
//!
//! Async HashiCorp Vault REST client used by the vaultmon monitoring checks.
//!
//! The client covers exactly the read-only endpoints the checks need:
//! seal status, HA leader status, active policies, KV secret reads and
//! token introspection. Everything else about the Vault API is out of scope.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod vault;

pub use vault::{
    sanitize_path, KvSecret, LeaderStatus, SealStatus, TokenInfo, VaultClient, VaultConfig,
    DEFAULT_VAULT_ADDR,
};
