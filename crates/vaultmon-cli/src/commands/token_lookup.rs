//! The `token-lookup` check: how long until a token expires?

use chrono::{DateTime, Duration, Utc};
use vaultmon_types::{pretty_duration, Severity, Thresholds};

use super::CheckContext;

/// Resolve the expiry time of the client's own token, or of the token behind
/// the given accessor, and classify the remaining lifetime against the
/// warning/critical thresholds.
pub async fn run(
    ctx: &CheckContext,
    token_accessor: Option<&str>,
    warning: &str,
    critical: &str,
) -> Severity {
    let out = match ctx.outputter() {
        Ok(out) => out,
        Err(e) => {
            ctx.ui.error(&e.to_string());
            return Severity::Undefined;
        }
    };

    // Both thresholds must parse before any query is attempted.
    let thresholds = match Thresholds::parse(warning, critical) {
        Ok(thresholds) => thresholds,
        Err(e) => {
            out.undefined(&e.to_string());
            return Severity::Undefined;
        }
    };

    let client = match ctx.client() {
        Ok(client) => client,
        Err(e) => {
            out.undefined(&e.to_string());
            return Severity::Undefined;
        }
    };

    let lookup = match token_accessor {
        Some(accessor) => client.lookup_token_accessor(accessor).await,
        None => client.lookup_token_self().await,
    };

    let info = match lookup {
        Ok(info) => info,
        Err(e) => {
            out.undefined(&format!("error checking the Vault token: {}", e));
            return Severity::Undefined;
        }
    };

    let expire_raw = match info.expire_time {
        Some(raw) => raw,
        None => {
            out.undefined("Cannot get the expire time of the Vault token");
            return Severity::Undefined;
        }
    };

    let expire_str = match expire_raw.as_str() {
        Some(s) => s,
        None => {
            out.undefined("Could not convert expire_time to a string");
            return Severity::Undefined;
        }
    };

    let expire: DateTime<Utc> = match DateTime::parse_from_rfc3339(expire_str) {
        Ok(t) => t.with_timezone(&Utc),
        Err(e) => {
            out.undefined(&format!("could not parse the expire time: {}", e));
            return Severity::Undefined;
        }
    };

    let delta = expire - Utc::now();
    if delta <= Duration::zero() {
        out.critical("The token has expired!");
        return Severity::Critical;
    }

    let message = format!(
        "The token will expire on {} ({} left)",
        expire.to_rfc2822(),
        pretty_duration(delta)
    );

    let severity = thresholds.classify(delta);
    match severity {
        Severity::Critical => out.critical(&message),
        Severity::Warning => out.warning(&message),
        _ => out.output(&message),
    }

    severity
}
