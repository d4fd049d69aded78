//! The `get` check: read a KV secret and verify a field is present.

use serde_json::Value;
use vaultmon_client::sanitize_path;
use vaultmon_types::Severity;

use super::CheckContext;

/// Read the secret at `path` and look up `field` in it, whichever KV engine
/// version stored it. A missing secret or field is Critical; missing
/// arguments are Undefined.
pub async fn run(ctx: &CheckContext, field: Option<&str>, path: Option<&str>) -> Severity {
    let out = match ctx.outputter() {
        Ok(out) => out,
        Err(e) => {
            ctx.ui.error(&e.to_string());
            return Severity::Undefined;
        }
    };

    let path = match path {
        Some(path) if !path.is_empty() => sanitize_path(path),
        _ => {
            out.undefined("Not enough arguments (expected a secret path)");
            return Severity::Undefined;
        }
    };

    let field = match field {
        Some(field) if !field.is_empty() => field,
        _ => {
            out.undefined("Missing '--field' flag or empty field set");
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

    let secret = match client.read_secret(path).await {
        Ok(secret) => secret,
        Err(e) => {
            out.undefined(&format!("error reading {}: {}", path, e));
            return Severity::Undefined;
        }
    };

    let secret = match secret {
        Some(secret) => secret,
        None => {
            out.critical(&format!("no data found at {}", path));
            return Severity::Critical;
        }
    };

    match secret.field(field) {
        Some(value) => {
            out.output(&format!("found value: '{}'", render_value(value)));
            Severity::Ok
        }
        None => {
            out.critical(&format!("field '{}' not present in secret", field));
            Severity::Critical
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
