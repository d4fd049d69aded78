//! The `policies` check: are the given policies defined on the server?

use vaultmon_types::Severity;

use super::CheckContext;

/// Verify that every requested policy name appears in the server's active
/// policy list. The first missing policy is Critical; an empty request is an
/// argument error.
pub async fn run(ctx: &CheckContext, names: &[String]) -> Severity {
    let out = match ctx.outputter() {
        Ok(out) => out,
        Err(e) => {
            ctx.ui.error(&e.to_string());
            return Severity::Undefined;
        }
    };

    if names.is_empty() {
        out.undefined("Not enough arguments (expected at least one policy name)");
        return Severity::Undefined;
    }

    let client = match ctx.client() {
        Ok(client) => client,
        Err(e) => {
            out.undefined(&e.to_string());
            return Severity::Undefined;
        }
    };

    let active = match client.list_policies().await {
        Ok(active) => active,
        Err(e) => {
            out.undefined(&format!("error checking policies: {}", e));
            return Severity::Undefined;
        }
    };

    for name in names {
        if !active.iter().any(|policy| policy == name) {
            out.critical(&format!("no such Vault policy: {}", name));
            return Severity::Critical;
        }
    }

    out.output("all the policies are defined");
    Severity::Ok
}
