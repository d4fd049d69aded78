//! The `hastatus` check: HA cluster membership and leadership.

use vaultmon_types::Severity;

use super::CheckContext;

/// Query seal and leader status and classify the node's HA state.
///
/// A sealed server or a server without HA enabled is Critical. An active
/// node, or a standby that knows the leader address, is Ok. A standby that
/// cannot name the active node is Warning.
pub async fn run(ctx: &CheckContext) -> Severity {
    let out = match ctx.outputter() {
        Ok(out) => out,
        Err(e) => {
            ctx.ui.error(&e.to_string());
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

    let status = match client.seal_status().await {
        Ok(status) => status,
        Err(e) => {
            out.undefined(&format!("error checking seal status: {}", e));
            return Severity::Undefined;
        }
    };

    if status.sealed {
        out.critical(&format!(
            "Vault ({}) is sealed! Unseal Progress: {}/{}",
            status.cluster_name, status.progress, status.t
        ));
        return Severity::Critical;
    }

    let leader = match client.leader().await {
        Ok(leader) => leader,
        Err(e) => {
            out.undefined(&format!("error checking leader status: {}", e));
            return Severity::Undefined;
        }
    };

    if !leader.ha_enabled {
        out.critical(&format!("Vault HA ({}) is not enabled", status.cluster_name));
        return Severity::Critical;
    }

    let mut severity = Severity::Ok;
    let mode = if leader.is_self {
        "Active Node".to_string()
    } else {
        let address = if leader.leader_address.is_empty() {
            severity = Severity::Warning;
            "<none>".to_string()
        } else {
            leader.leader_address.clone()
        };
        format!("Standby Node (Active Node Address: {})", address)
    };

    let message = format!("Vault HA ({}) is enabled, {}", status.cluster_name, mode);
    match severity {
        Severity::Warning => out.warning(&message),
        _ => out.output(&message),
    }

    severity
}
