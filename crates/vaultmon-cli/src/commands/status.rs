//! The `status` check: is the Vault server sealed?

use vaultmon_types::Severity;

use super::CheckContext;

/// Query the seal status and classify it.
///
/// Sealed is Critical; unsealed is Ok. Anything that prevents the question
/// from being answered is Undefined.
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
            "Vault is sealed! Unseal Progress: {}/{}",
            status.progress, status.t
        ));
        return Severity::Critical;
    }

    out.output("Vault is unsealed");
    Severity::Ok
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;
    use vaultmon_types::Severity;

    use super::run;
    use crate::commands::test_support::test_context;

    #[tokio::test]
    async fn unsealed_is_ok() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/sys/seal-status");
            then.status(200).json_body(json!({
                "sealed": false, "t": 3, "progress": 0,
                "cluster_name": "vault-cluster-test"
            }));
        });

        let (ctx, output) = test_context(&server.base_url(), "default");
        let severity = run(&ctx).await;

        mock.assert();
        assert_eq!(severity, Severity::Ok);
        assert!(output.combined().contains("Vault is unsealed"));
    }

    #[tokio::test]
    async fn sealed_is_critical_with_progress_counters() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/sys/seal-status");
            then.status(200).json_body(json!({
                "sealed": true, "t": 3, "progress": 1,
                "cluster_name": "vault-cluster-test"
            }));
        });

        let (ctx, output) = test_context(&server.base_url(), "default");
        let severity = run(&ctx).await;

        assert_eq!(severity, Severity::Critical);
        assert!(output
            .combined()
            .contains("Vault is sealed! Unseal Progress: 1/3"));
    }

    #[tokio::test]
    async fn communication_failure_is_undefined() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/sys/seal-status");
            then.status(500).body("internal error");
        });

        let (ctx, output) = test_context(&server.base_url(), "default");
        let severity = run(&ctx).await;

        assert_eq!(severity, Severity::Undefined);
        assert!(output.combined().contains("error checking seal status:"));
    }

    #[tokio::test]
    async fn nagios_format_tags_the_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/sys/seal-status");
            then.status(200).json_body(json!({
                "sealed": false, "t": 3, "progress": 0,
                "cluster_name": "vault-cluster-test"
            }));
        });

        let (ctx, output) = test_context(&server.base_url(), "nagios");
        let severity = run(&ctx).await;

        assert_eq!(severity, Severity::Ok);
        assert_eq!(output.stdout(), "vault OK - Vault is unsealed\n");
    }

    #[tokio::test]
    async fn unknown_output_format_fails_before_any_query() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/sys/seal-status");
            then.status(200).json_body(json!({ "sealed": false }));
        });

        let (ctx, output) = test_context(&server.base_url(), "bogus");
        let severity = run(&ctx).await;

        assert_eq!(severity, Severity::Undefined);
        assert_eq!(mock.calls(), 0);
        assert!(output.combined().contains("Unknown output format: bogus"));
    }
}
