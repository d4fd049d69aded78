//! Vault REST client implementation.

use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;
use vaultmon_types::{MonitorError, Result};

/// Well-known default address of a local Vault server.
pub const DEFAULT_VAULT_ADDR: &str = "https://127.0.0.1:8200";

/// Strip leading and trailing separators from a secret path before it is
/// used as a server-side key.
pub fn sanitize_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Vault client configuration.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Vault base URL
    pub address: String,
    /// Vault token, sent as the `X-Vault-Token` header when present
    pub token: Option<String>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_VAULT_ADDR.to_string(),
            token: None,
        }
    }
}

/// Seal status of a Vault server, from `sys/seal-status`.
#[derive(Debug, Clone, Deserialize)]
pub struct SealStatus {
    /// Whether the server is sealed
    pub sealed: bool,
    /// Number of unseal key shares required
    #[serde(default)]
    pub t: u64,
    /// Number of unseal key shares already provided
    #[serde(default)]
    pub progress: u64,
    /// Name of the cluster the server belongs to
    #[serde(default)]
    pub cluster_name: String,
}

/// HA leadership status of a Vault server, from `sys/leader`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderStatus {
    /// Whether HA mode is enabled
    #[serde(default)]
    pub ha_enabled: bool,
    /// Whether the queried node is the active leader
    #[serde(default)]
    pub is_self: bool,
    /// Address of the active node, empty when unknown
    #[serde(default)]
    pub leader_address: String,
}

/// Token metadata from `auth/token/lookup-self` or `lookup-accessor`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfo {
    /// Expiration timestamp (RFC 3339); absent or null for non-expiring tokens
    #[serde(default)]
    pub expire_time: Option<Value>,
    /// Display name assigned to the token
    #[serde(default)]
    pub display_name: String,
}

/// A KV secret payload, decoded into the engine version it came from.
///
/// The KV v2 engine nests the secret payload under a `data` sub-object next
/// to its metadata; v1 stores the payload flat. Decoding picks the variant up
/// front so commands never inspect response shapes themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum KvSecret {
    /// KV v2 payload (nested under `data`)
    V2 {
        /// The secret's key/value pairs
        data: Map<String, Value>,
    },
    /// KV v1 payload (flat)
    V1(Map<String, Value>),
}

impl KvSecret {
    /// Decode a raw response payload into the matching engine variant.
    pub fn from_payload(mut payload: Map<String, Value>) -> Self {
        match payload.remove("data") {
            Some(Value::Object(data)) => KvSecret::V2 { data },
            Some(other) => {
                payload.insert("data".to_string(), other);
                KvSecret::V1(payload)
            }
            None => KvSecret::V1(payload),
        }
    }

    /// Look up a field in the secret, whichever variant it is.
    ///
    /// A JSON null value counts as absent.
    pub fn field(&self, name: &str) -> Option<&Value> {
        let data = match self {
            KvSecret::V2 { data } => data,
            KvSecret::V1(data) => data,
        };
        match data.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }
}

/// Client for the read-only Vault endpoints the monitoring checks use.
#[derive(Debug, Clone)]
pub struct VaultClient {
    config: VaultConfig,
    http: Client,
    base_url: Url,
}

impl VaultClient {
    /// Create a new Vault client for the given configuration.
    pub fn new(config: VaultConfig) -> Result<Self> {
        let base_url = Url::parse(&config.address).map_err(|e| {
            MonitorError::Config(format!("invalid Vault address '{}': {}", config.address, e))
        })?;

        let http = Client::builder()
            .build()
            .map_err(|e| MonitorError::Vault(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http,
            base_url,
        })
    }

    /// The base address this client talks to.
    pub fn address(&self) -> &str {
        &self.config.address
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<reqwest::Response> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| MonitorError::Vault(format!("invalid request path '{}': {}", path, e)))?;

        debug!(%method, %url, "sending Vault API request");

        let mut req = self.http.request(method, url);
        if let Some(token) = &self.config.token {
            req = req.header("X-Vault-Token", token);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        req.send()
            .await
            .map_err(|e| MonitorError::Vault(e.to_string()))
    }

    async fn request<T: for<'de> Deserialize<'de>>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let resp = self.send(method, path, body).await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(MonitorError::Vault(format!(
                "Vault request failed ({}): {}",
                status, text
            )));
        }

        resp.json()
            .await
            .map_err(|e| MonitorError::Vault(format!("failed to parse response: {}", e)))
    }

    /// Fetch the seal status of the server.
    pub async fn seal_status(&self) -> Result<SealStatus> {
        self.request(Method::GET, "/v1/sys/seal-status", None).await
    }

    /// Fetch the HA leadership status of the server.
    pub async fn leader(&self) -> Result<LeaderStatus> {
        self.request(Method::GET, "/v1/sys/leader", None).await
    }

    /// List the names of the policies currently defined on the server.
    pub async fn list_policies(&self) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        struct PolicyList {
            policies: Vec<String>,
        }

        let list: PolicyList = self.request(Method::GET, "/v1/sys/policy", None).await?;
        Ok(list.policies)
    }

    /// Read a secret from the KV store.
    ///
    /// Returns `Ok(None)` when the server answers authoritatively that no
    /// secret exists at the path, as opposed to a transport failure.
    pub async fn read_secret(&self, path: &str) -> Result<Option<KvSecret>> {
        let path = sanitize_path(path);
        let resp = self.send(Method::GET, &format!("/v1/{}", path), None).await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let text = resp
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(MonitorError::Vault(format!(
                "Vault request failed ({}): {}",
                status, text
            )));
        }

        #[derive(Deserialize)]
        struct Envelope {
            data: Map<String, Value>,
        }

        let envelope: Envelope = resp
            .json()
            .await
            .map_err(|e| MonitorError::Vault(format!("failed to parse response: {}", e)))?;

        Ok(Some(KvSecret::from_payload(envelope.data)))
    }

    /// Look up the metadata of the token this client authenticates with.
    pub async fn lookup_token_self(&self) -> Result<TokenInfo> {
        #[derive(Deserialize)]
        struct Envelope {
            data: TokenInfo,
        }

        let envelope: Envelope = self
            .request(Method::GET, "/v1/auth/token/lookup-self", None)
            .await?;
        Ok(envelope.data)
    }

    /// Look up token metadata through its accessor, without holding the token.
    pub async fn lookup_token_accessor(&self, accessor: &str) -> Result<TokenInfo> {
        #[derive(Deserialize)]
        struct Envelope {
            data: TokenInfo,
        }

        let body = serde_json::json!({ "accessor": accessor });
        let envelope: Envelope = self
            .request(Method::POST, "/v1/auth/token/lookup-accessor", Some(body))
            .await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_client(server: &MockServer) -> VaultClient {
        VaultClient::new(VaultConfig {
            address: server.base_url(),
            token: Some("test-token".to_string()),
        })
        .unwrap()
    }

    #[test]
    fn sanitize_path_strips_separators() {
        assert_eq!(sanitize_path("/secret/test/"), "secret/test");
        assert_eq!(sanitize_path("secret/test"), "secret/test");
        assert_eq!(sanitize_path("//secret//"), "secret");
    }

    #[test]
    fn invalid_address_is_a_config_error() {
        let err = VaultClient::new(VaultConfig {
            address: "not a url".to_string(),
            token: None,
        })
        .unwrap_err();
        assert!(matches!(err, MonitorError::Config(_)));
    }

    #[test]
    fn kv_payloads_decode_into_the_right_variant() {
        let v2 = serde_json::from_value::<Map<String, Value>>(json!({
            "data": { "foo": "bar" },
            "metadata": { "version": 3 }
        }))
        .unwrap();
        let secret = KvSecret::from_payload(v2);
        assert!(matches!(secret, KvSecret::V2 { .. }));
        assert_eq!(secret.field("foo").and_then(Value::as_str), Some("bar"));
        assert!(secret.field("missing").is_none());

        let v1 = serde_json::from_value::<Map<String, Value>>(json!({
            "foo": "bar"
        }))
        .unwrap();
        let secret = KvSecret::from_payload(v1);
        assert!(matches!(secret, KvSecret::V1(_)));
        assert_eq!(secret.field("foo").and_then(Value::as_str), Some("bar"));
    }

    #[test]
    fn null_fields_count_as_absent() {
        let payload = serde_json::from_value::<Map<String, Value>>(json!({
            "data": { "foo": null }
        }))
        .unwrap();
        let secret = KvSecret::from_payload(payload);
        assert!(secret.field("foo").is_none());
    }

    #[tokio::test]
    async fn seal_status_decodes() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/sys/seal-status");
            then.status(200).json_body(json!({
                "sealed": true,
                "t": 3,
                "progress": 1,
                "cluster_name": "vault-cluster-test"
            }));
        });

        let status = test_client(&server).seal_status().await.unwrap();

        mock.assert();
        assert!(status.sealed);
        assert_eq!(status.t, 3);
        assert_eq!(status.progress, 1);
        assert_eq!(status.cluster_name, "vault-cluster-test");
    }

    #[tokio::test]
    async fn server_errors_surface_as_vault_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/sys/seal-status");
            then.status(500).body("internal error");
        });

        let err = test_client(&server).seal_status().await.unwrap_err();
        assert!(matches!(err, MonitorError::Vault(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn read_secret_sends_the_token_and_sanitizes_the_path() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/secret/test")
                .header("X-Vault-Token", "test-token");
            then.status(200).json_body(json!({
                "data": { "foo": "bar" }
            }));
        });

        let secret = test_client(&server)
            .read_secret("/secret/test/")
            .await
            .unwrap()
            .unwrap();

        mock.assert();
        assert_eq!(secret.field("foo").and_then(Value::as_str), Some("bar"));
    }

    #[tokio::test]
    async fn read_secret_maps_404_to_none() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/secret/missing");
            then.status(404).json_body(json!({ "errors": [] }));
        });

        let secret = test_client(&server).read_secret("secret/missing").await.unwrap();
        assert!(secret.is_none());
    }

    #[tokio::test]
    async fn list_policies_decodes_names() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/sys/policy");
            then.status(200).json_body(json!({
                "policies": ["default", "root"]
            }));
        });

        let policies = test_client(&server).list_policies().await.unwrap();
        assert_eq!(policies, vec!["default", "root"]);
    }

    #[tokio::test]
    async fn token_lookup_by_accessor_posts_the_accessor() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/auth/token/lookup-accessor")
                .json_body(json!({ "accessor": "8609694a-cdbc" }));
            then.status(200).json_body(json!({
                "data": {
                    "display_name": "monitor",
                    "expire_time": "2026-09-25T10:00:00.000000000Z"
                }
            }));
        });

        let info = test_client(&server)
            .lookup_token_accessor("8609694a-cdbc")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(info.display_name, "monitor");
        assert!(info.expire_time.is_some());
    }

    #[tokio::test]
    async fn token_lookup_without_expiry_yields_none() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/auth/token/lookup-self");
            then.status(200).json_body(json!({
                "data": { "display_name": "root", "expire_time": null }
            }));
        });

        let info = test_client(&server).lookup_token_self().await.unwrap();
        assert!(info.expire_time.is_none());
    }
}
