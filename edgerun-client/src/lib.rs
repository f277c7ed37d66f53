//! Edgerun Record Sources
//!
//! Loads execution records for the aggregation engine, either from the
//! control-plane list API or from a JSON file exported from it.
//!
//! # Example
//!
//! ```no_run
//! use edgerun_client::{ApiRecordSource, ControlPlaneClient, RecordSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ControlPlaneClient::new("https://api.cluster.example:6443");
//!     let source = ApiRecordSource::new(client, "edge-pipelines", "tekton.dev/pipeline=aiedge-e2e");
//!
//!     let records = source.list_records().await?;
//!     let registry = edgerun_core::aggregate(&records);
//!     println!("Found {} model(s)", registry.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod file;
mod records;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use file::{FileRecordSource, parse_records};

use async_trait::async_trait;
use edgerun_core::domain::record::ExecutionRecord;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Anything that can produce the raw execution records to aggregate
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every record in scope
    async fn list_records(&self) -> Result<Vec<ExecutionRecord>>;

    /// Short human-readable description, used in logs
    fn describe(&self) -> String;
}

/// HTTP client for the control-plane API
#[derive(Debug, Clone)]
pub struct ControlPlaneClient {
    /// Base URL of the API server (e.g., "https://api.cluster.example:6443")
    base_url: String,
    /// Bearer token sent with every request, if any
    token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl ControlPlaneClient {
    /// Create a new control-plane client
    ///
    /// # Example
    /// ```
    /// use edgerun_client::ControlPlaneClient;
    ///
    /// let client = ControlPlaneClient::new("https://api.cluster.example:6443");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client,
        }
    }

    /// Authenticate requests with a bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL of the API server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

/// Record source backed by the control-plane list API
#[derive(Debug, Clone)]
pub struct ApiRecordSource {
    client: ControlPlaneClient,
    namespace: String,
    label_selector: String,
}

impl ApiRecordSource {
    pub fn new(
        client: ControlPlaneClient,
        namespace: impl Into<String>,
        label_selector: impl Into<String>,
    ) -> Self {
        Self {
            client,
            namespace: namespace.into(),
            label_selector: label_selector.into(),
        }
    }
}

#[async_trait]
impl RecordSource for ApiRecordSource {
    async fn list_records(&self) -> Result<Vec<ExecutionRecord>> {
        self.client
            .list_execution_records(&self.namespace, &self.label_selector)
            .await
    }

    fn describe(&self) -> String {
        format!(
            "{} (namespace {}, selector '{}')",
            self.client.base_url(),
            self.namespace,
            self.label_selector
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ControlPlaneClient::new("https://api.cluster.example:6443");
        assert_eq!(client.base_url(), "https://api.cluster.example:6443");
        assert!(client.token.is_none());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ControlPlaneClient::new("https://api.cluster.example:6443/");
        assert_eq!(client.base_url(), "https://api.cluster.example:6443");
    }

    #[test]
    fn test_client_with_token() {
        let client = ControlPlaneClient::with_client("http://localhost:8001", Client::new())
            .with_token("sha256~abc");
        assert_eq!(client.token.as_deref(), Some("sha256~abc"));
    }

    #[test]
    fn test_api_source_description() {
        let source = ApiRecordSource::new(
            ControlPlaneClient::new("http://localhost:8001"),
            "edge-pipelines",
            "tekton.dev/pipeline=aiedge-e2e",
        );
        assert_eq!(
            source.describe(),
            "http://localhost:8001 (namespace edge-pipelines, selector 'tekton.dev/pipeline=aiedge-e2e')"
        );
    }
}
