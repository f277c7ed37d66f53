//! Execution record list endpoint

use edgerun_core::domain::record::ExecutionRecord;
use edgerun_core::dto::record::RecordList;

use crate::ControlPlaneClient;
use crate::error::{ClientError, Result};

/// API group and version serving pipeline runs
const PIPELINE_RUNS_API: &str = "apis/tekton.dev/v1beta1";

impl ControlPlaneClient {
    /// URL of the pipeline run collection in `namespace`
    pub fn records_url(&self, namespace: &str) -> String {
        format!(
            "{}/{}/namespaces/{}/pipelineruns",
            self.base_url, PIPELINE_RUNS_API, namespace
        )
    }

    /// List execution records matching a label selector
    ///
    /// An empty selector lists every pipeline run in the namespace. No
    /// filtering happens client side.
    ///
    /// # Arguments
    /// * `namespace` - Namespace the pipeline runs live in
    /// * `label_selector` - Label selector scoping the list
    pub async fn list_execution_records(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> Result<Vec<ExecutionRecord>> {
        if namespace.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "namespace cannot be empty".to_string(),
            ));
        }

        let url = self.records_url(namespace);
        let mut request = self.get(&url);
        if !label_selector.is_empty() {
            request = request.query(&[("labelSelector", label_selector)]);
        }

        let response = request.send().await?;
        let list: RecordList = self.handle_response(response).await?;

        tracing::info!(
            namespace,
            label_selector,
            count = list.items.len(),
            "Fetched execution records"
        );

        Ok(list.items)
    }
}
