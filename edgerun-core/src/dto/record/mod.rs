//! Record list DTOs

use serde::{Deserialize, Serialize};

use crate::domain::record::ExecutionRecord;

/// List envelope returned by the control-plane list API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordList {
    #[serde(default)]
    pub items: Vec<ExecutionRecord>,
}
