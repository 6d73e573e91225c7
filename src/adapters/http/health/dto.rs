//! DTOs for the health endpoint.

use serde::{Deserialize, Serialize};

use crate::application::HealthReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub total_users: usize,
    pub active_conversations: usize,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: report.timestamp.to_rfc3339(),
            total_users: report.total_users,
            active_conversations: report.active_conversations,
        }
    }
}
