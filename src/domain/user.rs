//! The onboarded user and the chart they chat against.

use serde::{Deserialize, Serialize};

use super::chart::ChartJson;
use super::foundation::{Timestamp, UserId};
use super::profile::QuizProfile;

/// Everything kept about a user for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: UserId,
    /// Birth date as submitted, possibly empty.
    pub birth_date: String,
    pub birth_time: String,
    pub birth_city: String,
    pub profile: QuizProfile,
    /// Chart text used as chat context, computed or sampled.
    pub chart_data: String,
    /// Present only when the chart was computed.
    pub chart_visual: Option<ChartJson>,
    pub created_at: Timestamp,
}

impl UserRecord {
    /// Whether the chart came from the engine rather than a sample.
    pub fn has_computed_chart(&self) -> bool {
        self.chart_visual.is_some()
    }
}
