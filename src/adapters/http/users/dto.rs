//! DTOs for user endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{CreateUserCommand, CreateUserResult, UserDebugView};
use crate::domain::chart::{ChartJson, DEFAULT_BIRTH_TIME};
use crate::domain::user::UserRecord;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/create-user`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub birth_date: String,
    #[serde(default = "default_birth_time")]
    pub birth_time: String,
    #[serde(default)]
    pub birth_city: String,
    /// Question id to answer; only string answers count toward the profile.
    #[serde(default)]
    pub quiz_answers: HashMap<String, Value>,
}

fn default_birth_time() -> String {
    DEFAULT_BIRTH_TIME.to_string()
}

impl From<CreateUserRequest> for CreateUserCommand {
    fn from(req: CreateUserRequest) -> Self {
        let quiz_answers = req
            .quiz_answers
            .into_values()
            .filter_map(|answer| match answer {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect();

        CreateUserCommand {
            birth_date: req.birth_date.trim().to_string(),
            birth_time: req.birth_time.trim().to_string(),
            birth_city: req.birth_city.trim().to_string(),
            quiz_answers,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub user_id: String,
    pub chart_data: String,
    pub chart_visual: Option<ChartJson>,
}

impl From<CreateUserResult> for CreateUserResponse {
    fn from(result: CreateUserResult) -> Self {
        Self {
            user_id: result.user_id.to_string(),
            chart_data: result.chart_data,
            chart_visual: result.chart_visual,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDebugResponse {
    pub user: UserRecord,
    pub message_count: usize,
}

impl From<UserDebugView> for UserDebugResponse {
    fn from(view: UserDebugView) -> Self {
        Self {
            user: view.user,
            message_count: view.message_count,
        }
    }
}
