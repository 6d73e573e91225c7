//! CreateUser command handler.
//!
//! Onboards a user: scores the quiz, computes a chart when birth data allows,
//! falls back to the profile's sample chart otherwise, and opens an empty
//! conversation.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::handlers::chart::ChartService;
use crate::domain::chart::{BirthData, ChartJson};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::profile::{map_quiz_to_profile, sample_chart, QuizProfile};
use crate::domain::user::UserRecord;
use crate::ports::{ConversationRepository, UserRepository};

/// Command to create a user.
#[derive(Debug, Clone, Default)]
pub struct CreateUserCommand {
    /// `YYYY-MM-DD`, possibly empty.
    pub birth_date: String,
    /// `HH:MM`.
    pub birth_time: String,
    pub birth_city: String,
    /// Quiz answer values; order does not matter.
    pub quiz_answers: Vec<String>,
}

/// Result of creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserResult {
    pub user_id: UserId,
    pub profile: QuizProfile,
    pub chart_data: String,
    pub chart_visual: Option<ChartJson>,
}

pub struct CreateUserHandler {
    charts: Arc<ChartService>,
    users: Arc<dyn UserRepository>,
    conversations: Arc<dyn ConversationRepository>,
}

impl CreateUserHandler {
    pub fn new(
        charts: Arc<ChartService>,
        users: Arc<dyn UserRepository>,
        conversations: Arc<dyn ConversationRepository>,
    ) -> Self {
        Self {
            charts,
            users,
            conversations,
        }
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<CreateUserResult, DomainError> {
        let user_id = UserId::new();

        if cmd.quiz_answers.is_empty() {
            info!(%user_id, "No quiz answers provided, using default profile");
        }
        let profile = map_quiz_to_profile(cmd.quiz_answers.iter().map(String::as_str));

        // 1. Real chart when date and city are present
        let computed = if !cmd.birth_date.is_empty() && !cmd.birth_city.is_empty() {
            self.try_chart(&user_id, &cmd).await
        } else {
            None
        };

        // 2. Otherwise the profile's sample chart
        let (chart_data, chart_visual) = match computed {
            Some((text, json)) => (text, Some(json)),
            None => {
                info!(%user_id, %profile, "Falling back to sample chart");
                (sample_chart(profile).to_string(), None)
            }
        };

        let record = UserRecord {
            user_id,
            birth_date: cmd.birth_date,
            birth_time: cmd.birth_time,
            birth_city: cmd.birth_city,
            profile,
            chart_data: chart_data.clone(),
            chart_visual: chart_visual.clone(),
            created_at: Timestamp::now(),
        };

        // 3. Persist user and open an empty conversation
        self.users.save(&record).await?;
        self.conversations.start(&user_id).await?;

        info!(
            %user_id,
            %profile,
            computed_chart = record.has_computed_chart(),
            "User created"
        );

        Ok(CreateUserResult {
            user_id,
            profile,
            chart_data,
            chart_visual,
        })
    }

    async fn try_chart(&self, user_id: &UserId, cmd: &CreateUserCommand) -> Option<(String, ChartJson)> {
        let name = format!("User_{}", user_id.short());
        let birth = match BirthData::parse(name, &cmd.birth_date, &cmd.birth_time, cmd.birth_city.as_str()) {
            Ok(birth) => birth,
            Err(err) => {
                warn!(%user_id, error = %err, "Birth data rejected");
                return None;
            }
        };

        self.charts
            .compute_chart(&birth)
            .await
            .ok()
            .map(|chart| (chart.text, chart.json))
    }
}
