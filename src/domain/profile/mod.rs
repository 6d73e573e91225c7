//! Quiz-based profile matching and the sample charts behind each profile.

mod quiz;
mod sample_charts;

pub use quiz::{map_quiz_to_profile, QuizProfile, UnknownProfile};
pub use sample_charts::sample_chart;
