//! Deterministic astrology engine for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::chart::{BirthData, RawAspect, RawSubject};
use crate::ports::{AstrologyEngine, EngineError};

/// Returns a fixed subject and aspect list, or a fixed error.
#[derive(Debug, Clone)]
pub struct MockAstrologyEngine {
    outcome: Result<(RawSubject, Vec<RawAspect>), EngineError>,
    requests: Arc<Mutex<Vec<BirthData>>>,
}

impl MockAstrologyEngine {
    /// Engine answering every request with `subject` and `aspects`.
    ///
    /// The subject name is replaced with the requested one.
    pub fn new(subject: RawSubject, aspects: Vec<RawAspect>) -> Self {
        Self {
            outcome: Ok((subject, aspects)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Engine failing every request with `error`.
    pub fn failing(error: EngineError) -> Self {
        Self {
            outcome: Err(error),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Birth data received so far.
    pub fn requests(&self) -> Vec<BirthData> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl AstrologyEngine for MockAstrologyEngine {
    async fn compute_subject(&self, birth: &BirthData) -> Result<RawSubject, EngineError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(birth.clone());

        let (subject, _) = self.outcome.clone()?;
        Ok(RawSubject {
            name: birth.name.clone(),
            ..subject
        })
    }

    async fn relevant_aspects(&self, _subject: &RawSubject) -> Result<Vec<RawAspect>, EngineError> {
        let (_, aspects) = self.outcome.clone()?;
        Ok(aspects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::RawPlacement;

    fn point(name: &str) -> RawPlacement {
        RawPlacement {
            name: name.to_string(),
            sign: "Ari".to_string(),
            house: "First_House".to_string(),
            position: 1.0,
            abs_pos: 1.0,
            retrograde: false,
        }
    }

    fn subject() -> RawSubject {
        RawSubject {
            name: "fixture".to_string(),
            planets: vec![point("Sun")],
            true_north_lunar_node: point("True_Node"),
            first_house: point("First_House"),
            tenth_house: point("Tenth_House"),
        }
    }

    #[tokio::test]
    async fn answers_with_fixture_under_requested_name() {
        let engine = MockAstrologyEngine::new(
            subject(),
            vec![RawAspect::new("Sun", "trine", "Moon", 1.0)],
        );
        let birth = BirthData::parse("User_1", "1990-01-01", "00:00", "Lisbon").unwrap();

        let raw = engine.compute_subject(&birth).await.unwrap();
        assert_eq!(raw.name, "User_1");
        assert_eq!(engine.relevant_aspects(&raw).await.unwrap().len(), 1);
        assert_eq!(engine.requests(), vec![birth]);
    }

    #[tokio::test]
    async fn failing_engine_fails_both_calls() {
        let engine = MockAstrologyEngine::failing(EngineError::Location("Atlantis".to_string()));
        let birth = BirthData::parse("x", "1990-01-01", "00:00", "Atlantis").unwrap();

        assert!(engine.compute_subject(&birth).await.is_err());
        assert!(engine.relevant_aspects(&subject()).await.is_err());
    }
}
