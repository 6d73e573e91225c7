//! Astrology engine port.
//!
//! Ephemeris work (planet positions, house cusps, aspect detection) is done
//! by an external engine. This port hands it birth data and gets
//! raw records back for the chart normalizer.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::chart::{BirthData, RawAspect, RawSubject};

/// Port for the external astrology engine.
#[async_trait]
pub trait AstrologyEngine: Send + Sync {
    /// Computes placements, lunar node and house cusps for a birth moment.
    ///
    /// # Errors
    ///
    /// - `Location` if the city cannot be resolved
    /// - `Upstream` if the engine rejects the input or faults
    /// - `Transport` / `Timeout` if it cannot be reached
    async fn compute_subject(&self, birth: &BirthData) -> Result<RawSubject, EngineError>;

    /// Lists the subject's aspects in the engine's relevance order.
    async fn relevant_aspects(&self, subject: &RawSubject) -> Result<Vec<RawAspect>, EngineError>;
}

/// Astrology engine failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("location could not be resolved: {0}")]
    Location(String),

    #[error("engine error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("engine timed out after {0}s")]
    Timeout(u64),

    #[error("malformed engine response: {0}")]
    Malformed(String),

    #[error("no astrology engine configured")]
    NotConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn astrology_engine_is_object_safe() {
        fn _accepts_dyn(_engine: &dyn AstrologyEngine) {}
    }

    #[test]
    fn errors_display_their_cause() {
        let err = EngineError::Upstream {
            status: 422,
            message: "ambiguous timezone".to_string(),
        };
        assert_eq!(err.to_string(), "engine error (422): ambiguous timezone");
        assert_eq!(
            EngineError::NotConfigured.to_string(),
            "no astrology engine configured"
        );
    }
}
