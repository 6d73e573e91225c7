//! Stand-in used when no engine URL is configured.

use async_trait::async_trait;

use crate::domain::chart::{BirthData, RawAspect, RawSubject};
use crate::ports::{AstrologyEngine, EngineError};

/// Fails every call with [`EngineError::NotConfigured`], so users get a
/// sample chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAstrologyEngine;

#[async_trait]
impl AstrologyEngine for DisabledAstrologyEngine {
    async fn compute_subject(&self, _birth: &BirthData) -> Result<RawSubject, EngineError> {
        Err(EngineError::NotConfigured)
    }

    async fn relevant_aspects(&self, _subject: &RawSubject) -> Result<Vec<RawAspect>, EngineError> {
        Err(EngineError::NotConfigured)
    }
}
