//! Chart computation: engine call, normalization, and failure collapse.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::chart::{normalize, BirthData, ChartError, ChartJson};
use crate::ports::{AstrologyEngine, EngineError};

/// A chart ready to store: prompt text plus the frontend visual.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedChart {
    pub text: String,
    pub json: ChartJson,
}

/// The chart could not be produced. Callers fall back to a sample chart.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("chart unavailable: {cause}")]
pub struct ChartUnavailable {
    pub cause: String,
}

#[derive(Debug, Error)]
enum ComputeChartError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// Turns birth data into a normalized chart via the astrology engine.
pub struct ChartService {
    engine: Arc<dyn AstrologyEngine>,
}

impl ChartService {
    pub fn new(engine: Arc<dyn AstrologyEngine>) -> Self {
        Self { engine }
    }

    /// Computes the chart. Every failure becomes [`ChartUnavailable`].
    pub async fn compute_chart(&self, birth: &BirthData) -> Result<ComputedChart, ChartUnavailable> {
        match self.try_compute(birth).await {
            Ok(chart) => {
                info!(
                    subject = %birth.name,
                    chars = chart.text.chars().count(),
                    aspects = chart.json.aspects.len(),
                    "Chart computed"
                );
                Ok(chart)
            }
            Err(err) => {
                warn!(subject = %birth.name, city = %birth.city, error = %err, "Chart computation failed");
                Err(ChartUnavailable {
                    cause: err.to_string(),
                })
            }
        }
    }

    async fn try_compute(&self, birth: &BirthData) -> Result<ComputedChart, ComputeChartError> {
        let subject = self.engine.compute_subject(birth).await?;
        let aspects = self.engine.relevant_aspects(&subject).await?;
        let report = normalize(birth, &subject, &aspects)?;

        Ok(ComputedChart {
            text: report.render_text(),
            json: report.to_json(),
        })
    }
}
