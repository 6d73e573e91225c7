use thiserror::Error;

use super::body::Body;

/// Engine output that cannot be turned into a chart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("engine output is missing {0}")]
    MissingBody(Body),
}
