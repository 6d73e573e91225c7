//! Chart application service.

mod compute_chart;

pub use compute_chart::{ChartService, ChartUnavailable, ComputedChart};
