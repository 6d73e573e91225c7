//! Service health query.

mod get_health;

pub use get_health::{GetHealthHandler, HealthReport};
