//! Astrology Engine Adapters.
//!
//! - `HttpAstrologyEngine` - External engine service over HTTP
//! - `MockAstrologyEngine` - Deterministic fixture for tests
//! - `DisabledAstrologyEngine` - Always fails; wired in when no engine is configured

mod disabled_engine;
mod http_engine;
mod mock_engine;

pub use disabled_engine::DisabledAstrologyEngine;
pub use http_engine::HttpAstrologyEngine;
pub use mock_engine::MockAstrologyEngine;
