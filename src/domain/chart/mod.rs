//! Natal chart normalization.
//!
//! Raw engine records go in, a [`ChartReport`] comes out. The report renders
//! the prompt text and the JSON visual; nothing here does I/O.

mod birth;
mod body;
mod emphasis;
mod error;
mod normalizer;
mod placement;
mod position;
mod raw;
mod report;
mod zodiac;

#[cfg(test)]
mod test_support;

pub use birth::{BirthData, DEFAULT_BIRTH_TIME};
pub use body::{Body, UnknownBody};
pub use emphasis::{group_by_house, house_emphasis, HouseEmphasis, HouseGroup, STELLIUM_SIZE};
pub use error::ChartError;
pub use normalizer::{filter_aspects, normalize, MAX_ASPECTS};
pub use placement::{AngularPoint, Aspect, PlanetPlacement};
pub use position::format_position;
pub use raw::{RawAspect, RawPlacement, RawSubject};
pub use report::{AngleJson, AspectJson, ChartJson, ChartReport, NodeJson, PlanetJson};
pub use zodiac::{canonical_house, canonical_sign, house_codes, house_number, sign_symbol, ZodiacSign};
