//! Raw records as reported by the astrology engine, before normalization.

use serde::{Deserialize, Serialize};

/// One point of engine output: a planet, a lunar node, or a house cusp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlacement {
    /// Engine name ("Sun", "True_Node", "First_House", ...).
    pub name: String,
    /// Three-letter sign code ("Ari", "Tau", ...).
    pub sign: String,
    /// Underscored house code ("First_House", ...). Cusps may omit it.
    #[serde(default)]
    pub house: String,
    /// Longitude within the sign, [0, 30).
    pub position: f64,
    /// Absolute ecliptic longitude, [0, 360).
    pub abs_pos: f64,
    #[serde(default)]
    pub retrograde: bool,
}

/// Everything the engine computes for one birth moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSubject {
    pub name: String,
    pub planets: Vec<RawPlacement>,
    pub true_north_lunar_node: RawPlacement,
    /// First-house cusp; its sign is the Ascendant.
    pub first_house: RawPlacement,
    /// Tenth-house cusp; its sign is the Midheaven.
    pub tenth_house: RawPlacement,
}

impl RawSubject {
    /// Finds a planet by engine name.
    pub fn planet(&self, name: &str) -> Option<&RawPlacement> {
        self.planets.iter().find(|p| p.name == name)
    }
}

/// An aspect in the engine's relevance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAspect {
    pub p1_name: String,
    pub p2_name: String,
    /// Aspect code, possibly underscored ("conjunction", "semi_square", ...).
    pub aspect: String,
    /// Orb in degrees.
    pub orbit: f64,
}

impl RawAspect {
    pub fn new(
        p1_name: impl Into<String>,
        aspect: impl Into<String>,
        p2_name: impl Into<String>,
        orbit: f64,
    ) -> Self {
        Self {
            p1_name: p1_name.into(),
            p2_name: p2_name.into(),
            aspect: aspect.into(),
            orbit,
        }
    }
}
