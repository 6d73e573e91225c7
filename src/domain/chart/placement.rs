//! Normalized chart values: placements, angular points and aspects.

use super::body::Body;
use super::position::format_position;
use super::zodiac::{canonical_house, canonical_sign};
use super::raw::RawPlacement;

/// A classical body resolved to display names.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPlacement {
    pub body: Body,
    /// Full sign name ("Aries", ...).
    pub sign: String,
    /// Display position, e.g. `15°42'`.
    pub position: String,
    pub degree_in_sign: f64,
    /// Ordinal house label ("1st", ...).
    pub house: String,
    pub retrograde: bool,
    pub abs_pos: f64,
}

impl PlanetPlacement {
    pub fn from_raw(body: Body, raw: &RawPlacement) -> Self {
        Self {
            body,
            sign: canonical_sign(&raw.sign),
            position: format_position(raw.position),
            degree_in_sign: raw.position,
            house: canonical_house(&raw.house),
            retrograde: raw.retrograde,
            abs_pos: raw.abs_pos,
        }
    }
}

/// North Node, Ascendant or Midheaven.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularPoint {
    pub sign: String,
    pub position: String,
    pub degree_in_sign: f64,
    /// Empty for house cusps the engine reports without a house.
    pub house: String,
    pub abs_pos: f64,
}

impl AngularPoint {
    pub fn from_raw(raw: &RawPlacement) -> Self {
        Self {
            sign: canonical_sign(&raw.sign),
            position: format_position(raw.position),
            degree_in_sign: raw.position,
            house: canonical_house(&raw.house),
            abs_pos: raw.abs_pos,
        }
    }
}

/// An aspect between two classical bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    /// Display aspect name, underscores replaced by spaces.
    pub aspect: String,
    /// Orb in degrees as reported by the engine.
    pub orb: f64,
}

impl Aspect {
    /// Orb with one decimal, as printed in the text report.
    pub fn orb_label(&self) -> String {
        format!("{:.1}", self.orb)
    }

    /// Orb for the JSON visual.
    ///
    /// Parsed back from [`Aspect::orb_label`] so both renderings show the same
    /// digit: `{:.1}` rounds the exact binary value, which `(x * 10.0).round()`
    /// does not.
    pub fn rounded_orb(&self) -> f64 {
        self.orb_label().parse().unwrap_or(self.orb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(sign: &str, house: &str, position: f64) -> RawPlacement {
        RawPlacement {
            name: "Sun".to_string(),
            sign: sign.to_string(),
            house: house.to_string(),
            position,
            abs_pos: position,
            retrograde: false,
        }
    }

    #[test]
    fn placement_resolves_codes_to_display_names() {
        let p = PlanetPlacement::from_raw(Body::Sun, &raw("Pis", "Eighth_House", 24.5));
        assert_eq!(p.sign, "Pisces");
        assert_eq!(p.house, "8th");
        assert_eq!(p.position, "24°30'");
        assert_eq!(p.degree_in_sign, 24.5);
    }

    #[test]
    fn unknown_codes_pass_through() {
        let p = PlanetPlacement::from_raw(Body::Moon, &raw("Oph", "Thirteenth_House", 1.0));
        assert_eq!(p.sign, "Oph");
        assert_eq!(p.house, "Thirteenth_House");
    }

    #[test]
    fn cusp_without_house_has_empty_house() {
        let p = AngularPoint::from_raw(&raw("Leo", "", 10.1));
        assert_eq!(p.sign, "Leo");
        assert_eq!(p.house, "");
    }

    #[test]
    fn rounded_orb_agrees_with_text_rendering() {
        for orb in [0.0, 0.04, 0.05, 0.25, 1.149, 2.96, 7.75] {
            let a = Aspect {
                body_a: Body::Sun,
                body_b: Body::Moon,
                aspect: "trine".to_string(),
                orb,
            };
            assert_eq!(format!("{:.1}", a.rounded_orb()), a.orb_label());
        }
    }
}
