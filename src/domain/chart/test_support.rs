//! Fixtures shared by the chart unit tests.

use super::birth::BirthData;
use super::raw::{RawAspect, RawPlacement, RawSubject};

fn raw(name: &str, sign: &str, house: &str, position: f64, retrograde: bool) -> RawPlacement {
    RawPlacement {
        name: name.to_string(),
        sign: sign.to_string(),
        house: house.to_string(),
        position,
        abs_pos: position,
        retrograde,
    }
}

pub fn sample_birth() -> BirthData {
    BirthData::parse("User_1234abcd", "1995-03-15", "14:30", "San Francisco")
        .expect("fixture birth data is valid")
}

/// Sun, Mercury and Saturn share the 8th; Uranus and Neptune share the 6th.
pub fn sample_subject() -> RawSubject {
    RawSubject {
        name: "User_1234abcd".to_string(),
        planets: vec![
            raw("Sun", "Pis", "Eighth_House", 24.5, false),
            raw("Moon", "Can", "Twelfth_House", 3.25, false),
            raw("Mercury", "Pis", "Eighth_House", 10.0, false),
            raw("Venus", "Aqu", "Seventh_House", 28.999, false),
            raw("Mars", "Gem", "Eleventh_House", 15.75, true),
            raw("Jupiter", "Sag", "Fifth_House", 1.5, false),
            raw("Saturn", "Pis", "Eighth_House", 5.5, false),
            raw("Uranus", "Cap", "Sixth_House", 29.99, false),
            raw("Neptune", "Cap", "Sixth_House", 25.0, false),
            raw("Pluto", "Sco", "Fourth_House", 2.0, false),
        ],
        true_north_lunar_node: raw("True_Node", "Tau", "Tenth_House", 12.25, true),
        first_house: raw("First_House", "Leo", "", 10.0, false),
        tenth_house: raw("Tenth_House", "Tau", "", 1.5, false),
    }
}

pub fn sample_aspects() -> Vec<RawAspect> {
    vec![
        RawAspect::new("Sun", "conjunction", "Saturn", 1.23),
        RawAspect::new("Sun", "conjunction", "True_Node", 0.1),
        RawAspect::new("Moon", "trine", "Pluto", 0.87),
        RawAspect::new("Mars", "opposition", "Jupiter", 3.0),
        RawAspect::new("First_House", "square", "Mars", 2.2),
        RawAspect::new("Uranus", "semi_sextile", "Neptune", 4.96),
    ]
}
