//! The ten classical bodies a natal chart reports on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A classical chart body.
///
/// Declaration order is the canonical reporting order and drives both the
/// placement listing and house-emphasis grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// All bodies in canonical order.
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Display name as reported by the engine ("Sun", "Moon", ...).
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// Astronomical glyph.
    pub fn symbol(&self) -> &'static str {
        match self {
            Body::Sun => "\u{2609}",
            Body::Moon => "\u{263d}",
            Body::Mercury => "\u{263f}",
            Body::Venus => "\u{2640}",
            Body::Mars => "\u{2642}",
            Body::Jupiter => "\u{2643}",
            Body::Saturn => "\u{2644}",
            Body::Uranus => "\u{2645}",
            Body::Neptune => "\u{2646}",
            Body::Pluto => "\u{2647}",
        }
    }

    /// Short keyword phrase shown next to the placement in the chart view.
    pub fn meaning(&self) -> &'static str {
        match self {
            Body::Sun => "Core identity & ego",
            Body::Moon => "Emotions & inner self",
            Body::Mercury => "Communication & thinking",
            Body::Venus => "Love & values",
            Body::Mars => "Drive & action",
            Body::Jupiter => "Growth & expansion",
            Body::Saturn => "Discipline & lessons",
            Body::Uranus => "Change & innovation",
            Body::Neptune => "Dreams & intuition",
            Body::Pluto => "Transformation & power",
        }
    }

    /// Resolves an engine-reported name. Case-sensitive, like the engine output.
    pub fn from_name(name: &str) -> Option<Body> {
        Body::ALL.iter().copied().find(|b| b.name() == name)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name does not denote a classical body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a classical body: {0}")]
pub struct UnknownBody(pub String);

impl FromStr for Body {
    type Err = UnknownBody;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::from_name(s).ok_or_else(|| UnknownBody(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_starts_with_luminaries() {
        assert_eq!(Body::ALL[0], Body::Sun);
        assert_eq!(Body::ALL[1], Body::Moon);
        assert_eq!(Body::ALL[9], Body::Pluto);
    }

    #[test]
    fn from_name_round_trips_every_body() {
        for body in Body::ALL {
            assert_eq!(Body::from_name(body.name()), Some(body));
        }
    }

    #[test]
    fn from_name_rejects_points_and_angles() {
        assert_eq!(Body::from_name("True_Node"), None);
        assert_eq!(Body::from_name("Mean_Node"), None);
        assert_eq!(Body::from_name("Ascendant"), None);
        assert_eq!(Body::from_name("Chiron"), None);
        assert_eq!(Body::from_name("sun"), None);
    }

    #[test]
    fn parse_reports_unknown_name() {
        let err = "Lilith".parse::<Body>().unwrap_err();
        assert_eq!(err.to_string(), "not a classical body: Lilith");
    }

    #[test]
    fn symbols_are_distinct() {
        let mut symbols: Vec<_> = Body::ALL.iter().map(|b| b.symbol()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), 10);
    }
}
