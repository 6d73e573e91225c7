//! House emphasis derived from where the classical bodies fall.

use std::fmt;

use super::body::Body;
use super::placement::PlanetPlacement;

/// Minimum number of bodies sharing a house for a stellium.
pub const STELLIUM_SIZE: usize = 3;

/// The bodies occupying one house, in canonical body order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseGroup {
    /// Ordinal house label ("8th", ...).
    pub house: String,
    pub bodies: Vec<Body>,
}

impl HouseGroup {
    pub fn is_stellium(&self) -> bool {
        self.bodies.len() >= STELLIUM_SIZE
    }

    pub fn is_focus_area(&self) -> bool {
        self.bodies.len() == 2
    }

    fn body_list(&self) -> String {
        self.bodies
            .iter()
            .map(Body::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// An annotation line of the HOUSE EMPHASIS block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HouseEmphasis {
    Stellium(HouseGroup),
    FocusArea(HouseGroup),
}

impl HouseEmphasis {
    pub fn group(&self) -> &HouseGroup {
        match self {
            HouseEmphasis::Stellium(g) | HouseEmphasis::FocusArea(g) => g,
        }
    }
}

impl fmt::Display for HouseEmphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HouseEmphasis::Stellium(g) => write!(
                f,
                "- Stellium in {} House ({}): Multiple planets concentrate energy here",
                g.house,
                g.body_list()
            ),
            HouseEmphasis::FocusArea(g) => write!(
                f,
                "- {} House ({}): Significant focus area",
                g.house,
                g.body_list()
            ),
        }
    }
}

/// Groups placements by house, in order of first encounter.
pub fn group_by_house(placements: &[PlanetPlacement]) -> Vec<HouseGroup> {
    let mut groups: Vec<HouseGroup> = Vec::new();
    for placement in placements {
        match groups.iter_mut().find(|g| g.house == placement.house) {
            Some(group) => group.bodies.push(placement.body),
            None => groups.push(HouseGroup {
                house: placement.house.clone(),
                bodies: vec![placement.body],
            }),
        }
    }
    groups
}

/// Stelliums first, then two-body focus areas. Single occupants are dropped.
pub fn house_emphasis(groups: &[HouseGroup]) -> Vec<HouseEmphasis> {
    let stelliums = groups
        .iter()
        .filter(|g| g.is_stellium())
        .cloned()
        .map(HouseEmphasis::Stellium);
    let focus = groups
        .iter()
        .filter(|g| g.is_focus_area())
        .cloned()
        .map(HouseEmphasis::FocusArea);
    stelliums.chain(focus).collect()
}
