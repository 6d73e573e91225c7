//! Turns raw engine output into a [`ChartReport`].

use tracing::debug;

use super::birth::BirthData;
use super::body::Body;
use super::emphasis::group_by_house;
use super::error::ChartError;
use super::placement::{AngularPoint, Aspect, PlanetPlacement};
use super::raw::{RawAspect, RawSubject};
use super::report::ChartReport;

/// Most aspects a report lists.
pub const MAX_ASPECTS: usize = 15;

/// Keeps aspects between two classical bodies, in engine order, capped at
/// [`MAX_ASPECTS`].
pub fn filter_aspects(raw: &[RawAspect]) -> Vec<Aspect> {
    raw.iter()
        .filter_map(|a| {
            let body_a = Body::from_name(&a.p1_name)?;
            let body_b = Body::from_name(&a.p2_name)?;
            Some(Aspect {
                body_a,
                body_b,
                aspect: a.aspect.replace('_', " "),
                orb: a.orbit,
            })
        })
        .take(MAX_ASPECTS)
        .collect()
}

/// Builds the normalized report.
///
/// Fails only when the engine omitted one of the ten classical bodies.
pub fn normalize(
    birth: &BirthData,
    subject: &RawSubject,
    aspects: &[RawAspect],
) -> Result<ChartReport, ChartError> {
    let planets = Body::ALL
        .iter()
        .map(|body| {
            subject
                .planet(body.name())
                .map(|raw| PlanetPlacement::from_raw(*body, raw))
                .ok_or(ChartError::MissingBody(*body))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let aspects = filter_aspects(aspects);
    let house_groups = group_by_house(&planets);

    debug!(
        aspects = aspects.len(),
        houses_occupied = house_groups.len(),
        "Chart normalized"
    );

    Ok(ChartReport {
        birth: birth.clone(),
        planets,
        north_node: AngularPoint::from_raw(&subject.true_north_lunar_node),
        ascendant: AngularPoint::from_raw(&subject.first_house),
        midheaven: AngularPoint::from_raw(&subject.tenth_house),
        aspects,
        house_groups,
    })
}
