//! The normalized chart and its two renderings: prompt text and JSON.

use serde::{Deserialize, Serialize};

use super::birth::BirthData;
use super::body::Body;
use super::emphasis::{house_emphasis, HouseEmphasis, HouseGroup};
use super::placement::{AngularPoint, Aspect, PlanetPlacement};
use super::zodiac::sign_symbol;

/// A complete normalized chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartReport {
    pub birth: BirthData,
    /// The ten classical placements in canonical order.
    pub planets: Vec<PlanetPlacement>,
    pub north_node: AngularPoint,
    pub ascendant: AngularPoint,
    pub midheaven: AngularPoint,
    /// Retained aspects in engine relevance order.
    pub aspects: Vec<Aspect>,
    pub house_groups: Vec<HouseGroup>,
}

impl ChartReport {
    pub fn emphasis(&self) -> Vec<HouseEmphasis> {
        house_emphasis(&self.house_groups)
    }

    pub fn stelliums(&self) -> impl Iterator<Item = &HouseGroup> {
        self.house_groups.iter().filter(|g| g.is_stellium())
    }

    fn house_of(&self, body: Body) -> &str {
        self.planets
            .iter()
            .find(|p| p.body == body)
            .map(|p| p.house.as_str())
            .unwrap_or("")
    }

    /// Renders the plain-text report embedded in the chat system prompt.
    pub fn render_text(&self) -> String {
        let b = &self.birth;
        let mut lines: Vec<String> = vec![
            format!("BIRTH CHART FOR: {}", b.name),
            format!(
                "Born: {}/{}/{} at {:02}:{:02}",
                b.month(),
                b.day(),
                b.year(),
                b.hour(),
                b.minute()
            ),
            format!("Location: {}", b.city),
            String::new(),
            "PLANETARY PLACEMENTS:".to_string(),
            String::new(),
        ];

        for p in &self.planets {
            let retro = if p.retrograde { " Retrograde" } else { "" };
            lines.push(format!(
                "{} in {} ({}) in {} House{}",
                p.body, p.sign, p.position, p.house, retro
            ));
        }

        let node = &self.north_node;
        lines.push(format!(
            "North Node in {} ({}) in {} House",
            node.sign, node.position, node.house
        ));
        lines.push(String::new());

        lines.push(format!(
            "Rising Sign / Ascendant: {} ({})",
            self.ascendant.sign, self.ascendant.position
        ));
        lines.push(format!(
            "Midheaven (MC): {} ({}) — 10th House",
            self.midheaven.sign, self.midheaven.position
        ));
        lines.push(String::new());

        lines.push("KEY ASPECTS:".to_string());
        for a in &self.aspects {
            lines.push(format!(
                "- {} {} {} ({} House / {} House), orb {}°",
                a.body_a,
                a.aspect,
                a.body_b,
                self.house_of(a.body_a),
                self.house_of(a.body_b),
                a.orb_label()
            ));
        }

        // Focus areas are only listed under a stellium.
        if self.stelliums().next().is_some() {
            lines.push(String::new());
            lines.push("HOUSE EMPHASIS:".to_string());
            lines.extend(self.emphasis().iter().map(ToString::to_string));
        }

        lines.join("\n")
    }

    /// Builds the structured form returned to the frontend.
    pub fn to_json(&self) -> ChartJson {
        ChartJson {
            planets: self
                .planets
                .iter()
                .map(|p| PlanetJson {
                    name: p.body.name().to_string(),
                    sign: p.sign.clone(),
                    position: p.position.clone(),
                    house: p.house.clone(),
                    retrograde: p.retrograde,
                    symbol: p.body.symbol().to_string(),
                    sign_symbol: sign_symbol(&p.sign).to_string(),
                    meaning: p.body.meaning().to_string(),
                })
                .collect(),
            north_node: NodeJson {
                sign: self.north_node.sign.clone(),
                position: self.north_node.position.clone(),
                house: self.north_node.house.clone(),
            },
            ascendant: AngleJson::from_point(&self.ascendant),
            midheaven: AngleJson::from_point(&self.midheaven),
            aspects: self
                .aspects
                .iter()
                .map(|a| AspectJson {
                    planet1: a.body_a.name().to_string(),
                    planet2: a.body_b.name().to_string(),
                    aspect: a.aspect.clone(),
                    orb: a.rounded_orb(),
                })
                .collect(),
        }
    }
}

/// JSON chart visual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartJson {
    pub planets: Vec<PlanetJson>,
    #[serde(rename = "northNode")]
    pub north_node: NodeJson,
    pub ascendant: AngleJson,
    pub midheaven: AngleJson,
    pub aspects: Vec<AspectJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetJson {
    pub name: String,
    pub sign: String,
    pub position: String,
    pub house: String,
    pub retrograde: bool,
    pub symbol: String,
    pub sign_symbol: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeJson {
    pub sign: String,
    pub position: String,
    pub house: String,
}

/// Ascendant or Midheaven; `symbol` is the sign glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleJson {
    pub sign: String,
    pub position: String,
    pub symbol: String,
}

impl AngleJson {
    fn from_point(point: &AngularPoint) -> Self {
        Self {
            sign: point.sign.clone(),
            position: point.position.clone(),
            symbol: sign_symbol(&point.sign).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectJson {
    pub planet1: String,
    pub planet2: String,
    pub aspect: String,
    pub orb: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::normalizer::normalize;
    use crate::domain::chart::raw::RawAspect;
    use crate::domain::chart::test_support::{sample_aspects, sample_birth, sample_subject};

    const EXPECTED_TEXT: &str = "\
BIRTH CHART FOR: User_1234abcd
Born: 3/15/1995 at 14:30
Location: San Francisco

PLANETARY PLACEMENTS:

Sun in Pisces (24°30') in 8th House
Moon in Cancer (3°15') in 12th House
Mercury in Pisces (10°00') in 8th House
Venus in Aquarius (28°59') in 7th House
Mars in Gemini (15°45') in 11th House Retrograde
Jupiter in Sagittarius (1°30') in 5th House
Saturn in Pisces (5°30') in 8th House
Uranus in Capricorn (29°59') in 6th House
Neptune in Capricorn (25°00') in 6th House
Pluto in Scorpio (2°00') in 4th House
North Node in Taurus (12°15') in 10th House

Rising Sign / Ascendant: Leo (10°00')
Midheaven (MC): Taurus (1°30') — 10th House

KEY ASPECTS:
- Sun conjunction Saturn (8th House / 8th House), orb 1.2°
- Moon trine Pluto (12th House / 4th House), orb 0.9°
- Mars opposition Jupiter (11th House / 5th House), orb 3.0°
- Uranus semi sextile Neptune (6th House / 6th House), orb 5.0°

HOUSE EMPHASIS:
- Stellium in 8th House (Sun, Mercury, Saturn): Multiple planets concentrate energy here
- 6th House (Uranus, Neptune): Significant focus area";

    fn sample_report() -> ChartReport {
        normalize(&sample_birth(), &sample_subject(), &sample_aspects()).unwrap()
    }

    #[test]
    fn renders_full_text_report() {
        assert_eq!(sample_report().render_text(), EXPECTED_TEXT);
    }

    #[test]
    fn omits_emphasis_block_when_every_house_is_single() {
        let mut subject = sample_subject();
        let houses = [
            "First_House", "Second_House", "Third_House", "Fourth_House", "Fifth_House",
            "Sixth_House", "Seventh_House", "Eighth_House", "Ninth_House", "Tenth_House",
        ];
        for (p, h) in subject.planets.iter_mut().zip(houses) {
            p.house = h.to_string();
        }
        let text = normalize(&sample_birth(), &subject, &[]).unwrap().render_text();

        assert!(!text.contains("HOUSE EMPHASIS:"));
        assert!(text.ends_with("KEY ASPECTS:"));
    }

    #[test]
    fn focus_area_alone_does_not_open_emphasis_block() {
        let mut subject = sample_subject();
        let houses = [
            "First_House", "Second_House", "Third_House", "Fourth_House", "Fifth_House",
            "Sixth_House", "Seventh_House", "Eighth_House", "Tenth_House", "Tenth_House",
        ];
        for (p, h) in subject.planets.iter_mut().zip(houses) {
            p.house = h.to_string();
        }
        let report = normalize(&sample_birth(), &subject, &[]).unwrap();

        assert_eq!(report.emphasis().len(), 1);
        let text = report.render_text();
        assert!(!text.contains("HOUSE EMPHASIS:"));
        assert!(!text.contains("Significant focus area"));
        assert!(text.ends_with("KEY ASPECTS:"));
    }

    #[test]
    fn text_and_json_orbs_agree() {
        let aspects = vec![
            RawAspect::new("Sun", "square", "Moon", 2.25),
            RawAspect::new("Venus", "trine", "Mars", 0.35),
        ];
        let report = normalize(&sample_birth(), &sample_subject(), &aspects).unwrap();
        let text = report.render_text();
        let json = report.to_json();

        for (aspect, visual) in report.aspects.iter().zip(&json.aspects) {
            let label = format!("{:.1}", visual.orb);
            assert_eq!(label, aspect.orb_label());
            assert!(text.contains(&format!("orb {}°", label)));
        }
    }

    #[test]
    fn exactly_one_stellium() {
        assert_eq!(sample_report().stelliums().count(), 1);
    }

    #[test]
    fn json_uses_frontend_field_names() {
        let json = serde_json::to_value(sample_report().to_json()).unwrap();

        assert!(json.get("northNode").is_some());
        assert_eq!(json["planets"].as_array().unwrap().len(), 10);
        assert_eq!(json["planets"][0]["name"], "Sun");
        assert_eq!(json["planets"][0]["symbol"], "\u{2609}");
        assert_eq!(json["planets"][0]["sign_symbol"], "\u{2653}");
        assert_eq!(json["planets"][0]["meaning"], "Core identity & ego");
        assert_eq!(json["planets"][4]["retrograde"], true);
        assert!(json["planets"][0].get("abs_pos").is_none());
        assert_eq!(json["northNode"]["house"], "10th");
        assert_eq!(json["ascendant"]["symbol"], "\u{264C}");
        assert_eq!(json["midheaven"]["sign"], "Taurus");
        assert_eq!(json["aspects"][0]["planet1"], "Sun");
        assert_eq!(json["aspects"][0]["planet2"], "Saturn");
        assert_eq!(json["aspects"][0]["orb"], 1.2);
        assert_eq!(json["aspects"][3]["aspect"], "semi sextile");
    }

    #[test]
    fn unknown_sign_has_empty_symbol() {
        let mut subject = sample_subject();
        subject.first_house.sign = "Oph".to_string();
        let json = normalize(&sample_birth(), &subject, &[]).unwrap().to_json();
        assert_eq!(json.ascendant.sign, "Oph");
        assert_eq!(json.ascendant.symbol, "");
    }
}
