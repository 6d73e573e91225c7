//! Pre-authored charts used when a real chart cannot be computed.

use super::quiz::QuizProfile;

/// Chart text for a profile.
pub fn sample_chart(profile: QuizProfile) -> &'static str {
    match profile {
        QuizProfile::Sarah => SARAH_CHART,
        QuizProfile::Alex => ALEX_CHART,
        QuizProfile::Jordan => JORDAN_CHART,
    }
}

const SARAH_CHART: &str = r#"PROFILE: Sarah (Burned Out Tech Worker)
Birth: March 15, 1995, 2:30 PM, San Francisco, CA

PLANETARY PLACEMENTS:

Sun in Pisces (24°52') in 8th House
Moon in Virgo (10°28') in 2nd House
Mercury in Pisces (1°29') in 8th House
Venus in Aquarius (15°21') in 7th House
Mars in Leo (13°38' Retrograde) in 1st House
Jupiter in Sagittarius (14°05') in 5th House
Saturn in Pisces (8°12') in 8th House
Uranus in Capricorn (27°33') in 6th House
Neptune in Capricorn (24°55') in 6th House
Pluto in Scorpio (29°50') in 4th House
North Node in Scorpio (5°18') in 4th House

Rising Sign: Leo (10°02')
Midheaven: Taurus (4°30') — 10th House

KEY ASPECTS:
- Sun conjunct Saturn (8th House): Heavy sense of duty, feels burdened by expectations, chronic overwork pattern
- Sun conjunct Mercury (8th House): Intuitive processing, deep psychological insight
- Venus opposite Mars: Tension between need for independence and asserting boundaries
- Moon opposite Mercury: Conflict between logical analysis and emotional needs
- Moon trine Pluto: Deep emotional resilience, transformative inner life
- Mars square Pluto: Intense drive that can become self-destructive under stress
- Jupiter trine Mars: Natural leadership and creative confidence when aligned
- Saturn square Uranus: Tension between tradition/stability and need for freedom/change
- Neptune conjunct Uranus (6th House): Idealistic about work, may blur boundaries around health and daily routine

HOUSE EMPHASIS:
- Strong 8th House (Sun, Mercury, Saturn): Deep transformation themes, psychology, shared resources, crisis management
- 6th House (Uranus, Neptune): Health and work routines need conscious attention, burnout risk
- 1st House Mars Retrograde: Struggles to assert personal needs, projects strength while feeling depleted

CURRENT TRANSITS (2025-2026):
- Saturn transiting 7th House: Relationship structures being tested, boundaries with partners
- Pluto entering Aquarius: Transforming social identity and long-term goals
- Jupiter in Gemini transiting 11th House: Expanding social networks, new community connections"#;

const ALEX_CHART: &str = r#"PROFILE: Alex (Creative Anxious)
Birth: July 22, 1998, 8:15 AM, New York, NY

PLANETARY PLACEMENTS:

Sun in Cancer (29°29') in 12th House
Moon in Cancer (16°16') in 12th House
Mercury in Leo (25°21') in 1st House
Venus in Cancer (3°27') in 12th House
Mars in Cancer (10°49') in 12th House
Jupiter in Pisces (21°08') in 8th House
Saturn in Taurus (2°45' Retrograde) in 10th House
Uranus in Aquarius (10°33') in 7th House
Neptune in Aquarius (0°42') in 6th House
Pluto in Sagittarius (5°52') in 4th House
North Node in Virgo (12°30') in 2nd House

Rising Sign: Leo (28°14')
Midheaven: Taurus (22°10') — 10th House

KEY ASPECTS:
- Sun conjunct Moon (12th House): Deeply unified emotional identity, but hidden from the world
- Sun opposite Neptune: Dissolving boundaries, spiritual sensitivity, confusion about identity
- Moon conjunct Mars (12th House): Emotional intensity channeled inward, quick to react but suppresses it
- Moon conjunct Venus (12th House): Deep compassion, nurturing love style, self-sacrifice tendency
- Saturn square Neptune: Tension between structure/career ambition and dreams/ideals
- Jupiter trine Sun: Natural optimism and spiritual gifts, protection through intuition
- Pluto square Mars: Power struggles with anger expression, creative intensity
- Uranus opposite Mercury: Brilliant but scattered thinking, needs unconventional communication outlets
- North Node in Virgo (2nd House): Life path toward practical skills, self-worth, and grounded routines

HOUSE EMPHASIS:
- Stellium in 12th House (Sun, Moon, Venus, Mars): Rich inner world, strong intuition, needs solitude, spiritual gifts but risk of isolation
- 10th House Saturn Retrograde: Career path feels delayed or uncertain, fear of public visibility
- 4th House Pluto: Family dynamics deeply transformative, home is both sanctuary and trigger

CURRENT TRANSITS (2025-2026):
- Saturn transiting Pisces through 8th House: Deep psychological restructuring, facing fears
- Neptune transiting Pisces through 8th House: Spiritual awakening through crisis or loss
- Jupiter in Gemini transiting 11th House: New creative communities and friendships emerging"#;

const JORDAN_CHART: &str = r#"PROFILE: Jordan (Career Confused)
Birth: November 3, 2000, 11:45 PM, Austin, TX

PLANETARY PLACEMENTS:

Sun in Scorpio (12°06') in 4th House
Moon in Aquarius (11°20') in 7th House
Mercury in Scorpio (1°22' Retrograde) in 4th House
Venus in Sagittarius (19°20') in 5th House
Mars in Libra (0°05') in 3rd House
Jupiter in Gemini (8°44' Retrograde) in 11th House
Saturn in Taurus (18°15') in 10th House
Uranus in Aquarius (16°55') in 7th House
Neptune in Aquarius (3°48') in 7th House
Pluto in Sagittarius (11°22') in 5th House
North Node in Cancer (15°40') in 12th House

Rising Sign: Leo (10°30')
Midheaven: Taurus (0°15') — 10th House

KEY ASPECTS:
- Sun square Moon: Internal conflict between emotional depth (Scorpio) and intellectual detachment (Aquarius)
- Sun trine Jupiter: Natural luck and expansion, philosophical mind, big-picture thinking
- Moon conjunct Uranus (7th House): Sudden emotional changes, need for independence, unconventional relationship needs
- Moon conjunct Neptune (7th House): Idealizes partners, sensitive to others' energy, empathic
- Mercury Retrograde conjunct Sun: Deep thinker who constantly re-evaluates, revisits past decisions
- Venus conjunct Pluto (5th House): Intense creative passion, all-or-nothing in romance and art
- Saturn in Taurus (10th House): Career path feels slow, pressure to build something lasting and practical
- Mars square Saturn: Frustration between desire to act and feeling blocked, career impatience
- Jupiter Retrograde in 11th House: Re-evaluating social groups, delayed but eventual success in community

HOUSE EMPHASIS:
- Strong 4th House (Sun, Mercury): Identity rooted in family, home, and inner foundations
- 7th House (Moon, Uranus, Neptune): Relationships are a major life theme, unconventional partnerships
- 5th House (Venus, Pluto): Creative expression and romance are transformative
- 10th House Saturn: Career requires patience, discipline, and long-term commitment

CURRENT TRANSITS (2025-2026):
- Saturn transiting Pisces through 8th House: Financial and emotional restructuring
- Pluto entering Aquarius transiting 7th House: Transformative relationship dynamics
- Jupiter in Gemini activating 11th House: Social expansion, new networks, career opportunities through community"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_has_a_chart() {
        for profile in QuizProfile::ALL {
            let chart = sample_chart(profile);
            assert!(chart.contains("PLANETARY PLACEMENTS:"));
            assert!(chart.contains("KEY ASPECTS:"));
            assert!(chart.contains("HOUSE EMPHASIS:"));
        }
    }

    #[test]
    fn charts_are_headed_by_their_profile() {
        assert!(sample_chart(QuizProfile::Sarah).starts_with("PROFILE: Sarah"));
        assert!(sample_chart(QuizProfile::Alex).starts_with("PROFILE: Alex"));
        assert!(sample_chart(QuizProfile::Jordan).starts_with("PROFILE: Jordan"));
    }
}
