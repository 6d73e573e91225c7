//! Sign and house code tables.
//!
//! The engine encodes signs as three-letter codes ("Ari", "Tau", ...) and
//! houses as underscored names ("First_House", ...). Everything user-facing
//! goes through these tables; codes missing from them pass through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const SIGN_TABLE: [(&str, ZodiacSign); 12] = [
    ("Ari", ZodiacSign::Aries),
    ("Tau", ZodiacSign::Taurus),
    ("Gem", ZodiacSign::Gemini),
    ("Can", ZodiacSign::Cancer),
    ("Leo", ZodiacSign::Leo),
    ("Vir", ZodiacSign::Virgo),
    ("Lib", ZodiacSign::Libra),
    ("Sco", ZodiacSign::Scorpio),
    ("Sag", ZodiacSign::Sagittarius),
    ("Cap", ZodiacSign::Capricorn),
    ("Aqu", ZodiacSign::Aquarius),
    ("Pis", ZodiacSign::Pisces),
];

impl ZodiacSign {
    /// All signs in zodiacal order.
    pub fn all() -> impl Iterator<Item = ZodiacSign> {
        SIGN_TABLE.iter().map(|(_, sign)| *sign)
    }

    /// Looks up an engine sign code.
    pub fn from_code(code: &str) -> Option<ZodiacSign> {
        SIGN_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, sign)| *sign)
    }

    /// Looks up a full English sign name.
    pub fn from_name(name: &str) -> Option<ZodiacSign> {
        ZodiacSign::all().find(|s| s.name() == name)
    }

    /// Engine code for this sign.
    pub fn code(&self) -> &'static str {
        SIGN_TABLE[*self as usize].0
    }

    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Zodiac glyph (U+2648 through U+2653).
    pub fn symbol(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "\u{2648}",
            ZodiacSign::Taurus => "\u{2649}",
            ZodiacSign::Gemini => "\u{264a}",
            ZodiacSign::Cancer => "\u{264b}",
            ZodiacSign::Leo => "\u{264c}",
            ZodiacSign::Virgo => "\u{264d}",
            ZodiacSign::Libra => "\u{264e}",
            ZodiacSign::Scorpio => "\u{264f}",
            ZodiacSign::Sagittarius => "\u{2650}",
            ZodiacSign::Capricorn => "\u{2651}",
            ZodiacSign::Aquarius => "\u{2652}",
            ZodiacSign::Pisces => "\u{2653}",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full sign name for an engine code, or the code itself when unknown.
pub fn canonical_sign(code: &str) -> String {
    ZodiacSign::from_code(code)
        .map(|s| s.name().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Glyph for a full sign name; empty when the name is not a known sign.
pub fn sign_symbol(name: &str) -> &'static str {
    ZodiacSign::from_name(name).map(|s| s.symbol()).unwrap_or("")
}

const HOUSE_TABLE: [(&str, &str); 12] = [
    ("First_House", "1st"),
    ("Second_House", "2nd"),
    ("Third_House", "3rd"),
    ("Fourth_House", "4th"),
    ("Fifth_House", "5th"),
    ("Sixth_House", "6th"),
    ("Seventh_House", "7th"),
    ("Eighth_House", "8th"),
    ("Ninth_House", "9th"),
    ("Tenth_House", "10th"),
    ("Eleventh_House", "11th"),
    ("Twelfth_House", "12th"),
];

/// Ordinal label ("1st".."12th") for an engine house code, or the code itself
/// when unknown.
pub fn canonical_house(code: &str) -> String {
    HOUSE_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// House number (1-12) for an engine house code.
pub fn house_number(code: &str) -> Option<u8> {
    HOUSE_TABLE
        .iter()
        .position(|(c, _)| *c == code)
        .map(|idx| idx as u8 + 1)
}

/// Every known house code, first to twelfth.
pub fn house_codes() -> impl Iterator<Item = &'static str> {
    HOUSE_TABLE.iter().map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn sign_codes_map_to_full_names() {
        assert_eq!(canonical_sign("Ari"), "Aries");
        assert_eq!(canonical_sign("Sco"), "Scorpio");
        assert_eq!(canonical_sign("Sag"), "Sagittarius");
        assert_eq!(canonical_sign("Pis"), "Pisces");
    }

    #[test]
    fn sign_table_is_a_bijection() {
        let names: HashSet<_> = ZodiacSign::all().map(|s| canonical_sign(s.code())).collect();
        assert_eq!(names.len(), 12);
        for sign in ZodiacSign::all() {
            assert_eq!(ZodiacSign::from_code(sign.code()), Some(sign));
            assert_eq!(ZodiacSign::from_name(sign.name()), Some(sign));
        }
    }

    #[test]
    fn house_codes_map_to_ordinals() {
        assert_eq!(canonical_house("First_House"), "1st");
        assert_eq!(canonical_house("Second_House"), "2nd");
        assert_eq!(canonical_house("Third_House"), "3rd");
        assert_eq!(canonical_house("Eighth_House"), "8th");
        assert_eq!(canonical_house("Twelfth_House"), "12th");
    }

    #[test]
    fn house_table_is_a_bijection() {
        let labels: HashSet<_> = house_codes().map(canonical_house).collect();
        assert_eq!(labels.len(), 12);
        for (idx, code) in house_codes().enumerate() {
            assert_eq!(house_number(code), Some(idx as u8 + 1));
        }
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(canonical_sign("Oph"), "Oph");
        assert_eq!(canonical_house("Thirteenth_House"), "Thirteenth_House");
        assert_eq!(house_number("Thirteenth_House"), None);
    }

    #[test]
    fn sign_symbol_only_for_known_names() {
        assert_eq!(sign_symbol("Aries"), "\u{2648}");
        assert_eq!(sign_symbol("Pisces"), "\u{2653}");
        assert_eq!(sign_symbol("Ari"), "");
        assert_eq!(sign_symbol(""), "");
    }

    proptest! {
        #[test]
        fn unknown_sign_code_is_identity(code in "[A-Za-z_]{0,12}") {
            prop_assume!(ZodiacSign::from_code(&code).is_none());
            prop_assert_eq!(canonical_sign(&code), code);
        }

        #[test]
        fn unknown_house_code_is_identity(code in "[A-Za-z_]{0,16}") {
            prop_assume!(house_number(&code).is_none());
            prop_assert_eq!(canonical_house(&code), code);
        }
    }
}
