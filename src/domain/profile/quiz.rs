//! Onboarding quiz scoring.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Wellness archetype a user is matched to.
///
/// Declaration order breaks scoring ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizProfile {
    /// Burned-out tech worker.
    #[default]
    Sarah,
    /// Creative, anxious.
    Alex,
    /// Career-confused.
    Jordan,
}

impl QuizProfile {
    pub const ALL: [QuizProfile; 3] = [QuizProfile::Sarah, QuizProfile::Alex, QuizProfile::Jordan];

    pub fn key(&self) -> &'static str {
        match self {
            QuizProfile::Sarah => "sarah",
            QuizProfile::Alex => "alex",
            QuizProfile::Jordan => "jordan",
        }
    }

    /// Profile an answer votes for, if any.
    pub fn for_answer(answer: &str) -> Option<QuizProfile> {
        match answer {
            "career_pressure" | "overwork" | "rest" => Some(QuizProfile::Sarah),
            "emotional_overwhelm" | "withdraw" | "expression" => Some(QuizProfile::Alex),
            "direction_confusion" | "overthink" | "clarity" => Some(QuizProfile::Jordan),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for QuizProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile: {0}")]
pub struct UnknownProfile(pub String);

impl FromStr for QuizProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuizProfile::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| UnknownProfile(s.to_string()))
    }
}

/// Picks the profile with the most votes. Unknown answers do not vote;
/// ties and empty input resolve in declaration order.
pub fn map_quiz_to_profile<'a, I>(answers: I) -> QuizProfile
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scores = [0usize; 3];
    for profile in answers.into_iter().filter_map(QuizProfile::for_answer) {
        scores[profile.index()] += 1;
    }

    let mut best = QuizProfile::default();
    for profile in QuizProfile::ALL {
        if scores[profile.index()] > scores[best.index()] {
            best = profile;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_answers_map_to_sarah() {
        assert_eq!(map_quiz_to_profile(Vec::<&str>::new()), QuizProfile::Sarah);
    }

    #[test]
    fn majority_wins() {
        let answers = ["overwork", "rest", "withdraw"];
        assert_eq!(map_quiz_to_profile(answers), QuizProfile::Sarah);

        let answers = ["clarity", "overthink", "rest"];
        assert_eq!(map_quiz_to_profile(answers), QuizProfile::Jordan);
    }

    #[test]
    fn ties_follow_declaration_order() {
        assert_eq!(map_quiz_to_profile(["withdraw", "clarity"]), QuizProfile::Alex);
        assert_eq!(map_quiz_to_profile(["clarity", "rest"]), QuizProfile::Sarah);
    }

    #[test]
    fn unknown_answers_do_not_vote() {
        let answers = ["meditation", "Overwork", "", "expression"];
        assert_eq!(map_quiz_to_profile(answers), QuizProfile::Alex);
    }

    #[test]
    fn parses_and_displays_keys() {
        for profile in QuizProfile::ALL {
            assert_eq!(profile.key().parse::<QuizProfile>().unwrap(), profile);
        }
        assert!("Sarah".parse::<QuizProfile>().is_err());
        assert_eq!(serde_json::to_string(&QuizProfile::Jordan).unwrap(), "\"jordan\"");
    }

    proptest! {
        #[test]
        fn winner_has_the_top_score(answers in proptest::collection::vec(
            prop_oneof![
                Just("career_pressure"), Just("rest"), Just("withdraw"),
                Just("expression"), Just("clarity"), Just("unrelated"),
            ],
            0..12,
        )) {
            let winner = map_quiz_to_profile(answers.iter().copied());
            let votes = |p: QuizProfile| answers.iter()
                .filter(|a| QuizProfile::for_answer(a) == Some(p))
                .count();
            for other in QuizProfile::ALL {
                prop_assert!(votes(winner) >= votes(other));
            }
        }
    }
}
