//! Opposed challenges ("prove contrapposte") and the free-text dispatch
//! that offers them from chat input.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One opposed test inside a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeTest {
    pub attribute: String,
    pub difficulty: i32,
    pub success_text: String,
    pub tie_text: String,
    pub failure_text: String,
}

/// A narrative situation the player can opt into from chat.
///
/// Invariant (server-enforced): `tests` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub allow_refuge_defense: bool,
    pub tests: Vec<ChallengeTest>,
}

impl Challenge {
    /// True when the lower-cased question mentions this challenge, either
    /// through one of its keywords or through its own name.
    #[must_use]
    pub fn matches(&self, question_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|kw| !kw.is_empty() && question_lower.contains(&kw.to_lowercase()))
            || question_lower.contains(&self.name.to_lowercase())
    }
}

/// Scan the loaded challenges for one triggered by a free-text question.
///
/// First match in fetch order wins; challenges the player already attempted
/// this session are skipped. Pure: the caller decides what to do with the
/// match (normally: short-circuit the oracle call and render an offer).
#[must_use]
pub fn find_challenge<'a>(
    question: &str,
    challenges: &'a [Challenge],
    attempted: &HashSet<String>,
) -> Option<&'a Challenge> {
    let question_lower = question.to_lowercase();
    challenges
        .iter()
        .filter(|c| !attempted.contains(&c.id))
        .find(|c| c.matches(&question_lower))
}

/// Body of `POST /challenges/attempt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRequest {
    pub challenge_id: String,
    pub test_index: usize,
    pub player_value: i32,
    pub use_refuge: bool,
}

/// Server-computed resolution bundle, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    pub player_value: i32,
    pub player_roll: i32,
    pub player_result: i32,
    pub difficulty: i32,
    pub difficulty_roll: i32,
    pub difficulty_result: i32,
    pub outcome: Outcome,
    pub message: String,
}

/// Challenge outcome as reported by the server.
///
/// Any unrecognized value deserializes to [`Outcome::Unknown`] and renders
/// unstyled with an empty label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Tie,
    Failure,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Outcome {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Successo!",
            Outcome::Tie => "Parità",
            Outcome::Failure => "Fallimento",
            Outcome::Unknown => "",
        }
    }

    /// CSS modifier class for the outcome card (green/yellow/red).
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Outcome::Success => "outcome--success",
            Outcome::Tie => "outcome--tie",
            Outcome::Failure => "outcome--failure",
            Outcome::Unknown => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge(id: &str, name: &str, keywords: &[&str]) -> Challenge {
        Challenge {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
            allow_refuge_defense: false,
            tests: vec![ChallengeTest {
                attribute: "Intelligenza + Occulto".into(),
                difficulty: 7,
                success_text: "ok".into(),
                tie_text: "eh".into(),
                failure_text: "no".into(),
            }],
        }
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        let list = [challenge("c1", "Antico tomo sulla scrivania", &["tomo", "libro"])];
        let hit = find_challenge("Mi avvicino al TOMO", &list, &HashSet::new());
        assert_eq!(hit.map(|c| c.id.as_str()), Some("c1"));
    }

    #[test]
    fn name_match_triggers_without_keywords() {
        let list = [challenge("c1", "porta sigillata", &[])];
        let hit = find_challenge("Esamino la porta sigillata in fondo", &list, &HashSet::new());
        assert!(hit.is_some());
    }

    #[test]
    fn first_match_in_fetch_order_wins() {
        let list = [
            challenge("c1", "Prima", &["tomo"]),
            challenge("c2", "Seconda", &["tomo"]),
        ];
        let hit = find_challenge("apro il tomo", &list, &HashSet::new());
        assert_eq!(hit.map(|c| c.id.as_str()), Some("c1"));
    }

    #[test]
    fn attempted_challenges_are_skipped() {
        let list = [
            challenge("c1", "Prima", &["tomo"]),
            challenge("c2", "Seconda", &["tomo"]),
        ];
        let attempted: HashSet<String> = ["c1".to_string()].into_iter().collect();
        let hit = find_challenge("apro il tomo", &list, &attempted);
        assert_eq!(hit.map(|c| c.id.as_str()), Some("c2"));
    }

    #[test]
    fn no_match_returns_none() {
        let list = [challenge("c1", "Antico tomo", &["tomo", "libro"])];
        assert!(find_challenge("Dove si trova la cripta?", &list, &HashSet::new()).is_none());
        let attempted: HashSet<String> = ["c1".to_string()].into_iter().collect();
        assert!(find_challenge("apro il tomo", &list, &attempted).is_none());
    }

    #[test]
    fn empty_keywords_never_match_everything() {
        let list = [challenge("c1", "Nome lungo non citato", &[""])];
        assert!(find_challenge("ciao", &list, &HashSet::new()).is_none());
    }

    #[test]
    fn outcome_labels_and_styles_are_fixed() {
        assert_eq!(Outcome::Success.label(), "Successo!");
        assert_eq!(Outcome::Tie.label(), "Parità");
        assert_eq!(Outcome::Failure.label(), "Fallimento");
        assert_eq!(Outcome::Unknown.label(), "");
        assert_eq!(Outcome::Success.css_class(), "outcome--success");
        assert_eq!(Outcome::Tie.css_class(), "outcome--tie");
        assert_eq!(Outcome::Failure.css_class(), "outcome--failure");
        assert_eq!(Outcome::Unknown.css_class(), "");
    }

    #[test]
    fn unexpected_outcome_value_parses_as_unknown() {
        let o: Outcome = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(o, Outcome::Unknown);
    }
}
