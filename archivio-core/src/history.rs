//! Server-side archive of past exchanges (`GET /chat/history`).

use serde::{Deserialize, Serialize};

use crate::challenge::Outcome;

/// Extra detail attached to archived challenge exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRecord {
    #[serde(default)]
    pub challenge_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attribute: String,
    #[serde(default)]
    pub player_value: i32,
    #[serde(default)]
    pub player_roll: i32,
    #[serde(default)]
    pub player_result: i32,
    #[serde(default)]
    pub difficulty: i32,
    #[serde(default)]
    pub difficulty_roll: i32,
    #[serde(default)]
    pub difficulty_result: i32,
    #[serde(default)]
    pub outcome: Outcome,
    #[serde(default)]
    pub outcome_text: String,
}

/// One archived question/answer exchange.
///
/// `kind` is a free string on the wire ("conversation" or "challenge");
/// anything unrecognized renders as a plain exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_data: Option<ChallengeRecord>,
}

impl HistoryEntry {
    /// Whether the detail view should render the challenge breakdown.
    #[must_use]
    pub fn challenge(&self) -> Option<&ChallengeRecord> {
        if self.kind == "challenge" {
            self.challenge_data.as_ref()
        } else {
            None
        }
    }
}
