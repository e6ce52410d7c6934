//! Attribute-gated one-time aids ("focalizzazioni") and level eligibility.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The attribute set the aid flow asks the player to declare.
///
/// Fixed by the Narration; aids whose attribute is not in this set can
/// still qualify if the player declared a value for it via the server data,
/// but the input form only offers these three.
pub const AID_ATTRIBUTES: [&str; 3] = ["Saggezza", "Percezione", "Intelligenza"];

/// One redeemable tier of an aid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidLevel {
    /// Attribute threshold required to claim this tier.
    pub level: i32,
    pub level_name: String,
    pub text: String,
}

/// A narrative benefit active during an event window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aid {
    pub id: String,
    pub name: String,
    pub attribute: String,
    pub levels: Vec<AidLevel>,
    #[serde(default)]
    pub event_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// One already-claimed (aid, level) pair from `GET /aids/my-used`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedAid {
    pub aid_id: String,
    pub level: i32,
}

/// Body of `POST /aids/use`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidUseRequest {
    pub aid_id: String,
    pub level: i32,
    pub player_attribute_value: i32,
}

/// Server response after redeeming a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidUseResult {
    pub text: String,
    pub attribute: String,
    pub level_name: String,
}

/// Declared attribute values, keyed by attribute label.
///
/// `BTreeMap` keeps iteration (and the persisted JSON) in a stable order.
pub type DeclaredValues = BTreeMap<String, i32>;

/// An aid together with the subset of its levels the player can claim now.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifyingAid {
    pub aid: Aid,
    pub levels: Vec<AidLevel>,
}

/// `declared >= threshold` and the pair has not been claimed before.
#[must_use]
pub fn can_redeem(aid_id: &str, level: &AidLevel, declared: i32, used: &[UsedAid]) -> bool {
    declared >= level.level
        && !used
            .iter()
            .any(|u| u.aid_id == aid_id && u.level == level.level)
}

/// Levels of one aid claimable with the declared value, in listed order.
#[must_use]
pub fn qualifying_levels(aid: &Aid, declared: i32, used: &[UsedAid]) -> Vec<AidLevel> {
    aid.levels
        .iter()
        .filter(|lvl| can_redeem(&aid.id, lvl, declared, used))
        .cloned()
        .collect()
}

/// Filter the active aids down to those with at least one claimable level.
///
/// Aids whose attribute has no declared value are dropped, as are aids whose
/// every level is below-threshold or already used. Pure; recomputed by the
/// UI whenever aids, used pairs or declared values change.
#[must_use]
pub fn qualifying_aids(
    aids: &[Aid],
    declared: &DeclaredValues,
    used: &[UsedAid],
) -> Vec<QualifyingAid> {
    aids.iter()
        .filter_map(|aid| {
            let value = *declared.get(&aid.attribute)?;
            let levels = qualifying_levels(aid, value, used);
            if levels.is_empty() {
                None
            } else {
                Some(QualifyingAid {
                    aid: aid.clone(),
                    levels,
                })
            }
        })
        .collect()
}
