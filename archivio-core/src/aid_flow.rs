//! Modal state machine for redeeming an aid level.
//!
//! `Input -> Select`, with an explicit "modify values" backward transition.
//! The player declares a value for each attribute in
//! [`crate::aid::AID_ATTRIBUTES`]; qualifying aids are recomputed from the
//! declared values, the active aid list and the already-used pairs.

use crate::aid::{Aid, AidUseRequest, DeclaredValues, QualifyingAid, UsedAid, qualifying_aids};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AidStep {
    /// Declare attribute values.
    Input,
    /// Pick an aid and one of its eligible levels.
    Select,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AidFlow {
    pub step: AidStep,
    pub declared: DeclaredValues,
}

impl AidFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: AidStep::Input,
            declared: DeclaredValues::new(),
        }
    }

    /// Resume with values restored from device storage.
    #[must_use]
    pub fn with_declared(declared: DeclaredValues) -> Self {
        Self {
            step: AidStep::Input,
            declared,
        }
    }

    /// Record one declared value. Negative entries are refused.
    pub fn declare(&mut self, attribute: &str, value: i32) {
        if value >= 0 {
            self.declared.insert(attribute.to_string(), value);
        }
    }

    pub fn clear(&mut self, attribute: &str) {
        self.declared.remove(attribute);
    }

    /// At least one non-negative entry is required to proceed.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        !self.declared.is_empty()
    }

    /// Qualifying aids for the current declarations. Pure helper for the UI
    /// to recompute reactively when `aids` or `used` change.
    #[must_use]
    pub fn qualifying(&self, aids: &[Aid], used: &[UsedAid]) -> Vec<QualifyingAid> {
        qualifying_aids(aids, &self.declared, used)
    }

    /// `Input -> Select` when something is claimable; otherwise stay in
    /// `Input` and return the (empty) set so the caller can notify.
    pub fn proceed(&mut self, aids: &[Aid], used: &[UsedAid]) -> Vec<QualifyingAid> {
        if self.step != AidStep::Input || !self.can_proceed() {
            return Vec::new();
        }
        let eligible = self.qualifying(aids, used);
        if !eligible.is_empty() {
            self.step = AidStep::Select;
        }
        eligible
    }

    /// `Select -> Input` to modify the declared values.
    pub fn back_to_input(&mut self) {
        self.step = AidStep::Input;
    }

    /// Build the redeem request for a chosen (aid, level) pair.
    ///
    /// Returns `None` outside `Select` or when no value was declared for the
    /// aid's attribute.
    #[must_use]
    pub fn use_request(&self, aid: &Aid, level: i32) -> Option<AidUseRequest> {
        if self.step != AidStep::Select {
            return None;
        }
        let value = *self.declared.get(&aid.attribute)?;
        Some(AidUseRequest {
            aid_id: aid.id.clone(),
            level,
            player_attribute_value: value,
        })
    }
}

impl Default for AidFlow {
    fn default() -> Self {
        Self::new()
    }
}
