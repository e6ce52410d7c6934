//! Modal state machine for resolving one opposed challenge.
//!
//! `Choose -> Input -> Result`, linear; the only backward transition is
//! `Input -> Choose`. A failed attempt request leaves the machine in
//! `Input` so the player can resubmit.

use crate::challenge::{AttemptOutcome, AttemptRequest, Challenge, ChallengeTest};

#[derive(Debug, Clone, PartialEq)]
pub enum ChallengeStep {
    /// Pick one of the challenge's opposed tests.
    Choose,
    /// Declare the attribute value (and optionally the refuge defense).
    Input { test_index: usize },
    /// Terminal: render the server bundle until the modal is dismissed.
    Result { outcome: AttemptOutcome },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeFlow {
    pub challenge: Challenge,
    pub step: ChallengeStep,
}

impl ChallengeFlow {
    #[must_use]
    pub fn new(challenge: Challenge) -> Self {
        Self {
            challenge,
            step: ChallengeStep::Choose,
        }
    }

    /// The test fixed by the `Input` step; `None` in `Choose` and `Result`.
    #[must_use]
    pub fn selected_test(&self) -> Option<&ChallengeTest> {
        match self.step {
            ChallengeStep::Input { test_index } => self.challenge.tests.get(test_index),
            _ => None,
        }
    }

    /// `Choose -> Input`. Out-of-range indices are ignored.
    pub fn select_test(&mut self, index: usize) {
        if matches!(self.step, ChallengeStep::Choose) && index < self.challenge.tests.len() {
            self.step = ChallengeStep::Input { test_index: index };
        }
    }

    /// `Input -> Choose`, dropping the selection.
    pub fn back_to_choose(&mut self) {
        if matches!(self.step, ChallengeStep::Input { .. }) {
            self.step = ChallengeStep::Choose;
        }
    }

    /// Build the resolve request for the current selection.
    ///
    /// Returns `None` outside the `Input` step or for a negative value; the
    /// UI hints at 0-20 but only non-negativity is enforced client-side.
    #[must_use]
    pub fn attempt_request(&self, player_value: i32, use_refuge: bool) -> Option<AttemptRequest> {
        let ChallengeStep::Input { test_index } = self.step else {
            return None;
        };
        if player_value < 0 {
            return None;
        }
        Some(AttemptRequest {
            challenge_id: self.challenge.id.clone(),
            test_index,
            player_value,
            use_refuge: use_refuge && self.challenge.allow_refuge_defense,
        })
    }

    /// `Input -> Result` with the server's outcome bundle.
    pub fn complete(&mut self, outcome: AttemptOutcome) {
        if matches!(self.step, ChallengeStep::Input { .. }) {
            self.step = ChallengeStep::Result { outcome };
        }
    }
}
