//! L'Archivio client core
//!
//! Platform-agnostic view-model logic for the L'Archivio event companion.
//! This crate holds the wire types the REST backend exchanges with the
//! browser client, plus the pure pieces of client behavior worth testing
//! off-screen: challenge keyword dispatch, aid level eligibility, the modal
//! state machines, conversation bookkeeping and form validation. It never
//! talks to the network itself.

#![forbid(unsafe_code)]

pub mod aid;
pub mod aid_flow;
pub mod background;
pub mod challenge;
pub mod challenge_flow;
pub mod conversation;
pub mod history;
pub mod knowledge;
pub mod resources;
pub mod settings;
pub mod user;

// Re-export commonly used types
pub use aid::{
    AID_ATTRIBUTES, Aid, AidLevel, AidUseRequest, AidUseResult, DeclaredValues, QualifyingAid,
    UsedAid, can_redeem, qualifying_aids, qualifying_levels,
};
pub use aid_flow::{AidFlow, AidStep};
pub use background::{BackgroundError, BackgroundSheet, Contact};
pub use challenge::{
    AttemptOutcome, AttemptRequest, Challenge, ChallengeTest, Outcome, find_challenge,
};
pub use challenge_flow::{ChallengeFlow, ChallengeStep};
pub use conversation::{ConversationEntry, ConversationLog, EntryStatus};
pub use history::{ChallengeRecord, HistoryEntry};
pub use knowledge::{KnowledgeCreate, KnowledgeDoc};
pub use resources::{ResourceItem, ResourceState};
pub use settings::EventSettings;
pub use user::{ActionQuota, Role, User};
