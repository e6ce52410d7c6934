//! In-memory conversation transcript.
//!
//! Append-only and client-local; the durable copy lives in the server-side
//! archive. Submissions that wait on the network are tracked with an
//! explicit pending/committed/rolled-back status instead of ad hoc list
//! splicing, so the rollback-on-failure contract is checkable.

use crate::aid::AidUseResult;
use crate::challenge::AttemptOutcome;

/// One transcript item.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversationEntry {
    /// Free-text question typed by the player.
    UserText(String),
    /// Oracle answer to a question.
    OracleText(String),
    /// Inline offer to attempt a matched challenge.
    ChallengeOffer { challenge_id: String, name: String, description: String },
    /// Outcome bundle of a resolved challenge.
    ChallengeResult { name: String, outcome: AttemptOutcome },
    /// Redeemed aid text.
    AidResult { name: String, result: AidUseResult },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Rendered optimistically while the request is in flight.
    Pending,
    Committed,
    /// Removed from the visible transcript after a failed request.
    RolledBack,
}

#[derive(Debug, Clone, PartialEq)]
struct LogItem {
    entry: ConversationEntry,
    status: EntryStatus,
}

/// Ordered transcript with optimistic-submission bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationLog {
    items: Vec<LogItem>,
    next_id: usize,
}

/// Handle to a pending entry, used to commit or roll it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryId(usize);

impl ConversationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry that is immediately final.
    pub fn push(&mut self, entry: ConversationEntry) {
        self.items.push(LogItem {
            entry,
            status: EntryStatus::Committed,
        });
    }

    /// Append an optimistic entry; resolve it with [`ConversationLog::commit`]
    /// or [`ConversationLog::rollback`].
    pub fn push_pending(&mut self, entry: ConversationEntry) -> EntryId {
        let id = EntryId(self.items.len());
        self.items.push(LogItem {
            entry,
            status: EntryStatus::Pending,
        });
        id
    }

    pub fn commit(&mut self, id: EntryId) {
        if let Some(item) = self.items.get_mut(id.0)
            && item.status == EntryStatus::Pending
        {
            item.status = EntryStatus::Committed;
        }
    }

    pub fn rollback(&mut self, id: EntryId) {
        if let Some(item) = self.items.get_mut(id.0)
            && item.status == EntryStatus::Pending
        {
            item.status = EntryStatus::RolledBack;
        }
    }

    /// Entries shown in the transcript: everything not rolled back.
    pub fn visible(&self) -> impl Iterator<Item = &ConversationEntry> {
        self.items
            .iter()
            .filter(|i| i.status != EntryStatus::RolledBack)
            .map(|i| &i.entry)
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_len() == 0
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.items.iter().any(|i| i.status == EntryStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str) -> ConversationEntry {
        ConversationEntry::UserText(text.to_string())
    }

    #[test]
    fn committed_entries_appear_in_order() {
        let mut log = ConversationLog::new();
        log.push(question("prima"));
        log.push(ConversationEntry::OracleText("risposta".into()));
        let texts: Vec<_> = log.visible().collect();
        assert_eq!(texts.len(), 2);
        assert!(matches!(texts[0], ConversationEntry::UserText(t) if t == "prima"));
        assert!(matches!(texts[1], ConversationEntry::OracleText(t) if t == "risposta"));
    }

    #[test]
    fn pending_entry_is_visible_until_rolled_back() {
        let mut log = ConversationLog::new();
        let id = log.push_pending(question("in volo"));
        assert_eq!(log.visible_len(), 1);
        assert!(log.has_pending());

        log.rollback(id);
        assert!(log.is_empty());
        assert!(!log.has_pending());
    }

    #[test]
    fn commit_finalizes_the_entry() {
        let mut log = ConversationLog::new();
        let id = log.push_pending(question("in volo"));
        log.commit(id);
        assert!(!log.has_pending());
        assert_eq!(log.visible_len(), 1);
        // A late rollback of a committed entry is a no-op.
        log.rollback(id);
        assert_eq!(log.visible_len(), 1);
    }

    #[test]
    fn rollback_leaves_earlier_entries_untouched() {
        let mut log = ConversationLog::new();
        log.push(question("vecchia"));
        log.push(ConversationEntry::OracleText("risposta".into()));
        let id = log.push_pending(question("fallita"));
        log.rollback(id);
        assert_eq!(log.visible_len(), 2);
    }
}
