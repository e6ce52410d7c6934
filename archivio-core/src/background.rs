//! One-time-fillable character background sheet.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONTACTS_BUDGET: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub value: i32,
}

/// Sheet exchanged with `GET`/`POST /background/me`.
///
/// Once `locked_for_player` is set the client renders every field read-only;
/// unlocking is a Narration-side operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundSheet {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub risorse: i32,
    #[serde(default)]
    pub seguaci: i32,
    #[serde(default = "default_rifugio")]
    pub rifugio: i32,
    #[serde(default)]
    pub mentor: i32,
    #[serde(default)]
    pub notoriety: i32,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub locked_for_player: bool,
}

fn default_rifugio() -> i32 {
    1
}

impl Default for BackgroundSheet {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            risorse: 0,
            seguaci: 0,
            rifugio: default_rifugio(),
            mentor: 0,
            notoriety: 0,
            contacts: Vec::new(),
            locked_for_player: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackgroundError {
    #[error("Il tuo Background è già stato salvato")]
    Locked,
    #[error("RIFUGIO deve essere tra 1 e 5")]
    RifugioOutOfRange,
    #[error("RISORSE deve essere tra 0 e 20")]
    RisorseOutOfRange,
    #[error("La somma dei punti CONTATTI non può superare {CONTACTS_BUDGET}")]
    ContactsOverBudget,
}

impl BackgroundSheet {
    #[must_use]
    pub fn contacts_total(&self) -> i32 {
        self.contacts.iter().map(|c| c.value).sum()
    }

    /// Client-side mirror of the server validation, checked before any
    /// request is built. A locked sheet always fails: submission must not
    /// reach the network (the UI is read-only at that point).
    pub fn validate(&self) -> Result<(), BackgroundError> {
        if self.locked_for_player {
            return Err(BackgroundError::Locked);
        }
        if !(1..=5).contains(&self.rifugio) {
            return Err(BackgroundError::RifugioOutOfRange);
        }
        if !(0..=20).contains(&self.risorse) {
            return Err(BackgroundError::RisorseOutOfRange);
        }
        if self.contacts_total() > CONTACTS_BUDGET {
            return Err(BackgroundError::ContactsOverBudget);
        }
        Ok(())
    }

    /// Payload for `POST /background/me`: blank-named contacts are dropped
    /// and the lock flag is always set - there is no draft state.
    #[must_use]
    pub fn submission(&self) -> BackgroundSheet {
        BackgroundSheet {
            contacts: self
                .contacts
                .iter()
                .filter(|c| !c.name.trim().is_empty())
                .map(|c| Contact {
                    name: c.name.trim().to_string(),
                    value: c.value,
                })
                .collect(),
            locked_for_player: true,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> BackgroundSheet {
        BackgroundSheet {
            risorse: 10,
            seguaci: 2,
            rifugio: 3,
            mentor: 1,
            notoriety: 0,
            contacts: vec![
                Contact { name: "polizia".into(), value: 3 },
                Contact { name: "criminalità".into(), value: 2 },
            ],
            ..BackgroundSheet::default()
        }
    }

    #[test]
    fn valid_sheet_passes() {
        assert!(sheet().validate().is_ok());
    }

    #[test]
    fn locked_sheet_is_rejected_before_any_request() {
        let mut s = sheet();
        s.locked_for_player = true;
        assert_eq!(s.validate(), Err(BackgroundError::Locked));
    }

    #[test]
    fn rifugio_bounds_are_one_to_five() {
        let mut s = sheet();
        s.rifugio = 0;
        assert_eq!(s.validate(), Err(BackgroundError::RifugioOutOfRange));
        s.rifugio = 6;
        assert_eq!(s.validate(), Err(BackgroundError::RifugioOutOfRange));
        s.rifugio = 5;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn risorse_bounds_are_zero_to_twenty() {
        let mut s = sheet();
        s.risorse = -1;
        assert_eq!(s.validate(), Err(BackgroundError::RisorseOutOfRange));
        s.risorse = 21;
        assert_eq!(s.validate(), Err(BackgroundError::RisorseOutOfRange));
    }

    #[test]
    fn contacts_budget_is_twenty() {
        let mut s = sheet();
        s.contacts = vec![
            Contact { name: "a".into(), value: 15 },
            Contact { name: "b".into(), value: 6 },
        ];
        assert_eq!(s.validate(), Err(BackgroundError::ContactsOverBudget));
        s.contacts[1].value = 5;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn submission_trims_contacts_and_sets_the_lock() {
        let mut s = sheet();
        s.contacts.push(Contact { name: "   ".into(), value: 4 });
        let payload = s.submission();
        assert!(payload.locked_for_player);
        assert_eq!(payload.contacts.len(), 2);
        assert!(payload.contacts.iter().all(|c| !c.name.is_empty()));
    }

    #[test]
    fn missing_fields_deserialize_with_defaults() {
        let s: BackgroundSheet = serde_json::from_str("{}").unwrap();
        assert_eq!(s.rifugio, 1);
        assert!(!s.locked_for_player);
        assert!(s.contacts.is_empty());
    }
}
