use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Admin,
}

impl Role {
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Profile returned by `/auth/me` and embedded in the login response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub max_actions: i32,
    pub used_actions: i32,
}

impl User {
    #[must_use]
    pub fn quota(&self) -> ActionQuota {
        ActionQuota {
            max_actions: self.max_actions,
            used_actions: self.used_actions,
        }
    }
}

/// Per-period action budget for chat, challenge and aid interactions.
///
/// The server is the enforcement point; the client only decides whether to
/// bother issuing a request. `/followers/status` can raise the effective
/// ceiling, which is folded in via [`ActionQuota::with_follower_bonus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionQuota {
    pub max_actions: i32,
    pub used_actions: i32,
}

impl ActionQuota {
    #[must_use]
    pub fn remaining(&self) -> i32 {
        self.max_actions - self.used_actions
    }

    #[must_use]
    pub fn exhausted(&self) -> bool {
        self.remaining() <= 0
    }

    /// Fold in the follower-adjusted remaining count reported by the server.
    ///
    /// The endpoint reports how many actions are still available *before*
    /// the next one, so the effective ceiling is that count plus what has
    /// already been spent.
    #[must_use]
    pub fn with_follower_bonus(self, remaining_before: i32) -> ActionQuota {
        ActionQuota {
            max_actions: remaining_before + self.used_actions,
            used_actions: self.used_actions,
        }
    }
}

/// Response shape of `GET /followers/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerStatus {
    pub remaining_actions_before: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> User {
        User {
            id: "u-1".into(),
            email: "p@example.com".into(),
            username: "player".into(),
            role: Role::Player,
            max_actions: 10,
            used_actions: 3,
        }
    }

    #[test]
    fn remaining_actions_subtract_used_from_max() {
        assert_eq!(player().quota().remaining(), 7);
        assert!(!player().quota().exhausted());
    }

    #[test]
    fn quota_exhausted_at_zero_and_below() {
        let q = ActionQuota {
            max_actions: 5,
            used_actions: 5,
        };
        assert!(q.exhausted());
        let q = ActionQuota {
            max_actions: 5,
            used_actions: 7,
        };
        assert!(q.exhausted());
    }

    #[test]
    fn follower_bonus_raises_effective_ceiling() {
        let q = player().quota().with_follower_bonus(9);
        assert_eq!(q.max_actions, 12);
        assert_eq!(q.remaining(), 9);
    }

    #[test]
    fn role_parses_lowercase_wire_values() {
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert!(role.is_admin());
        let role: Role = serde_json::from_str("\"player\"").unwrap();
        assert!(!role.is_admin());
    }
}
