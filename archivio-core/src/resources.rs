//! Resource ledger and purchasable items.

use serde::{Deserialize, Serialize};

/// A Narration-defined item purchasable with background resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cost_resources: i32,
    /// ISO date the spent points stay locked until.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_until: Option<String>,
}

/// Snapshot from `GET /resources/available`.
///
/// The server is authoritative for all three figures; the client never
/// recomputes `available_resources` locally, only checks consistency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceState {
    #[serde(default)]
    pub total_resources: i32,
    #[serde(default)]
    pub locked_resources: i32,
    #[serde(default)]
    pub available_resources: i32,
    #[serde(default)]
    pub items: Vec<ResourceItem>,
}

impl ResourceState {
    /// `available = total - locked`, which the server upholds.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.available_resources == self.total_resources - self.locked_resources
    }

    /// Whether the purchase button for `item` is enabled.
    #[must_use]
    pub fn can_purchase(&self, item: &ResourceItem) -> bool {
        item.cost_resources <= self.available_resources
    }
}
