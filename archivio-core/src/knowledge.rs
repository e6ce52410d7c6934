//! Knowledge-base documents feeding the oracle (admin-managed).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeDoc {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub created_by: String,
}

fn default_category() -> String {
    "general".to_string()
}

/// Body of `POST /knowledge`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeCreate {
    pub title: String,
    pub content: String,
    pub category: String,
}

/// Only plain-text formats are accepted by the upload endpoint.
#[must_use]
pub fn uploadable_filename(name: &str) -> bool {
    name.ends_with(".txt") || name.ends_with(".md")
}
