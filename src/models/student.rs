//! Student record
//!
//! The only entity of the registry. Everything except `id` and `name` is
//! carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a student record.
pub type StudentId = i64;

/// A student as stored and exchanged over HTTP.
///
/// `id` is `None` on first submission and is filled in by the store.
/// Unknown JSON attributes land in `attributes` and are returned verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: Option<StudentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Student {
    /// Creates an unsaved student with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the same record carrying `id`.
    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }
}
