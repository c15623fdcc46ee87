//! Team: the only input entity the generator knows about.

use serde::{Deserialize, Serialize};

/// Identifier used for the synthetic placeholder that pads an odd round robin.
pub const BYE_TEAM_ID: &str = "bye";

/// A competing team. Only `id` ends up in generated matches; `name` is checked for presence.
/// Absent fields deserialize empty so validation reports them.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: String,
    pub name: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Placeholder added to odd-sized round robins. Never appears in output.
    pub(crate) fn bye() -> Self {
        Self::new(BYE_TEAM_ID, "BYE")
    }

    pub fn is_bye(&self) -> bool {
        self.id == BYE_TEAM_ID
    }
}
