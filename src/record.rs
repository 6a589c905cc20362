use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A payload stored in the spatial index.
///
/// Records carry an integer identifier and a display name. Identifiers are
/// assumed unique across the tree; when duplicates are inserted anyway, id
/// lookups and deletions act on the first entry in depth-first order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier of the record.
    pub id: u64,
    /// Human-readable name.
    pub name: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record(#{} {})", self.id, self.name)
    }
}
