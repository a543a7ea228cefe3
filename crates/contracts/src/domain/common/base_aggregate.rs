use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Base aggregate with the fields every aggregate carries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record identifier
    pub id: Id,
    /// Free-form comment
    pub comment: Option<String>,
    /// Lifecycle metadata
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Create a fresh aggregate base
    pub fn new(id: Id) -> Self {
        Self {
            id,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Create a base with existing metadata (loading from the database)
    pub fn with_metadata(id: Id, comment: Option<String>, metadata: EntityMetadata) -> Self {
        Self {
            id,
            comment,
            metadata,
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
