use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque document identifier assigned at intake time.
///
/// Every call to [`DocumentId::fresh`] yields a new random id, so two
/// documents ingested from identically named files still differ.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }

    /// The short hex string for human display (e.g. "a1b2c3").
    pub fn short(&self) -> String {
        let simple = self.0.simple().to_string();
        simple[..6].to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.short())
    }
}
