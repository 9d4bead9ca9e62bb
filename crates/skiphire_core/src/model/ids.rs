//! Identifiers for catalog entities

use serde::{Deserialize, Serialize};

/// Identifier assigned to a skip by the catalog service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipId(pub u64);

impl std::fmt::Display for SkipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a skip within one fetched list.
///
/// The catalog does not guarantee unique ids, so the list position is part of
/// the identity. Two entries sharing an id are still distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkipKey {
    /// 0-based position in the full fetched list
    pub index: usize,
    pub id: SkipId,
}

impl SkipKey {
    pub fn new(index: usize, id: SkipId) -> Self {
        Self { index, id }
    }
}
