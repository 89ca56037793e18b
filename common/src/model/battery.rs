use serde::{Deserialize, Serialize};

/// A battery record as served by the backend.
///
/// A battery may be attached to at most one device at a time. The attachment
/// itself is not part of this model; it is only observable through the owning
/// device's `batteries` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    /// Backend-assigned identifier. Opaque to the client.
    pub id: i64,
    /// Non-empty display name, unique among batteries.
    pub name: String,
}
