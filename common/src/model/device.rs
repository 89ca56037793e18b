use serde::{Deserialize, Serialize};

use crate::model::battery::Battery;

/// A device record as served by the backend.
///
/// The `batteries` collection is owned by the backend: list endpoints serve it
/// empty, the detail endpoint serves the attached batteries in backend order,
/// and the client never edits it directly: it changes only through the attach
/// and detach operations followed by a re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Backend-assigned identifier. Opaque to the client.
    pub id: i64,
    /// Non-empty display name, unique among devices.
    pub name: String,
    /// Batteries currently attached to this device, ordered by the backend.
    #[serde(default)]
    pub batteries: Vec<Battery>,
}
