use common::model::battery::Battery;
use common::model::device::Device;
use common::sync::coordinator::RelationCoordinator;
use common::sync::RemoteResource;

/// State of the device detail view.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct DeviceDetailComponent {
    /// The displayed device, replaced wholesale by every confirming re-fetch.
    pub device: RemoteResource<Device>,
    /// The full battery collection backing the attach select.
    pub choices: Vec<Battery>,
    /// Battery currently chosen in the attach select, if any.
    pub selected: Option<i64>,
    /// Whether the rename form is open.
    pub editing: bool,
    /// Rename form input.
    pub name: String,
    /// Last user-visible error, cleared by the next successful operation.
    pub error: Option<String>,
    /// Serializes attach/detach chains and drops stale re-fetches.
    pub coordinator: RelationCoordinator,
    /// Guard for the one-time first-render fetch.
    pub loaded: bool,
}

impl DeviceDetailComponent {
    pub fn new() -> Self {
        DeviceDetailComponent {
            device: RemoteResource::Loading,
            choices: Vec::new(),
            selected: None,
            editing: false,
            name: String::new(),
            error: None,
            coordinator: RelationCoordinator::new(),
            loaded: false,
        }
    }
}
