use yew::prelude::*;

use crate::app::Route;

/// Properties for the device detail view.
#[derive(Properties, PartialEq, Clone)]
pub struct DeviceDetailProps {
    /// Id of the device to display. The only state shared with other views.
    pub device_id: i64,
    /// Emitted when this view wants to leave, e.g. after a confirmed delete
    /// or when the device turns out to be gone mid-workflow.
    pub on_navigate: Callback<Route>,
}
