use serde::{Deserialize, Serialize};

/// Request payload for creating or renaming a device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicePayload {
    pub name: String,
}

/// Request payload for creating or renaming a battery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryPayload {
    pub name: String,
}

/// Request payload for the battery-centric attach endpoint
/// (`POST /api/batteries/{id}/attach`): the device that will own the battery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryAttach {
    pub device_id: i64,
}
