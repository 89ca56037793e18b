//! Resource client: typed requests against the backend REST API.
//!
//! Every function converts the HTTP outcome into the shared `ApiError`
//! taxonomy at the request site. `get_*` surface a missing resource as
//! `Ok(None)`, a distinct outcome rather than an error; mutations report a
//! missing id as `ApiError::NotFound`. Failures are logged here and turned
//! into view state by the caller; nothing is retried automatically.

use gloo_console::error;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use common::model::battery::Battery;
use common::model::device::Device;
use common::requests::{BatteryAttach, BatteryPayload, DevicePayload};
use common::sync::ApiError;

pub async fn list_devices() -> Result<Vec<Device>, ApiError> {
    let response = send(Request::get("/api/devices/").send().await)?;
    expect_json(response).await
}

pub async fn get_device(device_id: i64) -> Result<Option<Device>, ApiError> {
    let url = format!("/api/devices/{}/", device_id);
    let response = send(Request::get(&url).send().await)?;
    if response.status() == 404 {
        return Ok(None);
    }
    expect_json(response).await.map(Some)
}

pub async fn create_device(name: String) -> Result<Device, ApiError> {
    let response = send(
        Request::post("/api/devices/")
            .json(&DevicePayload { name })
            .unwrap()
            .send()
            .await,
    )?;
    expect_json(response).await
}

pub async fn update_device(device_id: i64, name: String) -> Result<Device, ApiError> {
    let url = format!("/api/devices/{}/", device_id);
    let response = send(
        Request::put(&url)
            .json(&DevicePayload { name })
            .unwrap()
            .send()
            .await,
    )?;
    expect_json(response).await
}

pub async fn delete_device(device_id: i64) -> Result<(), ApiError> {
    let url = format!("/api/devices/{}/", device_id);
    let response = send(Request::delete(&url).send().await)?;
    expect_ok(response).await
}

pub async fn list_batteries() -> Result<Vec<Battery>, ApiError> {
    let response = send(Request::get("/api/batteries/").send().await)?;
    expect_json(response).await
}

pub async fn get_battery(battery_id: i64) -> Result<Option<Battery>, ApiError> {
    let url = format!("/api/batteries/{}/", battery_id);
    let response = send(Request::get(&url).send().await)?;
    if response.status() == 404 {
        return Ok(None);
    }
    expect_json(response).await.map(Some)
}

pub async fn create_battery(name: String) -> Result<Battery, ApiError> {
    let response = send(
        Request::post("/api/batteries/")
            .json(&BatteryPayload { name })
            .unwrap()
            .send()
            .await,
    )?;
    expect_json(response).await
}

pub async fn update_battery(battery_id: i64, name: String) -> Result<Battery, ApiError> {
    let url = format!("/api/batteries/{}/", battery_id);
    let response = send(
        Request::put(&url)
            .json(&BatteryPayload { name })
            .unwrap()
            .send()
            .await,
    )?;
    expect_json(response).await
}

pub async fn delete_battery(battery_id: i64) -> Result<(), ApiError> {
    let url = format!("/api/batteries/{}/", battery_id);
    let response = send(Request::delete(&url).send().await)?;
    expect_ok(response).await
}

/// The single client-side attach path (battery-centric route). The backend's
/// device-centric route is an adapter over the same operation and is not
/// duplicated here.
pub async fn attach_battery(battery_id: i64, device_id: i64) -> Result<(), ApiError> {
    let url = format!("/api/batteries/{}/attach", battery_id);
    let response = send(
        Request::post(&url)
            .json(&BatteryAttach { device_id })
            .unwrap()
            .send()
            .await,
    )?;
    expect_ok(response).await
}

pub async fn detach_battery(device_id: i64, battery_id: i64) -> Result<(), ApiError> {
    let url = format!("/api/devices/{}/batteries/{}", device_id, battery_id);
    let response = send(Request::delete(&url).send().await)?;
    expect_ok(response).await
}

fn send(result: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
    result.map_err(|err| {
        error!("request failed:", err.to_string());
        ApiError::Network(err.to_string())
    })
}

async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(|err| {
        error!("invalid response body:", err.to_string());
        ApiError::Server(response.status(), err.to_string())
    })
}

async fn expect_ok(response: Response) -> Result<(), ApiError> {
    check_status(response).await.map(|_| ())
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|d| d.as_str())
                .map(str::to_string)
        })
        .unwrap_or(text);
    error!("request rejected:", status, detail.clone());
    Err(match status {
        404 => ApiError::NotFound,
        400 | 422 => ApiError::Validation(detail),
        _ => ApiError::Server(status, detail),
    })
}
