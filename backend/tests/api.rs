//! End-to-end tests for the device and battery API, one temporary database
//! per test.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use tempfile::TempDir;

use backend::db::Db;
use backend::services;
use common::model::battery::Battery;
use common::model::device::Device;
use common::requests::{BatteryAttach, BatteryPayload, DevicePayload};

fn test_db(dir: &TempDir) -> Db {
    let db = Db::new(dir.path().join("fleet.sqlite"));
    db.init().unwrap();
    db
}

macro_rules! spawn_app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($db.clone()))
                .service(services::devices::configure_routes())
                .service(services::batteries::configure_routes()),
        )
        .await
    };
}

macro_rules! create_device {
    ($app:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/devices/")
            .set_json(DevicePayload {
                name: $name.to_string(),
            })
            .to_request();
        let device: Device = test::call_and_read_body_json(&$app, req).await;
        device
    }};
}

macro_rules! create_battery {
    ($app:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/batteries/")
            .set_json(BatteryPayload {
                name: $name.to_string(),
            })
            .to_request();
        let battery: Battery = test::call_and_read_body_json(&$app, req).await;
        battery
    }};
}

macro_rules! attach {
    ($app:expr, $battery_id:expr, $device_id:expr) => {{
        let req = test::TestRequest::post()
            .uri(&format!("/api/batteries/{}/attach", $battery_id))
            .set_json(BatteryAttach {
                device_id: $device_id,
            })
            .to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! get_device {
    ($app:expr, $device_id:expr) => {{
        let req = test::TestRequest::get()
            .uri(&format!("/api/devices/{}/", $device_id))
            .to_request();
        let device: Device = test::call_and_read_body_json(&$app, req).await;
        device
    }};
}

#[actix_web::test]
async fn create_then_list_shows_the_device_exactly_once() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    create_device!(app, "Pump-1");

    let req = test::TestRequest::get().uri("/api/devices/").to_request();
    let devices: Vec<Device> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].name, "Pump-1");
    assert!(devices[0].batteries.is_empty());
}

#[actix_web::test]
async fn unknown_ids_report_not_found() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let req = test::TestRequest::get().uri("/api/devices/99/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/batteries/99/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn attach_is_visible_after_refetching_the_device() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let device = create_device!(app, "Pump-1");
    let battery = create_battery!(app, "Cell-A");

    let resp = attach!(app, battery.id, device.id);
    assert_eq!(resp.status(), StatusCode::OK);

    let device = get_device!(app, device.id);
    assert_eq!(device.name, "Pump-1");
    assert_eq!(device.batteries, vec![battery]);
}

#[actix_web::test]
async fn device_centric_attach_route_produces_the_same_state() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let device = create_device!(app, "Pump-1");
    let battery = create_battery!(app, "Cell-A");

    let req = test::TestRequest::post()
        .uri(&format!(
            "/api/devices/{}/batteries/{}/attach",
            device.id, battery.id
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let device = get_device!(app, device.id);
    assert_eq!(device.batteries, vec![battery]);
}

#[actix_web::test]
async fn repeated_attach_is_rejected_and_leaves_no_duplicate() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let device = create_device!(app, "Pump-1");
    let battery = create_battery!(app, "Cell-A");

    assert_eq!(attach!(app, battery.id, device.id).status(), StatusCode::OK);

    let resp = attach!(app, battery.id, device.id);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["detail"],
        "Battery is already assigned to another device"
    );

    let device = get_device!(app, device.id);
    assert_eq!(device.batteries.len(), 1);
}

#[actix_web::test]
async fn attaching_a_deleted_battery_is_not_found_and_leaves_the_device_unchanged() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let device = create_device!(app, "Pump-1");
    let battery = create_battery!(app, "Cell-A");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/batteries/{}/", battery.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let resp = attach!(app, battery.id, device.id);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let device = get_device!(app, device.id);
    assert!(device.batteries.is_empty());
}

#[actix_web::test]
async fn attaching_to_a_missing_device_is_not_found() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let battery = create_battery!(app, "Cell-A");
    let resp = attach!(app, battery.id, 42);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_a_device_detaches_its_batteries() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let device = create_device!(app, "Pump-1");
    let battery = create_battery!(app, "Cell-A");
    assert_eq!(attach!(app, battery.id, device.id).status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/devices/{}/", device.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/devices/").to_request();
    let devices: Vec<Device> = test::call_and_read_body_json(&app, req).await;
    assert!(devices.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/devices/{}/", device.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    // The battery survives and is free to attach again.
    let other = create_device!(app, "Pump-2");
    assert_eq!(attach!(app, battery.id, other.id).status(), StatusCode::OK);
}

#[actix_web::test]
async fn deleting_twice_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let device = create_device!(app, "Pump-1");
    let uri = format!("/api/devices/{}/", device.id);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn empty_names_are_rejected() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/devices/")
        .set_json(DevicePayload {
            name: "   ".to_string(),
        })
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let battery = create_battery!(app, "Cell-A");
    let req = test::TestRequest::put()
        .uri(&format!("/api/batteries/{}/", battery.id))
        .set_json(BatteryPayload {
            name: String::new(),
        })
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn duplicate_names_are_rejected() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    create_device!(app, "Pump-1");
    let req = test::TestRequest::post()
        .uri("/api/devices/")
        .set_json(DevicePayload {
            name: "Pump-1".to_string(),
        })
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn a_device_holds_at_most_five_batteries() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let device = create_device!(app, "Pump-1");
    for i in 0..5 {
        let battery = create_battery!(app, format!("Cell-{}", i));
        assert_eq!(attach!(app, battery.id, device.id).status(), StatusCode::OK);
    }

    let extra = create_battery!(app, "Cell-extra");
    let resp = attach!(app, extra.id, device.id);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Cannot add more than 5 batteries to a device");

    assert_eq!(get_device!(app, device.id).batteries.len(), 5);
}

#[actix_web::test]
async fn detach_removes_the_battery_and_frees_it() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let device = create_device!(app, "Pump-1");
    let battery = create_battery!(app, "Cell-A");
    assert_eq!(attach!(app, battery.id, device.id).status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!(
            "/api/devices/{}/batteries/{}",
            device.id, battery.id
        ))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    assert!(get_device!(app, device.id).batteries.is_empty());
    assert_eq!(attach!(app, battery.id, device.id).status(), StatusCode::OK);
}

#[actix_web::test]
async fn detaching_an_unattached_battery_is_not_found() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let device = create_device!(app, "Pump-1");
    let battery = create_battery!(app, "Cell-A");

    let req = test::TestRequest::delete()
        .uri(&format!(
            "/api/devices/{}/batteries/{}",
            device.id, battery.id
        ))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn rename_is_confirmed_by_a_refetch() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let device = create_device!(app, "Pump-1");
    let req = test::TestRequest::put()
        .uri(&format!("/api/devices/{}/", device.id))
        .set_json(DevicePayload {
            name: "Pump-1b".to_string(),
        })
        .to_request();
    let updated: Device = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.name, "Pump-1b");

    assert_eq!(get_device!(app, device.id).name, "Pump-1b");
}

#[actix_web::test]
async fn updating_a_missing_device_is_not_found() {
    let dir = TempDir::new().unwrap();
    let db = test_db(&dir);
    let app = spawn_app!(db);

    let req = test::TestRequest::put()
        .uri("/api/devices/7/")
        .set_json(DevicePayload {
            name: "Pump-7".to_string(),
        })
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
