use actix_web::{web, HttpResponse, Responder};
use rusqlite::params;

use common::model::device::Device;
use common::requests::DevicePayload;

use crate::db::Db;
use crate::services::devices::fetch_device;
use crate::services::error::ServiceError;
use crate::services::require_name;

pub async fn process(
    db: web::Data<Db>,
    device_id: web::Path<i64>,
    payload: web::Json<DevicePayload>,
) -> impl Responder {
    match update_device(&db, *device_id, &payload.name) {
        Ok(Some(device)) => HttpResponse::Ok().json(device),
        Ok(None) => ServiceError::NotFound("Device not found".to_string()).to_response(),
        Err(e) => e.to_response(),
    }
}

fn update_device(db: &Db, device_id: i64, name: &str) -> Result<Option<Device>, ServiceError> {
    let name = require_name(name)?;
    let conn = db.connect()?;
    let changed = conn.execute(
        "UPDATE devices SET name = ?1 WHERE id = ?2",
        params![name, device_id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    fetch_device(&conn, device_id)
}
