use actix_web::{web, HttpResponse, Responder};
use rusqlite::params;

use common::model::device::Device;

use crate::db::Db;
use crate::services::devices::fetch_device;
use crate::services::error::ServiceError;

pub async fn process(db: web::Data<Db>, device_id: web::Path<i64>) -> impl Responder {
    match delete_device(&db, *device_id) {
        Ok(Some(device)) => HttpResponse::Ok().json(device),
        Ok(None) => ServiceError::NotFound("Device not found".to_string()).to_response(),
        Err(e) => e.to_response(),
    }
}

/// Deletes a device and returns its last state. Attached batteries survive:
/// the foreign key clears their owner (`ON DELETE SET NULL`).
fn delete_device(db: &Db, device_id: i64) -> Result<Option<Device>, ServiceError> {
    let conn = db.connect()?;
    let Some(device) = fetch_device(&conn, device_id)? else {
        return Ok(None);
    };
    conn.execute("DELETE FROM devices WHERE id = ?1", params![device_id])?;
    Ok(Some(device))
}
