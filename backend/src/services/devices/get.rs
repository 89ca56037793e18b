use actix_web::{web, HttpResponse, Responder};
use rusqlite::{params, Connection, OptionalExtension};

use common::model::battery::Battery;
use common::model::device::Device;

use crate::db::Db;
use crate::services::error::ServiceError;

pub async fn process(db: web::Data<Db>, device_id: web::Path<i64>) -> impl Responder {
    match get_device(&db, *device_id) {
        Ok(Some(device)) => HttpResponse::Ok().json(device),
        Ok(None) => ServiceError::NotFound("Device not found".to_string()).to_response(),
        Err(e) => e.to_response(),
    }
}

fn get_device(db: &Db, device_id: i64) -> Result<Option<Device>, ServiceError> {
    let conn = db.connect()?;
    fetch_device(&conn, device_id)
}

/// Reads one device together with its attached batteries in id order.
/// Shared with the update and delete endpoints, which return the full record.
pub(crate) fn fetch_device(
    conn: &Connection,
    device_id: i64,
) -> Result<Option<Device>, ServiceError> {
    let device: Option<Device> = conn
        .query_row(
            "SELECT id, name FROM devices WHERE id = ?1",
            params![device_id],
            |row| {
                Ok(Device {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    batteries: Vec::new(),
                })
            },
        )
        .optional()?;
    let Some(mut device) = device else {
        return Ok(None);
    };

    let mut stmt =
        conn.prepare("SELECT id, name FROM batteries WHERE device_id = ?1 ORDER BY id")?;
    let rows = stmt.query_map(params![device_id], |row| {
        Ok(Battery {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    for battery in rows {
        device.batteries.push(battery?);
    }

    Ok(Some(device))
}
