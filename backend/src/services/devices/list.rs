use actix_web::{web, HttpResponse, Responder};

use common::model::device::Device;

use crate::db::Db;
use crate::services::error::ServiceError;

pub async fn process(db: web::Data<Db>) -> impl Responder {
    match list_devices(&db) {
        Ok(devices) => HttpResponse::Ok().json(devices),
        Err(e) => e.to_response(),
    }
}

/// Lists all devices in id order. The battery collections are served empty
/// here; only the detail endpoint embeds them.
fn list_devices(db: &Db) -> Result<Vec<Device>, ServiceError> {
    let conn = db.connect()?;
    let mut stmt = conn.prepare("SELECT id, name FROM devices ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Device {
            id: row.get(0)?,
            name: row.get(1)?,
            batteries: Vec::new(),
        })
    })?;

    let mut devices = Vec::new();
    for device in rows {
        devices.push(device?);
    }
    Ok(devices)
}
