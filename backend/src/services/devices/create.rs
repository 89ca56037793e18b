use actix_web::{web, HttpResponse, Responder};
use rusqlite::params;

use common::model::device::Device;
use common::requests::DevicePayload;

use crate::db::Db;
use crate::services::error::ServiceError;
use crate::services::require_name;

pub async fn process(db: web::Data<Db>, payload: web::Json<DevicePayload>) -> impl Responder {
    match create_device(&db, &payload.name) {
        Ok(device) => HttpResponse::Ok().json(device),
        Err(e) => e.to_response(),
    }
}

fn create_device(db: &Db, name: &str) -> Result<Device, ServiceError> {
    let name = require_name(name)?;
    let conn = db.connect()?;
    conn.execute("INSERT INTO devices (name) VALUES (?1)", params![name])?;
    Ok(Device {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        batteries: Vec::new(),
    })
}
