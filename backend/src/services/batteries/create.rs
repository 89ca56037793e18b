use actix_web::{web, HttpResponse, Responder};
use rusqlite::params;

use common::model::battery::Battery;
use common::requests::BatteryPayload;

use crate::db::Db;
use crate::services::error::ServiceError;
use crate::services::require_name;

pub async fn process(db: web::Data<Db>, payload: web::Json<BatteryPayload>) -> impl Responder {
    match create_battery(&db, &payload.name) {
        Ok(battery) => HttpResponse::Ok().json(battery),
        Err(e) => e.to_response(),
    }
}

fn create_battery(db: &Db, name: &str) -> Result<Battery, ServiceError> {
    let name = require_name(name)?;
    let conn = db.connect()?;
    conn.execute("INSERT INTO batteries (name) VALUES (?1)", params![name])?;
    Ok(Battery {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
    })
}
