use actix_web::{web, HttpResponse, Responder};
use rusqlite::params;

use common::model::battery::Battery;
use common::requests::BatteryPayload;

use crate::db::Db;
use crate::services::error::ServiceError;
use crate::services::require_name;

pub async fn process(
    db: web::Data<Db>,
    battery_id: web::Path<i64>,
    payload: web::Json<BatteryPayload>,
) -> impl Responder {
    match update_battery(&db, *battery_id, &payload.name) {
        Ok(Some(battery)) => HttpResponse::Ok().json(battery),
        Ok(None) => ServiceError::NotFound("Battery not found".to_string()).to_response(),
        Err(e) => e.to_response(),
    }
}

fn update_battery(db: &Db, battery_id: i64, name: &str) -> Result<Option<Battery>, ServiceError> {
    let name = require_name(name)?;
    let conn = db.connect()?;
    let changed = conn.execute(
        "UPDATE batteries SET name = ?1 WHERE id = ?2",
        params![name, battery_id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    Ok(Some(Battery {
        id: battery_id,
        name: name.to_string(),
    }))
}
