use actix_web::{web, HttpResponse, Responder};
use rusqlite::params;

use common::model::battery::Battery;

use crate::db::Db;
use crate::services::batteries::fetch_battery;
use crate::services::error::ServiceError;

pub async fn process(db: web::Data<Db>, battery_id: web::Path<i64>) -> impl Responder {
    match delete_battery(&db, *battery_id) {
        Ok(Some(battery)) => HttpResponse::Ok().json(battery),
        Ok(None) => ServiceError::NotFound("Battery not found".to_string()).to_response(),
        Err(e) => e.to_response(),
    }
}

/// Deletes a battery and returns its last state. Deleting twice reports
/// not-found the second time, which callers treat as success already applied.
fn delete_battery(db: &Db, battery_id: i64) -> Result<Option<Battery>, ServiceError> {
    let conn = db.connect()?;
    let Some(battery) = fetch_battery(&conn, battery_id)? else {
        return Ok(None);
    };
    conn.execute("DELETE FROM batteries WHERE id = ?1", params![battery_id])?;
    Ok(Some(battery))
}
