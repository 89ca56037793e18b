use actix_web::{web, HttpResponse, Responder};
use rusqlite::{params, Connection, OptionalExtension};

use common::model::battery::Battery;

use crate::db::Db;
use crate::services::error::ServiceError;

pub async fn process(db: web::Data<Db>, battery_id: web::Path<i64>) -> impl Responder {
    match get_battery(&db, *battery_id) {
        Ok(Some(battery)) => HttpResponse::Ok().json(battery),
        Ok(None) => ServiceError::NotFound("Battery not found".to_string()).to_response(),
        Err(e) => e.to_response(),
    }
}

fn get_battery(db: &Db, battery_id: i64) -> Result<Option<Battery>, ServiceError> {
    let conn = db.connect()?;
    fetch_battery(&conn, battery_id)
}

pub(crate) fn fetch_battery(
    conn: &Connection,
    battery_id: i64,
) -> Result<Option<Battery>, ServiceError> {
    let battery = conn
        .query_row(
            "SELECT id, name FROM batteries WHERE id = ?1",
            params![battery_id],
            |row| {
                Ok(Battery {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(battery)
}
