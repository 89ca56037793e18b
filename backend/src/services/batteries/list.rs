use actix_web::{web, HttpResponse, Responder};

use common::model::battery::Battery;

use crate::db::Db;
use crate::services::error::ServiceError;

pub async fn process(db: web::Data<Db>) -> impl Responder {
    match list_batteries(&db) {
        Ok(batteries) => HttpResponse::Ok().json(batteries),
        Err(e) => e.to_response(),
    }
}

fn list_batteries(db: &Db) -> Result<Vec<Battery>, ServiceError> {
    let conn = db.connect()?;
    let mut stmt = conn.prepare("SELECT id, name FROM batteries ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Battery {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut batteries = Vec::new();
    for battery in rows {
        batteries.push(battery?);
    }
    Ok(batteries)
}
