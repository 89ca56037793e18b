//! The single internal path for forming and dissolving the battery-device
//! relationship.
//!
//! Two public routes lead here, `POST /api/batteries/{id}/attach` with a
//! `{device_id}` body and `POST /api/devices/{id}/batteries/{battery_id}/attach`.
//! Both are thin adapters over the same `attach` function, so the two
//! entry points cannot drift apart. Neither returns the updated device; the
//! client observes the new relationship through a follow-up device fetch.
//!
//! Detach is deliberately not shaped like attach: the attachment is deleted
//! as a subresource, `DELETE /api/devices/{id}/batteries/{battery_id}`.

use actix_web::{web, HttpResponse, Responder};
use rusqlite::{params, OptionalExtension};

use common::model::battery::Battery;
use common::requests::BatteryAttach;

use crate::db::Db;
use crate::services::error::ServiceError;

/// Handler for `POST /api/batteries/{battery_id}/attach`.
pub async fn process_for_battery(
    db: web::Data<Db>,
    battery_id: web::Path<i64>,
    payload: web::Json<BatteryAttach>,
) -> impl Responder {
    match attach(&db, *battery_id, payload.device_id) {
        Ok(battery) => HttpResponse::Ok().json(battery),
        Err(e) => e.to_response(),
    }
}

/// Handler for `POST /api/devices/{device_id}/batteries/{battery_id}/attach`.
pub async fn process_for_device(db: web::Data<Db>, path: web::Path<(i64, i64)>) -> impl Responder {
    let (device_id, battery_id) = path.into_inner();
    match attach(&db, battery_id, device_id) {
        Ok(battery) => HttpResponse::Ok().json(battery),
        Err(e) => e.to_response(),
    }
}

/// Handler for `DELETE /api/devices/{device_id}/batteries/{battery_id}`.
pub async fn process_detach(db: web::Data<Db>, path: web::Path<(i64, i64)>) -> impl Responder {
    let (device_id, battery_id) = path.into_inner();
    match detach(&db, device_id, battery_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_response(),
    }
}

/// Assigns a battery to a device.
///
/// A battery belongs to at most one device, and a device holds at most five
/// batteries; re-attaching an already assigned battery is rejected rather than
/// deduplicated, which keeps the collection free of duplicates.
fn attach(db: &Db, battery_id: i64, device_id: i64) -> Result<Battery, ServiceError> {
    let conn = db.connect()?;

    let battery: Option<(i64, String, Option<i64>)> = conn
        .query_row(
            "SELECT id, name, device_id FROM batteries WHERE id = ?1",
            params![battery_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;
    let Some((id, name, owner)) = battery else {
        return Err(ServiceError::NotFound("Battery not found".to_string()));
    };

    let device: Option<i64> = conn
        .query_row(
            "SELECT id FROM devices WHERE id = ?1",
            params![device_id],
            |row| row.get(0),
        )
        .optional()?;
    if device.is_none() {
        return Err(ServiceError::NotFound("Device not found".to_string()));
    }

    if owner.is_some() {
        return Err(ServiceError::Conflict(
            "Battery is already assigned to another device".to_string(),
        ));
    }

    let attached: i64 = conn.query_row(
        "SELECT COUNT(*) FROM batteries WHERE device_id = ?1",
        params![device_id],
        |row| row.get(0),
    )?;
    if attached >= 5 {
        return Err(ServiceError::Conflict(
            "Cannot add more than 5 batteries to a device".to_string(),
        ));
    }

    conn.execute(
        "UPDATE batteries SET device_id = ?1 WHERE id = ?2",
        params![device_id, battery_id],
    )?;
    Ok(Battery { id, name })
}

/// Clears a battery's owner, provided it is attached to the given device.
fn detach(db: &Db, device_id: i64, battery_id: i64) -> Result<(), ServiceError> {
    let conn = db.connect()?;
    let changed = conn.execute(
        "UPDATE batteries SET device_id = NULL WHERE id = ?1 AND device_id = ?2",
        params![battery_id, device_id],
    )?;
    if changed == 0 {
        return Err(ServiceError::NotFound("Attachment not found".to_string()));
    }
    Ok(())
}
