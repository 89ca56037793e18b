//! Device endpoints under `/api/devices`.
//!
//! Registered routes:
//! - `GET    /`                                        -> `list::process`
//! - `POST   /`                                        -> `create::process`
//! - `GET    /{device_id}/`                            -> `get::process`
//! - `PUT    /{device_id}/`                            -> `update::process`
//! - `DELETE /{device_id}/`                            -> `delete::process`
//! - `POST   /{device_id}/batteries/{battery_id}/attach` -> device-centric
//!   adapter over `services::attach`
//! - `DELETE /{device_id}/batteries/{battery_id}`      -> detach

mod create;
mod delete;
mod get;
mod list;
mod update;

pub(crate) use get::fetch_device;

use actix_web::{web, Scope};

use crate::services::attach;

const API_PATH: &str = "/api/devices";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("/", web::get().to(list::process))
        .route("/", web::post().to(create::process))
        .route("/{device_id}/", web::get().to(get::process))
        .route("/{device_id}/", web::put().to(update::process))
        .route("/{device_id}/", web::delete().to(delete::process))
        .route(
            "/{device_id}/batteries/{battery_id}/attach",
            web::post().to(attach::process_for_device),
        )
        .route(
            "/{device_id}/batteries/{battery_id}",
            web::delete().to(attach::process_detach),
        )
}
