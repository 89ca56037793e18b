//! Battery endpoints under `/api/batteries`.
//!
//! Registered routes:
//! - `GET    /`                       -> `list::process`
//! - `POST   /`                       -> `create::process`
//! - `GET    /{battery_id}/`          -> `get::process`
//! - `PUT    /{battery_id}/`          -> `update::process`
//! - `DELETE /{battery_id}/`          -> `delete::process`
//! - `POST   /{battery_id}/attach`    -> battery-centric adapter over
//!   `services::attach`

mod create;
mod delete;
mod get;
mod list;
mod update;

pub(crate) use get::fetch_battery;

use actix_web::{web, Scope};

use crate::services::attach;

const API_PATH: &str = "/api/batteries";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("/", web::get().to(list::process))
        .route("/", web::post().to(create::process))
        .route("/{battery_id}/", web::get().to(get::process))
        .route("/{battery_id}/", web::put().to(update::process))
        .route("/{battery_id}/", web::delete().to(delete::process))
        .route(
            "/{battery_id}/attach",
            web::post().to(attach::process_for_battery),
        )
}
