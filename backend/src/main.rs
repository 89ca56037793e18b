use std::path::Path;
use std::thread;
use std::time::Duration;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use backend::db::Db;
use backend::services;

const DB_FILE: &str = "fleet.sqlite";
const FRONTEND_DIST: &str = "frontend/dist";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let host = "127.0.0.1";
    let port = 8080;
    let url = format!("http://{}:{}", host, port);

    let db = Db::new(DB_FILE);
    db.init()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::JsonConfig::default().limit(64 * 1024))
            .app_data(web::Data::new(db.clone()))
            .service(services::devices::configure_routes())
            .service(services::batteries::configure_routes());
        // Serve the built frontend when it is present next to the binary.
        if Path::new(FRONTEND_DIST).is_dir() {
            app.service(Files::new("/", FRONTEND_DIST).index_file("index.html"))
        } else {
            app
        }
    })
    .bind((host, port))?
    .run()
    .await
}
