use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod export;
mod models;

use config::Config;
use db::Database;

pub struct AppState {
    pub db: Arc<Database>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("memopad-backend v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url).expect("Failed to open database");
    db.init_schema().expect("Failed to initialize database schema");
    let db = Arc::new(db);

    log::info!("Listening on 0.0.0.0:{}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::notes::config)
            .configure(controllers::export::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
