mod config;
mod services;
mod storage;

use crate::config::Config;
use crate::storage::Store;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    let store = Store::new(&config.database_path);
    store.init_schema().map_err(std::io::Error::other)?;

    info!(
        "Server running at http://{}:{} (database {})",
        config.host,
        config.port,
        config.database_path.display()
    );

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .service(services::ingest::configure_routes())
            .service(services::employees::configure_routes())
            .service(services::departments::configure_routes())
    })
    .bind(bind)?
    .run()
    .await
}
