use std::path::Path;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::{PoolSettings, establish_connection_pool};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;

pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(
        &server_config.database_url,
        &PoolSettings::from(&server_config),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to establish database connection: {e}")))?;

    let repo = DieselRepository::new(pool);

    let static_dir = server_config
        .static_dir
        .clone()
        .filter(|dir| Path::new(dir).is_dir());
    if static_dir.is_none() {
        log::info!("No dashboard bundle found, serving the API only");
    }

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        let app = App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure);

        match &static_dir {
            Some(dir) => app.service(Files::new("/", dir).index_file("index.html")),
            None => app,
        }
    })
    .bind(bind_address)?
    .run()
    .await
}
