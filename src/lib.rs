use actix_cors::Cors;
use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::query::QueryCache;
use crate::repository::HttpRepository;

pub mod components;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod routes;
pub mod services;
pub mod views;

/// Flash messages stored in a cookie signed with `secret`.
pub fn flash_messages_framework(secret: &str) -> std::io::Result<FlashMessagesFramework> {
    let key = Key::try_from(secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))?;
    let message_store = CookieMessageStore::builder(key).build();
    Ok(FlashMessagesFramework::builder(message_store).build())
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = HttpRepository::new(&server_config.api_url, server_config.request_timeout())
        .map_err(|e| std::io::Error::other(format!("Failed to set up the API client: {e}")))?;

    // One cache for every worker so a mutation invalidates all of them.
    let cache = web::Data::new(QueryCache::new(server_config.cache_ttl()));

    let message_framework = flash_messages_framework(&server_config.secret)?;

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving the console on {}:{} against {}",
        bind_address.0,
        bind_address.1,
        repo.base_url()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(routes::configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(cache.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
