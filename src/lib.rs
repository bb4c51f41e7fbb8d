#[cfg(feature = "server")]
use crate::models::config::ServerConfig;

pub mod catalog;
pub mod domain;
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
pub mod models;
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;
pub mod ui;
pub mod url_state;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    use std::sync::Arc;

    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::catalog::CatalogReader;
    use crate::catalog::cache::CachedCatalog;
    use crate::catalog::http::HttpCatalog;
    use crate::routes::api::api_v1_cards;
    use crate::routes::cards::show_card;
    use crate::routes::main::show_index;

    let http_catalog = HttpCatalog::new(
        &server_config.catalog_url,
        server_config.request_timeout(),
        server_config.retry_policy(),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to create catalog client: {e}")))?;

    // One cache shared by all workers.
    let catalog: Arc<dyn CatalogReader> = Arc::new(CachedCatalog::new(http_catalog));
    let catalog = web::Data::from(catalog);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let settings = web::Data::new(server_config.browse_settings());
    let assets_dir = server_config.assets_dir.clone();
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Serving cards from {} on {}:{}",
        server_config.catalog_url,
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &assets_dir))
            .service(web::scope("/api").service(api_v1_cards))
            .service(show_index)
            .service(show_card)
            .app_data(web::Data::new(tera.clone()))
            .app_data(catalog.clone())
            .app_data(settings.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
