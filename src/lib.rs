use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::models::config::{NotionSettings, ServerConfig};
use crate::repository::NotionRepository;
use crate::routes::main::{method_not_allowed, show_index, slash_command};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

/// Compiles the HTML templates bundled into the binary.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(
        "main/index.html",
        include_str!("../templates/main/index.html"),
    )?;
    Ok(tera)
}

/// Registers the webhook resource: GET and POST on `/`, 405 for other methods.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(show_index))
            .route(web::post().to(slash_command))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(
    server_config: ServerConfig,
    notion_settings: NotionSettings,
) -> std::io::Result<()> {
    // One pooled HTTP client shared by every worker.
    let repo = NotionRepository::new(&notion_settings)
        .map_err(|e| std::io::Error::other(format!("Failed to set up Notion client: {e}")))?;

    let tera = load_templates()
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
