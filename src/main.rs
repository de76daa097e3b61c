use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use taskboard::auth::{AuthMiddleware, BcryptHasher};
use taskboard::config::Config;
use taskboard::routes;
use taskboard::seed::seed_demo_data;
use taskboard::services::{TaskService, UserService};
use taskboard::store::{InMemoryTaskStore, InMemoryUserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // Stores are constructed once here and injected; they live for the whole
    // process and nothing else holds them.
    let user_service = web::Data::new(UserService::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(BcryptHasher),
    ));
    let task_service = web::Data::new(TaskService::new(Arc::new(InMemoryTaskStore::new())));

    if let Err(e) = seed_demo_data(&user_service, &task_service).await {
        log::error!("Failed to seed demo data: {}", e);
    }

    log::info!("Starting taskboard server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .app_data(task_service.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health) // health is outside /api and AuthMiddleware
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
