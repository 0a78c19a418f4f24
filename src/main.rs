use actix_web::{App, HttpServer, middleware, web};

use startupit::config::AppConfig;
use startupit::forms::InFlightRegistry;
use startupit::{handlers, session};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let secret_key = config.cookie_key();
    let secure_cookies = config.secure_cookies();
    let effect = handlers::submission_effect(&config);
    let in_flight = web::Data::new(InFlightRegistry::new());
    let bind_addr = config.bind_addr.clone();
    let static_dir = config.static_dir.clone();
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(session::middleware(secret_key.clone(), secure_cookies))
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(effect.clone())
            .app_data(in_flight.clone())
            .service(actix_files::Files::new("/static", &static_dir))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::landing_handlers::not_found))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
