// src/main.rs

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use stockcheck::config::ServerConfig;
use stockcheck::{handler, PriceProvider, YahooHistorySession};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let session = YahooHistorySession::new().map_err(std::io::Error::other)?;
    let provider: Arc<dyn PriceProvider> = Arc::new(session);
    let provider = web::Data::from(provider);

    log::info!("Starting web server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(provider.clone())
            .configure(handler::routes)
    })
    .bind(config.address())?
    .run()
    .await
}
