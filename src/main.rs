use actix_web::{App, HttpServer, middleware::Logger, web};
use essay_relay::{config::Config, handlers, state::AppState};
use log::{info, warn};
use reqwest::Client;
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .unwrap_or(5000);

    let config = Config::from_env();

    let client = Client::builder().build().map_err(std::io::Error::other)?;

    let state = Arc::new(AppState::new(config.clone(), client));

    info!(
        "\n┌───────────────────────────────────────────┐\
         \n│        Essay Relay - Outline & Proofread  │\
         \n└───────────────────────────────────────────┘\n"
    );
    info!("Server running at http://localhost:{port}");
    info!("Completion service: {}", config.base_url);
    if config.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; completion requests will be sent unauthenticated");
    }
    info!(
        "Outline model: {} (temperature {})",
        config.outline_model, config.outline_temperature
    );
    info!(
        "Proofread model: {} (reasoning effort {})",
        config.proofread_model, config.proofread_reasoning_effort
    );
    info!(
        "Debug mode: {}",
        if config.debug { "ENABLED" } else { "disabled" }
    );
    info!("Routes: POST /outline, POST /proofread (also under /api), GET /health");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(state.clone()))
            .wrap(handlers::cors_headers())
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
