//! Hashmap Rating Dashboard Server
//!
//! Admin panel for the hashmap rating module: services, fields and pricing
//! mappings, all stored in the remote rating API.

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use hashmap_client::HashmapClient;
use hashmap_core::{AppConfig, HashmapApi};
use hashmap_panel::{PanelState, Urls};
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "hashmap-dashboard",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "hashmap_dashboard={},hashmap_panel={},hashmap_client={},actix_web=info",
            log_level, log_level, log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting Hashmap Dashboard v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_validated().context("invalid configuration")?;

    let client = HashmapClient::from_config(&config.rating_api)
        .context("failed to build rating API client")?;
    info!(
        url = %client.base_url(),
        timeout_ms = config.rating_api.timeout_ms,
        "Rating API client configured"
    );

    let api: Arc<dyn HashmapApi> = Arc::new(client);
    let urls = Urls::new(config.panel.base_path.clone());
    let state = web::Data::new(PanelState::new(api, urls.clone()));

    let cors_origins = config.cors_origins();
    let bind_addr = config.server_addr();
    info!(
        "Starting HTTP server on {} with {} workers, panel at {}/",
        bind_addr,
        config.server.workers,
        urls.base_path()
    );

    HttpServer::new(move || {
        let origins = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                origin
                    .to_str()
                    .map(|o| origins.iter().any(|allowed| allowed == o))
                    .unwrap_or(false)
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        let panel_urls = urls.clone();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .route("/health", web::get().to(health_check))
            .configure(move |cfg| hashmap_panel::configure(cfg, &panel_urls))
    })
    .workers(config.server.workers)
    .bind(&bind_addr)
    .with_context(|| format!("failed to bind {}", bind_addr))?
    .run()
    .await?;

    Ok(())
}
