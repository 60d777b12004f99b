#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the safe-commute application.
//!
//! Proxies the NYC Open Data incident feed (`/api/crime-data`), the news
//! feed (`/api/news`), answers the safety chat (`/api/chat`), and serves
//! the static HTML shell. No state persists between requests: every
//! crime-data request re-fetches upstream.

mod handlers;

pub mod config;

use std::time::Duration;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

use crate::config::ServerConfig;

/// Timeout applied to every upstream request.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state.
pub struct AppState {
    /// HTTP client used for all upstream requests, with the bounded
    /// timeout already applied.
    pub http: reqwest::Client,
    /// Environment-derived configuration.
    pub config: ServerConfig,
}

/// Starts the safe-commute API server.
///
/// Reads configuration from the environment, builds the shared upstream
/// HTTP client, and runs the Actix-Web server until shutdown. This is a
/// regular async function — the caller provides the runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an error if the HTTP server fails to bind or encounters a
/// runtime error.
///
/// # Panics
///
/// Panics if the upstream HTTP client cannot be constructed.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ServerConfig::from_env();
    let bind_addr = config.bind_addr.clone();
    let port = config.port;
    let static_dir = config.static_dir.clone();

    let http = reqwest::Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .expect("Failed to build upstream HTTP client");

    let state = web::Data::new(AppState { http, config });

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/crime-data", web::get().to(handlers::crime_data))
                    .route("/news", web::get().to(handlers::news))
                    .route("/chat", web::post().to(handlers::chat)),
            )
            // Serve the HTML shell and client assets
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
