#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the food map application.
//!
//! Serves enriched regional expenditure data to the dashboard frontend.
//! Every request runs a fresh pipeline pass; the pipeline itself falls
//! back to the embedded dataset when the clustering API is down, so these
//! endpoints do not fail because of an unreachable upstream.

mod handlers;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use food_map_pipeline::Pipeline;

/// Shared application state.
pub struct AppState {
    /// Enrichment pipeline used by every handler.
    pub pipeline: Pipeline,
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/analysis", web::get().to(handlers::analysis))
            .route("/clusters/{cluster_id}", web::get().to(handlers::cluster))
            .route("/regions/list", web::get().to(handlers::regions_list))
            .route("/statistics", web::get().to(handlers::statistics))
            .route("/search", web::get().to(handlers::search)),
    );
}

/// Starts the HTTP server and runs until shutdown.
///
/// # Errors
///
/// Returns an I/O error if the server fails to bind or encounters a
/// fatal runtime error.
pub async fn run(pipeline: Pipeline, bind_addr: &str, port: u16) -> std::io::Result<()> {
    let state = web::Data::new(AppState { pipeline });

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
