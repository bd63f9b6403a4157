//! Vehicle API Server
//!
//! Create, read and update vehicles over HTTP.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryVehicleRepository, PostgresVehicleRepository};
use app::{VehicleMapper, VehicleService};
use config::{Config, StoreBackend};
use domain::ports::VehicleRepository;

/// Application state shared across all handlers
pub struct AppState<VR: VehicleRepository> {
    pub vehicle_service: Arc<VehicleService<VR>>,
}

impl<VR: VehicleRepository> Clone for AppState<VR> {
    fn clone(&self) -> Self {
        Self {
            vehicle_service: self.vehicle_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for a given repository backend
pub fn build_router<VR: VehicleRepository + 'static>(state: AppState<VR>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Vehicles
        .route(
            "/vehicles",
            get(handlers::list_vehicles::<VR>).post(handlers::create_vehicle::<VR>),
        )
        .route(
            "/vehicles/:id",
            get(handlers::get_vehicle::<VR>).put(handlers::update_vehicle::<VR>),
        )
        .route(
            "/vehicles/plate/:plate",
            get(handlers::get_vehicle_by_plate::<VR>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve<VR: VehicleRepository + 'static>(repo: Arc<VR>, port: u16) -> anyhow::Result<()> {
    let vehicle_service = Arc::new(VehicleService::new(repo, VehicleMapper::new()));
    let app = build_router(AppState { vehicle_service });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vehicle_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vehicle API...");

    // Load configuration
    let config = Config::from_env()?;

    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;

            tracing::info!("Connecting to database...");
            let db = Database::connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            serve(Arc::new(PostgresVehicleRepository::new(db)), config.port).await
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; vehicles are lost on restart");
            serve(Arc::new(InMemoryVehicleRepository::new()), config.port).await
        }
    }
}
