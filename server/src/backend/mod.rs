//! # Backend Module
//!
//! Everything behind the HTTP port of the salon booking server.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (services, visit grouping, timeline, debts, calendar)
//!     ↓
//! Storage Layer (SQLite repositories behind storage traits)
//! ```
//!
//! [`initialize_backend`] wires the layers together from an [`AppConfig`] and
//! [`create_router`] exposes them over axum.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::{AppConfig, MissingReferencePolicy};

use crate::backend::domain::{
    AppointmentService, AppointmentSnapshot, CatalogService, ClientService, ClockTicker,
    ScheduleService,
};
use crate::backend::storage::{AppointmentRepository, ClientRepository, DbConnection, ServiceRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub client_service: ClientService,
    pub catalog_service: CatalogService,
    pub appointment_service: AppointmentService,
    pub schedule_service: ScheduleService,
    pub clock: Arc<ClockTicker>,
    /// Label appended to prices
    pub currency: String,
}

impl AppState {
    /// Wire every service onto one database connection
    pub fn new(db: DbConnection, config: &AppConfig) -> Self {
        let clients = Arc::new(ClientRepository::new(db.clone()));
        let services = Arc::new(ServiceRepository::new(db.clone()));
        let appointments = Arc::new(AppointmentRepository::new(db));
        let snapshot = Arc::new(AppointmentSnapshot::new());

        let client_service = ClientService::new(clients.clone(), appointments.clone(), snapshot.clone());
        let catalog_service = CatalogService::new(services.clone(), appointments.clone(), snapshot.clone());
        let appointment_service = AppointmentService::new(appointments, clients, services, snapshot);
        let schedule_service =
            ScheduleService::new(appointment_service.clone(), config.missing_reference_policy);

        Self {
            client_service,
            catalog_service,
            appointment_service,
            schedule_service,
            clock: Arc::new(ClockTicker::start()),
            currency: config.currency.clone(),
        }
    }
}

/// Initialize the backend with all required services.
///
/// Must run inside a tokio runtime; the clock ticker is spawned here.
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url)
        .await
        .context("Failed to open database")?;

    info!(
        "Setting up services (missing references: {}, currency: {})",
        config.missing_reference_policy, config.currency
    );
    Ok(AppState::new(db, config))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/clients", get(io::list_clients).post(io::create_client))
        .route("/clients/:id", put(io::update_client).delete(io::delete_client))
        .route("/services", get(io::list_services).post(io::create_service))
        .route("/services/:id", put(io::update_service).delete(io::delete_service))
        .route("/appointments", get(io::list_appointments).post(io::create_appointments))
        .route(
            "/appointments/:id",
            put(io::update_appointment).delete(io::delete_appointment),
        )
        .route("/appointments/:id/payment", post(io::toggle_payment))
        .route("/schedule/visits", get(io::list_visits))
        .route("/schedule/days", get(io::schedule_days))
        .route("/schedule/timeline", get(io::day_timeline))
        .route("/history", get(io::day_history))
        .route("/debtors", get(io::list_debtors))
        .route("/clock", get(io::get_clock));

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}
