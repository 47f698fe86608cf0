//! # Training Center Backend
//!
//! Course catalog, registration intake and admin back-office for a training
//! center, served as a JSON API.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers, envelope)
//!     ↓
//! Domain Layer (services, validation, CSV export, auth)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```
//!
//! `initialize_backend` opens the single database pool, wires the
//! repositories into the services and returns the `AppState` that
//! `create_router` hands to every handler.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{http::Method, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{AuthProvider, CourseService, ExportService, RegistrationService, StaticCredentialsProvider};
use crate::io::rest::{auth_apis, course_apis, registration_apis};
use crate::storage::{CourseRepository, CourseStorage, DbConnection, RegistrationRepository, RegistrationStorage};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub course_service: CourseService,
    pub registration_service: RegistrationService,
    pub export_service: ExportService,
    pub auth_provider: Arc<dyn AuthProvider>,
}

impl AppState {
    /// Wire services on top of an existing connection
    pub fn from_connection(db: DbConnection, auth_provider: Arc<dyn AuthProvider>) -> Self {
        let courses: Arc<dyn CourseStorage> = Arc::new(CourseRepository::new(db.clone()));
        let registrations: Arc<dyn RegistrationStorage> = Arc::new(RegistrationRepository::new(db));

        Self {
            course_service: CourseService::new(courses.clone()),
            registration_service: RegistrationService::new(registrations, courses),
            export_service: ExportService::new(),
            auth_provider,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    let auth_provider = Arc::new(StaticCredentialsProvider::new(
        config.admin_email.clone(),
        config.admin_password.clone(),
    ));

    Ok(AppState::from_connection(db, auth_provider))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let admin_routes = Router::new()
        .merge(course_apis::admin_router())
        .merge(registration_apis::admin_router())
        .merge(auth_apis::admin_router());

    let api_routes = Router::new()
        .merge(course_apis::router())
        .merge(registration_apis::router())
        .nest("/admin", admin_routes);

    let mut router = Router::new().nest("/api", api_routes);

    if let Some(static_dir) = &config.static_dir {
        info!("Serving static files from {}", static_dir.display());
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
