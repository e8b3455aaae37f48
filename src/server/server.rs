//! HTTP server core implementation

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::core::RelayPipeline;
use crate::server::handlers;
use crate::server::middleware::{BodyGuard, error_handlers};
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::UploadStore;
use crate::utils::error::{RelayError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::NormalizePath, web};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, preparing the upload directory and the
    /// provider clients
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let store = Arc::new(UploadStore::new(&config.upload).await?);
        let pipeline = RelayPipeline::from_config(config, store)?;

        Ok(Self::with_pipeline(config.clone(), pipeline))
    }

    /// Create a server around an already built pipeline
    pub fn with_pipeline(config: Config, pipeline: RelayPipeline) -> Self {
        Self {
            config: config.server.clone(),
            state: AppState::new(config, pipeline),
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors = build_cors(&state.config.server.cors);
        let body_limit = state.config.server.max_body_size;

        App::new()
            .app_data(state)
            .wrap(error_handlers())
            .wrap(BodyGuard::new(body_limit))
            .wrap(NormalizePath::trim())
            .wrap(cors)
            .wrap(TracingLogger::default())
            .configure(routes::configure_routes)
            .default_service(web::to(handlers::not_found))
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| {
                RelayError::Config(format!("Failed to bind to {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Translate the CORS section into an actix-cors policy.
///
/// A disabled section yields the restrictive default.
pub fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();
    if !config.enabled {
        return cors;
    }

    if config.allows_all_origins() {
        cors = cors.allow_any_origin().send_wildcard();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| match m.parse() {
            Ok(method) => Some(method),
            Err(_) => {
                warn!(method = %m, "Ignoring invalid CORS method");
                None
            }
        })
        .collect();
    if methods.is_empty() {
        cors = cors.allow_any_method();
    } else {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if headers.is_empty() {
        cors = cors.allow_any_header();
    } else {
        cors = cors.allowed_headers(headers);
    }

    if let Some(max_age) = config.max_age {
        cors = cors.max_age(max_age as usize);
    }

    cors
}
