//! Financeiro Web Server
//!
//! Axum-based REST API behind the voice and dashboard UI. The server keeps no
//! per-user state: the caller sends its taxonomy and transactions with each
//! request, as the browser client did with its local storage.
//!
//! - Restrictive CORS policy when origins are configured
//! - Request body size limits
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use financeiro_core::{CategoryTaxonomy, Error as CoreError};

mod handlers;

/// Maximum accepted request body (1 MiB)
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Message returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = any origin, for local use)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    /// Taxonomy used when a request carries none
    pub taxonomy: CategoryTaxonomy,
}

/// Create the router with the built-in taxonomy
pub fn create_router(static_dir: Option<&str>, config: ServerConfig) -> Router {
    create_router_with_taxonomy(CategoryTaxonomy::default(), static_dir, config)
}

/// Create the router with a custom fallback taxonomy
pub fn create_router_with_taxonomy(
    taxonomy: CategoryTaxonomy,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> Router {
    let cors = build_cors(&config);
    let state = Arc::new(AppState { taxonomy });

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/process-transaction", post(handlers::process_transaction))
        .route("/categories/default", get(handlers::default_categories))
        .route("/categories/classify", post(handlers::classify_text))
        .route("/summary", post(handlers::summary))
        .route("/export", post(handlers::export_csv));

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    // Serve the dashboard if a directory was provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

fn build_cors(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();
    cors.allow_origin(origins)
}

/// Start the server
pub async fn serve(
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    serve_with_taxonomy(CategoryTaxonomy::default(), host, port, static_dir, config).await
}

/// Start the server with a custom fallback taxonomy
pub async fn serve_with_taxonomy(
    taxonomy: CategoryTaxonomy,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if config.allowed_origins.is_empty() {
        warn!("CORS allows any origin - do not expose to network!");
    }

    info!("Fallback taxonomy has {} categories", taxonomy.len());

    let app = create_router_with_taxonomy(taxonomy, static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            // Keep full error for logging
            internal: Some(err.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(_) => Self::not_found(&err.to_string()),
            _ if err.is_validation() => Self::bad_request(&err.to_string()),
            _ => Self::internal(err),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}
