mod handlers;
pub mod middleware;

pub use handlers::{ToolCallRequest, ToolCallResponse};

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::mcp::{self, McpServer};

pub fn create_router(config: &ServerConfig) -> Router {
    let api = Router::new()
        // Tools
        .route("/tools", get(handlers::list_tools))
        .route("/tools/call", post(handlers::call_tool))
        // Direct operations
        .route("/analyze", post(handlers::analyze))
        .route("/generate", post(handlers::generate))
        .route("/guides/{framework}", get(handlers::get_guide))
        // Health
        .route("/health", get(handlers::health))
        .layer(axum::middleware::from_fn(middleware::sanitize_payload));

    Router::new()
        .nest("/api/v1", api)
        .nest_service("/mcp", mcp::streamable_http_service())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(McpServer::new())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    match &config.cors_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    }
}
