pub mod controllers;

pub use controllers::{A2aController, TaskStore};

use crate::ServerConfig;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build CORS layer based on security configuration
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.security.allowed_origins.is_empty() {
        // Any origin, so no credentials
        return CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods(AllowMethods::any())
            .allow_headers(AllowHeaders::any());
    }

    let origins: Vec<HeaderValue> =
        config.security.allowed_origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Create the A2A server application. `base_url` is the public address
/// advertised on the agent card.
pub fn create_app(config: ServerConfig, base_url: &str) -> Router {
    let a2a_controller = A2aController::new(config.clone(), base_url);

    let mut app = Router::new()
        .route("/", post(controllers::a2a::handle_jsonrpc))
        .route("/.well-known/agent-card.json", get(controllers::a2a::get_agent_card))
        .route("/.well-known/agent.json", get(controllers::a2a::get_agent_card))
        .with_state(a2a_controller)
        .route("/health", get(health_check));

    match &config.static_dir {
        Some(dir) if dir.is_dir() => {
            app = app.nest_service("/static", ServeDir::new(dir));
        }
        Some(dir) => {
            tracing::warn!(dir = %dir.display(), "static directory not found, /static disabled");
        }
        None => {}
    }

    if config.security.allowed_origins.is_empty() {
        tracing::warn!("CORS allows any origin; configure allowed origins for deployments");
    }

    let cors_layer = build_cors_layer(&config);

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                axum::http::StatusCode::REQUEST_TIMEOUT,
                config.security.request_timeout,
            ))
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(cors_layer)
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            )),
    )
}

async fn health_check() -> &'static str {
    "OK"
}
