use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod auth;
pub mod businesses;
pub mod products;
pub mod reactions;
pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public health/docs plus the `/api`
/// surface. Per-route auth is handled by the bearer-token extractor.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/users", post(users::create))
        .route("/users/email/:email", get(users::find_by_email))
        .route("/users/:id", get(users::find_by_id))
        .route("/businesses", post(businesses::create).get(businesses::find_all))
        .route("/businesses/owner/me", get(businesses::my_businesses))
        .route(
            "/businesses/:id",
            get(businesses::find_one)
                .put(businesses::update)
                .delete(businesses::remove),
        )
        .route("/products", post(products::create).get(products::find_all))
        .route(
            "/products/:id",
            get(products::find_one)
                .put(products::update)
                .delete(products::remove),
        )
        .route(
            "/reactions",
            post(reactions::create)
                .get(reactions::find_by_product)
                .delete(reactions::remove),
        )
        .route("/reactions/my-reactions", get(reactions::my_reactions))
        .route("/reactions/stats", get(reactions::stats));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
