use std::sync::Arc;

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
use service::{admin::store::AdminStore, user_client::RemoteUserClient};

pub mod admin;
pub mod users;

/// Constructor-injected collaborators shared by all handlers.
#[derive(Clone)]
pub struct ServerState {
    pub admin_store: Arc<dyn AdminStore>,
    pub user_client: Arc<dyn RemoteUserClient>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, Admin CRUD, user proxying,
/// and the Swagger UI.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let admin_routes = Router::new()
        .route("/api/admin", post(admin::create_admin).get(admin::list_admins))
        .route(
            "/api/admin/:id",
            get(admin::get_admin).put(admin::update_admin).delete(admin::delete_admin),
        )
        .route("/api/admin/users/all", get(users::list_users))
        .route("/api/admin/users/:id", get(users::get_user))
        .route("/api/admin/users/:id/deactivate", post(users::deactivate_user));

    Router::new()
        .route("/health", get(health))
        .merge(admin_routes)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            crate::openapi::ApiDoc::openapi(),
        ))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
