use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::routes::ServerState;

// User-management endpoints proxied to the remote user-service. Response
// bodies are relayed verbatim; every remote failure becomes a 500 whose
// body embeds the failure's message.

#[utoipa::path(
    get, path = "/api/admin/users/all", tag = "users",
    responses(
        (status = 200, description = "OK"),
        (status = 500, description = "Fetch Failed")
    )
)]
pub async fn list_users(State(state): State<ServerState>) -> Response {
    match state.user_client.fetch_all_users().await {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => {
            error!(err = %e, "fetch users failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error fetching users: {}", e))
                .into_response()
        }
    }
}

#[utoipa::path(
    get, path = "/api/admin/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 500, description = "Fetch Failed")
    )
)]
pub async fn get_user(State(state): State<ServerState>, Path(id): Path<i64>) -> Response {
    match state.user_client.fetch_user_by_id(id).await {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => {
            error!(err = %e, id, "fetch user failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error fetching user: {}", e))
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeactivateQuery {
    // mandatory; a missing parameter is rejected by the extractor
    pub reason: String,
}

#[utoipa::path(
    post, path = "/api/admin/users/{id}/deactivate", tag = "users",
    params(
        ("id" = i64, Path, description = "User ID"),
        ("reason" = String, Query, description = "Deactivation reason")
    ),
    responses(
        (status = 200, description = "Deactivated"),
        (status = 400, description = "Missing reason"),
        (status = 500, description = "Deactivate Failed")
    )
)]
pub async fn deactivate_user(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(q): Query<DeactivateQuery>,
) -> Response {
    match state.user_client.deactivate_user(id, &q.reason).await {
        Ok(()) => {
            info!(id, reason = %q.reason, "deactivated user");
            let message =
                format!("User with ID {} deactivated successfully. Reason: {}", id, q.reason);
            (StatusCode::OK, Json(serde_json::json!({ "message": message }))).into_response()
        }
        Err(e) => {
            error!(err = %e, id, "deactivate user failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": format!("Error: {}", e) })),
            )
                .into_response()
        }
    }
}
