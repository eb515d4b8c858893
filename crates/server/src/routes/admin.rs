use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

use models::admin::{Admin, AdminInput};

use crate::routes::ServerState;

#[utoipa::path(
    post, path = "/api/admin", tag = "admin",
    request_body = crate::openapi::AdminInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create_admin(
    State(state): State<ServerState>,
    Json(input): Json<AdminInput>,
) -> Result<(StatusCode, Json<Admin>), StatusCode> {
    match state.admin_store.create(input).await {
        Ok(admin) => {
            info!(id = admin.id, email = %admin.email, "created admin");
            Ok((StatusCode::CREATED, Json(admin)))
        }
        Err(e) => {
            error!(err = %e, "create admin failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    get, path = "/api/admin/{id}", tag = "admin",
    params(("id" = u64, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_admin(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<Admin>, StatusCode> {
    match state.admin_store.get(id).await {
        Ok(Some(admin)) => Ok(Json(admin)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!(err = %e, "get admin failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    get, path = "/api/admin", tag = "admin",
    responses((status = 200, description = "OK"))
)]
pub async fn list_admins(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Admin>>, StatusCode> {
    match state.admin_store.list().await {
        Ok(admins) => {
            info!(count = admins.len(), "list admins");
            Ok(Json(admins))
        }
        Err(e) => {
            error!(err = %e, "list admins failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    put, path = "/api/admin/{id}", tag = "admin",
    params(("id" = u64, Path, description = "Admin ID")),
    request_body = crate::openapi::AdminInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update_admin(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(input): Json<AdminInput>,
) -> Result<Json<Admin>, StatusCode> {
    match state.admin_store.update(id, input).await {
        Ok(Some(admin)) => {
            info!(id, "updated admin");
            Ok(Json(admin))
        }
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!(err = %e, "update admin failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    delete, path = "/api/admin/{id}", tag = "admin",
    params(("id" = u64, Path, description = "Admin ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_admin(State(state): State<ServerState>, Path(id): Path<u64>) -> StatusCode {
    // deleting an absent id is still a 204; the operation is idempotent
    match state.admin_store.delete(id).await {
        Ok(existed) => {
            info!(id, existed, "deleted admin");
            StatusCode::NO_CONTENT
        }
        Err(e) => {
            error!(err = %e, "delete admin failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
