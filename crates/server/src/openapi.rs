use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct AdminDoc {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(ToSchema)]
pub struct AdminInputDoc {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::admin::create_admin,
        crate::routes::admin::get_admin,
        crate::routes::admin::list_admins,
        crate::routes::admin::update_admin,
        crate::routes::admin::delete_admin,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::deactivate_user,
    ),
    components(
        schemas(
            HealthResponse,
            AdminDoc,
            AdminInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "admin"),
        (name = "users")
    )
)]
pub struct ApiDoc;
