use crate::application::users::create::CreateUserRequest;
use crate::application::users::update::UpdateUserRequest;
use crate::presentation::handlers::users::UserResource;
use crate::shared::error::{ApiError, ErrorResponse};
use crate::shared::response::ApiResponse;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::Modify;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wrenid User API",
        version = "0.1.0",
        description = "REST API for the user resource"
    ),
    paths(
        crate::presentation::handlers::users::list_users,
        crate::presentation::handlers::users::create_user,
        crate::presentation::handlers::users::get_me,
        crate::presentation::handlers::users::get_user,
        crate::presentation::handlers::users::update_user,
        crate::presentation::handlers::users::delete_user,
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateUserRequest,
            UserResource,
            ApiResponse<UserResource>,
            ApiResponse<Vec<UserResource>>,
            ApiResponse<serde_json::Value>,
            ErrorResponse,
            ApiError,
        )
    ),
    tags(
        (name = "users", description = "User resource endpoints")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
