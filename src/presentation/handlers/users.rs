use crate::application::users::create::{CreateUserRequest, CreateUserUseCase};
use crate::application::users::delete::DeleteUserUseCase;
use crate::application::users::get::GetUserUseCase;
use crate::application::users::list::ListUsersUseCase;
use crate::application::users::update::{UpdateUserRequest, UpdateUserUseCase};
use crate::domain::users::User;
use crate::infrastructure::password::Argon2Hasher;
use crate::infrastructure::repositories::users::PostgresUserRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::{AuthUser, CurrentUser};
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::ApiResponse;
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Transport projection of a user; never exposes the password hash.
#[derive(Serialize, ToSchema)]
pub struct UserResource {
    #[schema(example = 42)]
    pub id: i64,
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserResource {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// List all users
#[utoipa::path(
    get,
    path = "/v1/user",
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<UserResource>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresUserRepository::new(state.pool.clone()));
    let use_case = ListUsersUseCase::new(repo);

    let users = use_case.execute().await?;
    let resources: Vec<UserResource> = users.into_iter().map(UserResource::from).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(resources))))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/v1/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResource>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresUserRepository::new(state.pool.clone()));
    let hasher = Arc::new(Argon2Hasher::new());
    let use_case = CreateUserUseCase::new(repo, hasher);

    let user = use_case.execute(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(UserResource::from(user))),
    ))
}

/// Return the authenticated caller's own record.
///
/// The `CurrentUser` extractor has already attached the user before
/// this body runs; no further lookup happens here.
#[utoipa::path(
    get,
    path = "/v1/user/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserResource>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(UserResource::from(user))),
    ))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/v1/user/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResource>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresUserRepository::new(state.pool.clone()));
    let use_case = GetUserUseCase::new(repo);

    match use_case.execute(id).await? {
        Some(user) => Ok((
            StatusCode::OK,
            Json(ApiResponse::new(UserResource::from(user))),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Update a user
#[utoipa::path(
    put,
    path = "/v1/user/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResource>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresUserRepository::new(state.pool.clone()));
    let hasher = Arc::new(Argon2Hasher::new());
    let use_case = UpdateUserUseCase::new(repo, hasher);

    match use_case.execute(id, req).await? {
        Some(user) => Ok((
            StatusCode::OK,
            Json(ApiResponse::new(UserResource::from(user))),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/v1/user/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresUserRepository::new(state.pool.clone()));
    let use_case = DeleteUserUseCase::new(repo);

    if use_case.execute(id).await? {
        Ok((
            StatusCode::OK,
            Json(ApiResponse::new(serde_json::Value::Null).with_meta(json!({ "deleted": true }))),
        ))
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}
