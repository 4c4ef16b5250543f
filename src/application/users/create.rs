use crate::domain::password::PasswordHasher;
use crate::domain::users::{NewUser, User, UserRepository};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    #[schema(example = "johndoe", min_length = 3)]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "john@example.com")]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "password123", min_length = 8)]
    pub password: String,
}

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn execute(&self, req: CreateUserRequest) -> Result<User, AppError> {
        if self.repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::ValidationError(
                "Email already exists".to_string(),
            ));
        }

        let password_hash = self
            .hasher
            .hash_password(&req.password)
            .map_err(AppError::InternalServerError)?;

        let new_user = NewUser {
            username: req.username,
            email: req.email,
            password_hash,
        };

        // The pre-check above races with concurrent creates; the UNIQUE
        // constraint is the arbiter, so its violation is still a 422.
        self.repo.create(new_user).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::ValidationError("Email already exists".to_string())
            } else {
                AppError::InternalServerError(e)
            }
        })
    }
}

fn is_unique_violation(e: &anyhow::Error) -> bool {
    e.downcast_ref::<sqlx::Error>()
        .and_then(|err| err.as_database_error())
        .is_some_and(|db| db.is_unique_violation())
}
