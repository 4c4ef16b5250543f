use crate::domain::password::PasswordHasher;
use crate::domain::users::{UpdateUser, User, UserRepository};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    #[schema(example = "johndoe_updated", min_length = 3)]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "newemail@example.com")]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "newpassword123", min_length = 8)]
    pub password: Option<String>,
}

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Returns `Ok(None)` when no user with the given id exists.
    #[tracing::instrument(skip(self, req))]
    pub async fn execute(
        &self,
        id: i64,
        req: UpdateUserRequest,
    ) -> Result<Option<User>, AppError> {
        let password_hash = match req.password {
            Some(password) => Some(
                self.hasher
                    .hash_password(&password)
                    .map_err(AppError::InternalServerError)?,
            ),
            None => None,
        };

        let update = UpdateUser {
            username: req.username,
            email: req.email,
            password_hash,
        };

        Ok(self.repo.update(id, update).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::users::NewUser;
    use crate::infrastructure::password::Argon2Hasher;
    use crate::infrastructure::repositories::mock::MockUserRepository;

    #[tokio::test]
    async fn test_update_user() {
        let repo = Arc::new(MockUserRepository::default());
        let created = repo
            .create(NewUser {
                username: "oldname".to_string(),
                email: "old@example.com".to_string(),
                password_hash: "hash123".to_string(),
            })
            .await
            .unwrap();

        let use_case = UpdateUserUseCase::new(repo, Arc::new(Argon2Hasher::new()));
        let req = UpdateUserRequest {
            username: Some("newname".to_string()),
            email: None,
            password: None,
        };

        let updated = use_case.execute(created.id, req).await.unwrap().unwrap();

        assert_eq!(updated.username, "newname");
        assert_eq!(updated.email, "old@example.com");
        assert_eq!(updated.password_hash, "hash123");
    }

    #[tokio::test]
    async fn test_update_rehashes_password() {
        let repo = Arc::new(MockUserRepository::default());
        let created = repo
            .create(NewUser {
                username: "user".to_string(),
                email: "user@example.com".to_string(),
                password_hash: "oldhash".to_string(),
            })
            .await
            .unwrap();

        let use_case = UpdateUserUseCase::new(repo, Arc::new(Argon2Hasher::new()));
        let req = UpdateUserRequest {
            username: None,
            email: None,
            password: Some("newpassword123".to_string()),
        };

        let updated = use_case.execute(created.id, req).await.unwrap().unwrap();

        assert_ne!(updated.password_hash, "oldhash");
        assert_ne!(updated.password_hash, "newpassword123");
    }

    #[tokio::test]
    async fn test_update_nonexistent_user() {
        let repo = Arc::new(MockUserRepository::default());
        let use_case = UpdateUserUseCase::new(repo, Arc::new(Argon2Hasher::new()));

        let req = UpdateUserRequest {
            username: Some("newname".to_string()),
            email: None,
            password: None,
        };

        let result = use_case.execute(9999, req).await.unwrap();
        assert!(result.is_none());
    }
}
