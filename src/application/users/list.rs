use crate::domain::users::{User, UserRepository};
use std::sync::Arc;

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<User>, anyhow::Error> {
        self.repo.find_all().await
    }
}
