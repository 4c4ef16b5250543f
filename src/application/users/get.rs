use crate::domain::users::{User, UserRepository};
use std::sync::Arc;

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<Option<User>, anyhow::Error> {
        self.repo.find_by_id(id).await
    }
}
