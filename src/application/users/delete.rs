use crate::domain::users::UserRepository;
use std::sync::Arc;

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Returns whether a row was actually removed.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<bool, anyhow::Error> {
        self.repo.delete(id).await
    }
}
