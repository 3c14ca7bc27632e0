use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::pagination::Pagination;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_all::{GetAllUsersParams, GetAllUsersUseCase};

pub struct GetAllUsersUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllUsersUseCase for GetAllUsersUseCaseImpl {
    async fn execute(&self, params: GetAllUsersParams) -> Result<Vec<User>, UserError> {
        let pagination = Pagination::new(params.page, params.limit)?;
        self.logger.info(&format!(
            "Fetching users (page {}, limit {})",
            pagination.page(),
            pagination.limit()
        ));
        let users = self.repository.get_all(&pagination).await?;
        self.logger.info(&format!("Found {} users", users.len()));
        Ok(users)
    }
}
