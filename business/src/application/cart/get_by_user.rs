use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_by_user::{GetCartByUserParams, GetCartByUserUseCase};
use crate::domain::logger::Logger;

pub struct GetCartByUserUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartByUserUseCase for GetCartByUserUseCaseImpl {
    async fn execute(&self, params: GetCartByUserParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Fetching cart of user: {}", params.user_id));

        self.repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(CartError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::pagination::Pagination;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_all(&self, pagination: &Pagination) -> Result<Vec<Cart>, RepositoryError>;
            async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
            async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn update(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn delete(&self, cart: &Cart) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_cart_when_user_has_one() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user()
            .withf(|user_id| user_id.as_str() == "u-1")
            .returning(move |user_id| {
                Ok(Some(Cart::from_repository(
                    user_id.clone(),
                    vec![product_id],
                    BigDecimal::from(12),
                    3,
                    chrono::Utc::now(),
                    chrono::Utc::now(),
                )))
            });

        let use_case = GetCartByUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(GetCartByUserParams {
                user_id: UserId::new("u-1"),
            })
            .await
            .unwrap();

        assert_eq!(cart.product_ids, vec![product_id]);
        assert_eq!(cart.total_amount, BigDecimal::from(12));
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_has_no_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().returning(|_| Ok(None));

        let use_case = GetCartByUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartByUserParams {
                user_id: UserId::new("u-2"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetCartByUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartByUserParams {
                user_id: UserId::new("u-3"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
