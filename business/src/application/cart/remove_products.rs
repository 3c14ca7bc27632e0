use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::cart::shared::{MAX_WRITE_ATTEMPTS, lookup_price, map_write_error};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::ProductCatalog;
use crate::domain::cart::use_cases::remove_products::{
    RemoveProductsFromCartParams, RemoveProductsFromCartUseCase, RemoveProductsOutcome,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveProductsFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveProductsFromCartUseCaseImpl {
    /// One read-modify-write pass. The only write is the final update or delete.
    async fn attempt(
        &self,
        user_id: &UserId,
        product_ids: &[Uuid],
    ) -> Result<RemoveProductsOutcome, CartError> {
        let Some(mut cart) = self.repository.find_by_user(user_id).await? else {
            return Ok(RemoveProductsOutcome::NothingToRemove);
        };

        for &product_id in product_ids {
            let Some(index) = cart.position_of(product_id) else {
                self.logger.debug(&format!(
                    "Product {} not in cart of user {}, skipping",
                    product_id, user_id
                ));
                continue;
            };
            let price = lookup_price(self.catalog.as_ref(), product_id).await?;
            cart.remove_line(index, &price);
        }

        if cart.is_empty() {
            self.repository
                .delete(&cart)
                .await
                .map_err(map_write_error)?;
            return Ok(RemoveProductsOutcome::CartEmptied);
        }

        self.repository
            .update(&cart)
            .await
            .map_err(map_write_error)?;

        let cart = self
            .repository
            .find_by_user(user_id)
            .await?
            .ok_or(CartError::NotFound)?;
        Ok(RemoveProductsOutcome::Updated(cart))
    }
}

#[async_trait]
impl RemoveProductsFromCartUseCase for RemoveProductsFromCartUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveProductsFromCartParams,
    ) -> Result<RemoveProductsOutcome, CartError> {
        if params.user_id.is_blank() {
            return Err(CartError::UserIdEmpty);
        }
        if params.product_ids.is_empty() {
            return Err(CartError::ProductsEmpty);
        }

        self.logger.info(&format!(
            "Removing {} products from cart of user {}",
            params.product_ids.len(),
            params.user_id
        ));

        let mut attempt = 1;
        let outcome = loop {
            match self.attempt(&params.user_id, &params.product_ids).await {
                Ok(outcome) => break outcome,
                Err(CartError::ConcurrentModification) if attempt < MAX_WRITE_ATTEMPTS => {
                    self.logger.warn(&format!(
                        "Cart of user {} changed concurrently, retrying (attempt {})",
                        params.user_id, attempt
                    ));
                    attempt += 1;
                }
                Err(err) => {
                    self.logger.error(&format!(
                        "Failed to remove products from cart of user {}: {}",
                        params.user_id, err
                    ));
                    return Err(err);
                }
            }
        };

        match &outcome {
            RemoveProductsOutcome::Updated(cart) => self.logger.info(&format!(
                "Cart of user {} now holds {} products",
                cart.user_id,
                cart.product_ids.len()
            )),
            RemoveProductsOutcome::NothingToRemove => self.logger.info(&format!(
                "User {} has no cart, nothing to remove",
                params.user_id
            )),
            RemoveProductsOutcome::CartEmptied => self.logger.info(&format!(
                "Cart of user {} emptied and deleted",
                params.user_id
            )),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::add_products::AddProductsToCartUseCaseImpl;
    use crate::application::cart::fakes::{
        FixedPriceCatalog, InMemoryCartRepository, SilentLogger,
    };
    use crate::domain::cart::model::Cart;
    use crate::domain::cart::use_cases::add_products::{
        AddProductsToCartParams, AddProductsToCartUseCase,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::pagination::Pagination;
    use bigdecimal::BigDecimal;
    use mockall::mock;

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
        pub Catalog {}

        #[async_trait]
        impl ProductCatalog for Catalog {
            async fn price_of(&self, product_id: Uuid) -> Result<BigDecimal, RepositoryError>;
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

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    fn stored_cart(product_ids: Vec<Uuid>, total: i64) -> Cart {
        Cart::from_repository(
            test_user_id(),
            product_ids,
            BigDecimal::from(total),
            1,
            chrono::Utc::now(),
            chrono::Utc::now(),
        )
    }

    struct Shop {
        repository: Arc<InMemoryCartRepository>,
        add: AddProductsToCartUseCaseImpl,
        remove: RemoveProductsFromCartUseCaseImpl,
    }

    fn shop(catalog: FixedPriceCatalog) -> Shop {
        let repository = Arc::new(InMemoryCartRepository::default());
        let catalog: Arc<dyn ProductCatalog> = Arc::new(catalog);
        Shop {
            repository: repository.clone(),
            add: AddProductsToCartUseCaseImpl {
                repository: repository.clone(),
                catalog: catalog.clone(),
                logger: Arc::new(SilentLogger),
            },
            remove: RemoveProductsFromCartUseCaseImpl {
                repository,
                catalog,
                logger: Arc::new(SilentLogger),
            },
        }
    }

    async fn add(shop: &Shop, product_ids: Vec<Uuid>) -> Cart {
        shop.add
            .execute(AddProductsToCartParams {
                user_id: test_user_id(),
                product_ids,
            })
            .await
            .unwrap()
    }

    async fn remove(
        shop: &Shop,
        product_ids: Vec<Uuid>,
    ) -> Result<RemoveProductsOutcome, CartError> {
        shop.remove
            .execute(RemoveProductsFromCartParams {
                user_id: test_user_id(),
                product_ids,
            })
            .await
    }

    #[tokio::test]
    async fn should_walk_through_add_add_remove_example() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let shop = shop(
            FixedPriceCatalog::default()
                .with_price(p1, 10)
                .with_price(p2, 5),
        );

        let cart = add(&shop, vec![p1, p2]).await;
        assert_eq!(cart.product_ids, vec![p1, p2]);
        assert_eq!(cart.total_amount, BigDecimal::from(15));

        let cart = add(&shop, vec![p1]).await;
        assert_eq!(cart.product_ids, vec![p1, p2, p1]);
        assert_eq!(cart.total_amount, BigDecimal::from(25));

        let outcome = remove(&shop, vec![p1]).await.unwrap();
        let RemoveProductsOutcome::Updated(cart) = outcome else {
            panic!("expected updated cart");
        };
        assert_eq!(cart.product_ids, vec![p2, p1]);
        assert_eq!(cart.total_amount, BigDecimal::from(15));
    }

    #[tokio::test]
    async fn should_leave_remaining_product_after_add_then_remove() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let shop = shop(
            FixedPriceCatalog::default()
                .with_price(a, 7)
                .with_price(b, 3),
        );

        add(&shop, vec![a, b]).await;
        let outcome = remove(&shop, vec![a]).await.unwrap();

        let RemoveProductsOutcome::Updated(cart) = outcome else {
            panic!("expected updated cart");
        };
        assert_eq!(cart.product_ids, vec![b]);
        assert_eq!(cart.total_amount, BigDecimal::from(3));
    }

    #[tokio::test]
    async fn should_skip_ids_not_in_cart() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let absent = Uuid::new_v4();
        let shop = shop(
            FixedPriceCatalog::default()
                .with_price(a, 7)
                .with_price(b, 3),
        );
        add(&shop, vec![a, b]).await;

        let outcome = remove(&shop, vec![absent, b, b]).await.unwrap();

        let RemoveProductsOutcome::Updated(cart) = outcome else {
            panic!("expected updated cart");
        };
        assert_eq!(cart.product_ids, vec![a]);
        assert_eq!(cart.total_amount, BigDecimal::from(7));
    }

    #[tokio::test]
    async fn should_delete_cart_when_last_product_removed() {
        let a = Uuid::new_v4();
        let shop = shop(FixedPriceCatalog::default().with_price(a, 7));
        add(&shop, vec![a, a]).await;

        let outcome = remove(&shop, vec![a, a]).await.unwrap();

        assert!(matches!(outcome, RemoveProductsOutcome::CartEmptied));
        assert!(shop.repository.stored(&test_user_id()).is_none());
    }

    #[tokio::test]
    async fn should_report_nothing_to_remove_when_user_has_no_cart() {
        let shop = shop(FixedPriceCatalog::default());

        let outcome = remove(&shop, vec![Uuid::new_v4()]).await.unwrap();

        assert!(matches!(outcome, RemoveProductsOutcome::NothingToRemove));
        assert_eq!(shop.repository.write_count(), 0);
    }

    #[tokio::test]
    async fn should_not_write_when_lookup_fails_mid_scan() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let shop = shop(
            FixedPriceCatalog::default()
                .with_price(a, 7)
                .with_price(b, 3),
        );
        add(&shop, vec![a, b]).await;
        let broken_catalog = FixedPriceCatalog::default().with_price(a, 7).failing_on(b);
        let remove_use_case = RemoveProductsFromCartUseCaseImpl {
            repository: shop.repository.clone(),
            catalog: Arc::new(broken_catalog),
            logger: Arc::new(SilentLogger),
        };

        let result = remove_use_case
            .execute(RemoveProductsFromCartParams {
                user_id: test_user_id(),
                product_ids: vec![a, b],
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::DatabaseError)
        ));
        let stored = shop.repository.stored(&test_user_id()).unwrap();
        assert_eq!(stored.product_ids, vec![a, b]);
        assert_eq!(stored.total_amount, BigDecimal::from(10));
        assert_eq!(shop.repository.write_count(), 1);
    }

    #[tokio::test]
    async fn should_look_up_price_only_for_matched_lines() {
        let a = Uuid::new_v4();
        let absent = Uuid::new_v4();
        let mut catalog = MockCatalog::new();
        catalog
            .expect_price_of()
            .withf(move |id| *id == a)
            .times(1)
            .returning(|_| Ok(BigDecimal::from(2)));

        let mut mock_repo = MockCartRepo::new();
        let mut calls = 0;
        mock_repo.expect_find_by_user().returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(Some(stored_cart(vec![a, a], 4)))
            } else {
                Ok(Some(stored_cart(vec![a], 2)))
            }
        });
        mock_repo
            .expect_update()
            .withf(move |cart| cart.product_ids == vec![a] && cart.total_amount == BigDecimal::from(2))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RemoveProductsFromCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductsFromCartParams {
                user_id: test_user_id(),
                product_ids: vec![absent, a],
            })
            .await;

        assert!(matches!(result.unwrap(), RemoveProductsOutcome::Updated(_)));
    }

    #[tokio::test]
    async fn should_retry_delete_when_cart_changed_concurrently() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut catalog = MockCatalog::new();
        catalog
            .expect_price_of()
            .returning(|_| Ok(BigDecimal::from(1)));

        // First read sees [a]; by the retry another writer appended b.
        let mut mock_repo = MockCartRepo::new();
        let mut calls = 0;
        mock_repo.expect_find_by_user().returning(move |_| {
            calls += 1;
            match calls {
                1 => Ok(Some(stored_cart(vec![a], 1))),
                _ => Ok(Some(stored_cart(vec![a, b], 2))),
            }
        });
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|_| Err(RepositoryError::Conflict));
        mock_repo
            .expect_update()
            .withf(move |cart| cart.product_ids == vec![b])
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RemoveProductsFromCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductsFromCartParams {
                user_id: test_user_id(),
                product_ids: vec![a],
            })
            .await;

        assert!(matches!(result.unwrap(), RemoveProductsOutcome::Updated(_)));
    }

    #[tokio::test]
    async fn should_reject_empty_removal_request() {
        let use_case = RemoveProductsFromCartUseCaseImpl {
            repository: Arc::new(MockCartRepo::new()),
            catalog: Arc::new(MockCatalog::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductsFromCartParams {
                user_id: test_user_id(),
                product_ids: vec![],
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductsEmpty));
    }
}
