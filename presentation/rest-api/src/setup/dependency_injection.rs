use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::product::catalog::ProductCatalogPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::cart::add_products::AddProductsToCartUseCaseImpl;
use business::application::cart::get_all::GetAllCartsUseCaseImpl;
use business::application::cart::get_by_user::GetCartByUserUseCaseImpl;
use business::application::cart::remove_products::RemoveProductsFromCartUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::user::create::CreateUserUseCaseImpl;
use business::application::user::delete::DeleteUserUseCaseImpl;
use business::application::user::get_all::GetAllUsersUseCaseImpl;
use business::application::user::get_by_id::GetUserByIdUseCaseImpl;
use business::application::user::update::UpdateUserUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::user::routes::UserApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub cart_api: CartApi,
    pub product_api: ProductApi,
    pub user_api: UserApi,
}

impl DependencyContainer {
    /// Wires every adapter and use case around a shared pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let product_catalog = Arc::new(ProductCatalogPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));

        // Cart use cases
        let add_products_use_case = Arc::new(AddProductsToCartUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: product_catalog.clone(),
            logger: logger.clone(),
        });
        let remove_products_use_case = Arc::new(RemoveProductsFromCartUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: product_catalog,
            logger: logger.clone(),
        });
        let get_cart_by_user_use_case = Arc::new(GetCartByUserUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_carts_use_case = Arc::new(GetAllCartsUseCaseImpl {
            repository: cart_repository,
            logger: logger.clone(),
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // User use cases
        let create_user_use_case = Arc::new(CreateUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_users_use_case = Arc::new(GetAllUsersUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let get_user_by_id_use_case = Arc::new(GetUserByIdUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let update_user_use_case = Arc::new(UpdateUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let delete_user_use_case = Arc::new(DeleteUserUseCaseImpl {
            repository: user_repository,
            logger,
        });

        Self {
            health_api: HealthApi::new(),
            cart_api: CartApi::new(
                add_products_use_case,
                remove_products_use_case,
                get_cart_by_user_use_case,
                get_all_carts_use_case,
            ),
            product_api: ProductApi::new(
                create_product_use_case,
                get_all_products_use_case,
                get_product_by_id_use_case,
                update_product_use_case,
                delete_product_use_case,
            ),
            user_api: UserApi::new(
                create_user_use_case,
                get_all_users_use_case,
                get_user_by_id_use_case,
                update_user_use_case,
                delete_user_use_case,
            ),
        }
    }
}
