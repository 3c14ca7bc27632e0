use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::cart::use_cases::add_products::{
    AddProductsToCartParams, AddProductsToCartUseCase,
};
use business::domain::cart::use_cases::get_all::{GetAllCartsParams, GetAllCartsUseCase};
use business::domain::cart::use_cases::get_by_user::{GetCartByUserParams, GetCartByUserUseCase};
use business::domain::cart::use_cases::remove_products::{
    RemoveProductsFromCartParams, RemoveProductsFromCartUseCase, RemoveProductsOutcome,
};
use business::domain::shared::value_objects::UserId;

use crate::api::cart::dto::{CartMutationRequest, CartResponse, NoticeResponse, RemoveProductsBody};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_products_use_case: Arc<dyn AddProductsToCartUseCase>,
    remove_products_use_case: Arc<dyn RemoveProductsFromCartUseCase>,
    get_by_user_use_case: Arc<dyn GetCartByUserUseCase>,
    get_all_use_case: Arc<dyn GetAllCartsUseCase>,
}

impl CartApi {
    pub fn new(
        add_products_use_case: Arc<dyn AddProductsToCartUseCase>,
        remove_products_use_case: Arc<dyn RemoveProductsFromCartUseCase>,
        get_by_user_use_case: Arc<dyn GetCartByUserUseCase>,
        get_all_use_case: Arc<dyn GetAllCartsUseCase>,
    ) -> Self {
        Self {
            add_products_use_case,
            remove_products_use_case,
            get_by_user_use_case,
            get_all_use_case,
        }
    }
}

fn parse_product_ids(raw: &[String]) -> Result<Vec<Uuid>, Json<ErrorResponse>> {
    raw.iter()
        .map(|id| Uuid::parse_str(id.trim()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ErrorResponse::validation("cart.invalid_product_id"))
}

/// Shopping cart API
///
/// Carts are created by the first add and deleted when the last line is removed.
#[OpenApi]
impl CartApi {
    /// Add products to a cart
    ///
    /// Appends the products to the user's cart, creating it if needed. Each
    /// product's current price is added to the total.
    #[oai(path = "/products/add", method = "post", tag = "ApiTags::Carts")]
    async fn add_products(&self, body: Json<CartMutationRequest>) -> AddProductsResponse {
        let product_ids = match parse_product_ids(&body.0.product_ids) {
            Ok(ids) => ids,
            Err(json) => return AddProductsResponse::BadRequest(json),
        };

        let params = AddProductsToCartParams {
            user_id: UserId::new(body.0.user_id),
            product_ids,
        };

        match self.add_products_use_case.execute(params).await {
            Ok(cart) => AddProductsResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddProductsResponse::BadRequest(json),
                    404 => AddProductsResponse::NotFound(json),
                    409 => AddProductsResponse::Conflict(json),
                    _ => AddProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove products from a cart
    ///
    /// Removes one occurrence per requested id. Returns the updated cart, or a
    /// notice when the user has no cart or the cart became empty and was deleted.
    #[oai(path = "/products/remove", method = "post", tag = "ApiTags::Carts")]
    async fn remove_products(&self, body: Json<CartMutationRequest>) -> RemoveProductsResponse {
        let product_ids = match parse_product_ids(&body.0.product_ids) {
            Ok(ids) => ids,
            Err(json) => return RemoveProductsResponse::BadRequest(json),
        };

        let params = RemoveProductsFromCartParams {
            user_id: UserId::new(body.0.user_id),
            product_ids,
        };

        match self.remove_products_use_case.execute(params).await {
            Ok(RemoveProductsOutcome::Updated(cart)) => {
                RemoveProductsResponse::Ok(Json(RemoveProductsBody::Cart(cart.into())))
            }
            Ok(RemoveProductsOutcome::NothingToRemove) => {
                RemoveProductsResponse::Ok(Json(notice("cart.nothing_to_remove")))
            }
            Ok(RemoveProductsOutcome::CartEmptied) => {
                RemoveProductsResponse::Ok(Json(notice("cart.emptied")))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RemoveProductsResponse::BadRequest(json),
                    404 => RemoveProductsResponse::NotFound(json),
                    409 => RemoveProductsResponse::Conflict(json),
                    _ => RemoveProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a user's cart
    #[oai(path = "/products/user/:user_id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_by_user(&self, user_id: Path<String>) -> GetCartByUserResponse {
        let params = GetCartByUserParams {
            user_id: UserId::new(user_id.0),
        };

        match self.get_by_user_use_case.execute(params).await {
            Ok(cart) => GetCartByUserResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetCartByUserResponse::BadRequest(json),
                    404 => GetCartByUserResponse::NotFound(json),
                    _ => GetCartByUserResponse::InternalError(json),
                }
            }
        }
    }

    /// List carts
    ///
    /// Sorted by total amount, highest first. Defaults to page 1 with 20 carts.
    #[oai(path = "/products/carts", method = "get", tag = "ApiTags::Carts")]
    async fn get_all_carts(
        &self,
        page: Query<Option<i64>>,
        limit: Query<Option<i64>>,
    ) -> GetAllCartsResponse {
        let params = GetAllCartsParams {
            page: page.0,
            limit: limit.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(carts) => {
                let responses: Vec<CartResponse> = carts.into_iter().map(|c| c.into()).collect();
                GetAllCartsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllCartsResponse::BadRequest(json),
                    _ => GetAllCartsResponse::InternalError(json),
                }
            }
        }
    }
}

fn notice(message: &str) -> RemoveProductsBody {
    RemoveProductsBody::Notice(NoticeResponse {
        status: 200,
        message: message.to_string(),
    })
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductsResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductsResponse {
    #[oai(status = 200)]
    Ok(Json<RemoveProductsBody>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartByUserResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCartsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
