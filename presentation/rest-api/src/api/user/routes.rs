use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::shared::value_objects::UserId;
use business::domain::user::use_cases::create::{CreateUserParams, CreateUserUseCase};
use business::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};
use business::domain::user::use_cases::get_all::{GetAllUsersParams, GetAllUsersUseCase};
use business::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};
use business::domain::user::use_cases::update::{UpdateUserParams, UpdateUserUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::user::dto::{UserRequest, UserResponse};

pub struct UserApi {
    create_use_case: Arc<dyn CreateUserUseCase>,
    get_all_use_case: Arc<dyn GetAllUsersUseCase>,
    get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
    update_use_case: Arc<dyn UpdateUserUseCase>,
    delete_use_case: Arc<dyn DeleteUserUseCase>,
}

impl UserApi {
    pub fn new(
        create_use_case: Arc<dyn CreateUserUseCase>,
        get_all_use_case: Arc<dyn GetAllUsersUseCase>,
        get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
        update_use_case: Arc<dyn UpdateUserUseCase>,
        delete_use_case: Arc<dyn DeleteUserUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// User management API
#[OpenApi]
impl UserApi {
    /// Create a user
    ///
    /// The id is generated by the server.
    #[oai(path = "/users/create", method = "post", tag = "ApiTags::Users")]
    async fn create_user(&self, body: Json<UserRequest>) -> CreateUserResponse {
        let params = CreateUserParams {
            full_name: body.0.full_name,
            address: body.0.address,
        };

        match self.create_use_case.execute(params).await {
            Ok(user) => CreateUserResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateUserResponse::BadRequest(json),
                    _ => CreateUserResponse::InternalError(json),
                }
            }
        }
    }

    /// List users
    ///
    /// Oldest first. Defaults to page 1 with 20 users.
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn get_all_users(
        &self,
        page: Query<Option<i64>>,
        limit: Query<Option<i64>>,
    ) -> GetAllUsersResponse {
        let params = GetAllUsersParams {
            page: page.0,
            limit: limit.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(users) => {
                let responses: Vec<UserResponse> = users.into_iter().map(|u| u.into()).collect();
                GetAllUsersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllUsersResponse::BadRequest(json),
                    _ => GetAllUsersResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a user by ID
    #[oai(path = "/users/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_user_by_id(&self, id: Path<String>) -> GetUserByIdResponse {
        let params = GetUserByIdParams {
            id: UserId::new(id.0),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(user) => GetUserByIdResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetUserByIdResponse::NotFound(json),
                    _ => GetUserByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a user
    #[oai(path = "/users/:id", method = "put", tag = "ApiTags::Users")]
    async fn update_user(&self, id: Path<String>, body: Json<UserRequest>) -> UpdateUserResponse {
        let params = UpdateUserParams {
            id: UserId::new(id.0),
            full_name: body.0.full_name,
            address: body.0.address,
        };

        match self.update_use_case.execute(params).await {
            Ok(user) => UpdateUserResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateUserResponse::BadRequest(json),
                    404 => UpdateUserResponse::NotFound(json),
                    _ => UpdateUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a user
    ///
    /// The user's cart, if any, is left in place.
    #[oai(path = "/users/:id", method = "delete", tag = "ApiTags::Users")]
    async fn delete_user(&self, id: Path<String>) -> DeleteUserResponse {
        let params = DeleteUserParams {
            id: UserId::new(id.0),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteUserResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteUserResponse::NotFound(json),
                    _ => DeleteUserResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserByIdResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
