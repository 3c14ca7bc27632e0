use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::User;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserRequest {
    /// Full name (cannot be empty)
    pub full_name: String,
    /// Shipping address
    #[oai(default)]
    pub address: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub full_name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name,
            address: user.address,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
