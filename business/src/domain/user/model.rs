use chrono::{DateTime, Utc};

use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(full_name: String, address: String) -> Result<Self, UserError> {
        if full_name.trim().is_empty() {
            return Err(UserError::FullNameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: UserId::generate(),
            full_name,
            address,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        full_name: String,
        address: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            full_name,
            address,
            created_at,
            updated_at,
        }
    }

    pub fn change_details(&mut self, full_name: String, address: String) -> Result<(), UserError> {
        if full_name.trim().is_empty() {
            return Err(UserError::FullNameEmpty);
        }
        self.full_name = full_name;
        self.address = address;
        self.updated_at = Utc::now();
        Ok(())
    }
}
