//! User model

use serde::{Deserialize, Serialize};

use crate::utils::errors::{EventManagerError, Result};
use crate::utils::helpers::is_valid_email;

/// Logged-in user as returned by token validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Signup form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EventManagerError::InvalidInput("Name is required".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(EventManagerError::InvalidInput(format!("Invalid email: {}", self.email)));
        }
        if self.password.is_empty() {
            return Err(EventManagerError::InvalidInput("Password is required".to_string()));
        }
        Ok(())
    }
}

/// Login form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
