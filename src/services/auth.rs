//! Authentication service implementation
//!
//! This service handles signup, login, session validation and logout against
//! the remote API. The session itself is a cookie kept by the shared
//! [`ApiClient`]; the client never sees or stores tokens.

use reqwest::{Method, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::models::user::{CreateUserRequest, Credentials, User};
use crate::services::api::ApiClient;
use crate::utils::errors::{ApiError, EventManagerError, Result};
use crate::utils::logging::log_user_action;

/// Response of the token validation endpoint
#[derive(Debug, Clone, Deserialize)]
struct ValidationResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<User>,
}

/// Authentication service for managing the user session
#[derive(Clone, Debug)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Register a new account
    pub async fn signup(&self, request: &CreateUserRequest) -> Result<()> {
        request.validate()?;
        debug!(email = %request.email, "Creating user account");

        self.api.send_json(Method::POST, "users/create-user", request).await?;

        log_user_action(&request.email, "signup", None);
        Ok(())
    }

    /// Log in and return the user the new session belongs to
    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        debug!(email = %credentials.email, "Logging in");

        self.api.send_json(Method::POST, "auth/login", credentials).await?;

        let user = self.require_user().await?;
        log_user_action(&user.email, "login", None);
        Ok(user)
    }

    /// Current session's user, `None` when not logged in
    pub async fn validate_token(&self) -> Result<Option<User>> {
        let response = match self.api.post_raw("auth/validate-token").await {
            Ok(response) => response,
            Err(EventManagerError::Api(ApiError::RequestFailed { status, .. }))
                if status == StatusCode::UNAUTHORIZED.as_u16()
                    || status == StatusCode::FORBIDDEN.as_u16() =>
            {
                debug!(status = status, "Session rejected by server");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let body = response.text().await.map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        let validation: ValidationResponse = serde_json::from_str(&body)?;

        match (validation.success, validation.data) {
            (true, Some(user)) => Ok(Some(user)),
            (true, None) => {
                warn!("Token validation succeeded without user data");
                Ok(None)
            }
            (false, _) => Ok(None),
        }
    }

    /// Guard for views that need a logged-in user
    pub async fn require_user(&self) -> Result<User> {
        self.validate_token()
            .await?
            .ok_or(EventManagerError::Unauthenticated)
    }

    /// Expire the session cookie
    pub async fn logout(&self) -> Result<()> {
        self.api.send_empty(Method::POST, "auth/expire-token").await?;
        info!("Session expired");
        Ok(())
    }
}
