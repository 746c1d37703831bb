//! Auth service
//!
//! Login stores the returned admin in the session; logout tells upstream
//! (best effort) and clears the session regardless.

use crate::api::{ApiClient, ApiResponse};
use crate::models::{Admin, LoginRequest};
use crate::session::SessionService;
use serde_json::Value;

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    session: SessionService,
}

impl AuthService {
    pub fn new(client: ApiClient, session: SessionService) -> Self {
        Self { client, session }
    }

    pub fn session(&self) -> &SessionService {
        &self.session
    }

    /// Log in. The session moves to Authenticated only on success.
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResponse<Admin> {
        tracing::info!(email = %credentials.email, "Login attempt");

        let result = match self
            .client
            .post::<Value, _>("/auth/login", Some(credentials))
            .await
        {
            ApiResponse::Success { data, message } => match Admin::from_login_payload(&data) {
                Some(admin) => ApiResponse::Success {
                    data: admin,
                    message,
                },
                None => ApiResponse::failure("Login response did not include an admin"),
            },
            ApiResponse::Failure { message } => ApiResponse::Failure { message },
        };

        if let ApiResponse::Success { data: admin, .. } = &result {
            if let Err(e) = self.session.set_stored_admin(admin) {
                tracing::error!("Failed to persist admin session: {}", e);
                return ApiResponse::failure(format!("Failed to store session: {}", e));
            }
        }

        tracing::info!(success = result.is_success(), "Login result");
        result
    }

    /// Log out. The upstream call's outcome is ignored.
    pub async fn logout(&self) {
        let result: ApiResponse<Value> = self.client.post_empty("/auth/logout").await;
        if let ApiResponse::Failure { message } = &result {
            tracing::warn!("Upstream logout failed, clearing session anyway: {}", message);
        }

        if let Err(e) = self.session.clear_stored_admin() {
            tracing::error!("Failed to clear admin session: {}", e);
        }
    }
}
