//! Login and logout flows

use super::form::FormOutcome;
use super::routes::Route;
use crate::api::ApiResponse;
use crate::models::LoginRequest;
use crate::services::AuthService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

/// Submit credentials. On success the admin is stored and the dashboard
/// opens; on failure the form stays with the upstream message.
pub async fn submit_login(auth: &AuthService, form: &LoginForm) -> FormOutcome {
    if !form.can_submit() {
        return FormOutcome::Error("Email and password are required".to_string());
    }

    let request = LoginRequest::new(form.email.trim(), form.password.clone());
    match auth.login(&request).await {
        ApiResponse::Success { .. } => FormOutcome::Navigate(Route::Dashboard),
        ApiResponse::Failure { message } => FormOutcome::Error(message),
    }
}

/// Log out and return to the login screen
pub async fn logout(auth: &AuthService) -> Route {
    auth.logout().await;
    Route::Login
}
