//! Route guard
//!
//! Synchronous check run before a screen renders. This is a UI redirect
//! only; upstream remains the authorization authority.

use super::routes::Route;
use crate::models::Admin;
use crate::session::SessionService;

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Render the screen; carries the admin when one is signed in
    Allow(Option<Admin>),
    Redirect(Route),
}

pub fn guard(route: &Route, session: &SessionService) -> GuardDecision {
    let admin = session.stored_admin();

    match (route.is_protected(), admin) {
        (true, Some(admin)) => GuardDecision::Allow(Some(admin)),
        (true, None) => {
            tracing::debug!(route = %route, "Not authenticated, redirecting to login");
            GuardDecision::Redirect(Route::Login)
        }
        // Already signed in: the login screen forwards to the dashboard
        (false, Some(_)) if *route == Route::Login => GuardDecision::Redirect(Route::Dashboard),
        (false, admin) => GuardDecision::Allow(admin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Admin {
        Admin {
            id: "a1".to_string(),
            email: "admin@jariya.net".to_string(),
            name: "Admin".to_string(),
        }
    }

    #[test]
    fn test_anonymous_is_redirected_to_login() {
        let session = SessionService::in_memory();
        assert_eq!(
            guard(&Route::Zikrs, &session),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(guard(&Route::Login, &session), GuardDecision::Allow(None));
    }

    #[test]
    fn test_authenticated_passes_and_skips_login() {
        let session = SessionService::in_memory();
        session.set_stored_admin(&admin()).unwrap();

        assert_eq!(
            guard(&Route::QuranView { page: 1, line: 1 }, &session),
            GuardDecision::Allow(Some(admin()))
        );
        assert_eq!(
            guard(&Route::Login, &session),
            GuardDecision::Redirect(Route::Dashboard)
        );
    }
}
