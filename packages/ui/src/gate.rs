//! Gate decisions for view mounting.
//!
//! Pure functions from [`SessionState`] to an outcome, so every view applies
//! the same policy: protected views never render content before the session
//! resolves, and the entry views (login/signup) bounce authenticated users
//! back to Home.

use crate::session::SessionState;

/// What a view should do given the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Session not resolved yet; render the loading affordance.
    Pending,
    /// Render normally.
    Stay,
    RedirectLogin,
    RedirectHome,
}

/// Policy for protected views (Home, Challenge).
pub fn protected_view(state: &SessionState) -> GateOutcome {
    match state {
        SessionState::Unknown => GateOutcome::Pending,
        SessionState::Unauthenticated => GateOutcome::RedirectLogin,
        SessionState::Authenticated(_) => GateOutcome::Stay,
    }
}

/// Policy for entry views (Login, Signup). The form renders while the
/// session is still unresolved; only a confirmed identity redirects.
pub fn entry_view(state: &SessionState) -> GateOutcome {
    match state {
        SessionState::Authenticated(_) => GateOutcome::RedirectHome,
        SessionState::Unknown | SessionState::Unauthenticated => GateOutcome::Stay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::UserInfo;

    fn authenticated() -> SessionState {
        SessionState::Authenticated(UserInfo {
            id: "u1".into(),
            email: "u1@example.com".into(),
            name: None,
        })
    }

    #[test]
    fn protected_views_never_render_before_resolution() {
        assert_eq!(protected_view(&SessionState::Unknown), GateOutcome::Pending);
    }

    #[test]
    fn unauthenticated_visitors_are_sent_to_login() {
        assert_eq!(
            protected_view(&SessionState::Unauthenticated),
            GateOutcome::RedirectLogin
        );
    }

    #[test]
    fn authenticated_visitors_stay_on_protected_views() {
        assert_eq!(protected_view(&authenticated()), GateOutcome::Stay);
    }

    #[test]
    fn authenticated_visitors_leave_entry_views() {
        assert_eq!(entry_view(&authenticated()), GateOutcome::RedirectHome);
        assert_eq!(entry_view(&SessionState::Unknown), GateOutcome::Stay);
        assert_eq!(entry_view(&SessionState::Unauthenticated), GateOutcome::Stay);
    }
}
