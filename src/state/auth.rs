//! Auth-session state published to views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Views receive it read-only;
//! only the session controller in `util::auth` writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::Session;
use crate::util::token::Role;

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// Bootstrap has not run yet.
    #[must_use]
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().and_then(Session::user_id)
    }

    /// Name for the nav bar; falls back to the role when the payload has none.
    #[must_use]
    pub fn display_name(&self) -> String {
        let Some(session) = self.session.as_ref() else {
            return String::new();
        };
        session
            .display_name()
            .map_or_else(|| format!("{:?}", session.role).to_lowercase(), str::to_owned)
    }
}
