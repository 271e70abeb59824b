//! Administrator session state.
//!
//! The session is an explicit value owned by the menu controller and handed
//! to gated operations rather than a process-wide flag. A session starts
//! logged out, can only move to authenticated by presenting the hardcoded
//! credential pair, and never moves back within a run (no logout, no expiry,
//! nothing persisted).

use crate::constants::{ADMIN_PASSWORD, ADMIN_USERNAME};
use crate::error::{ClinicError, ClinicResult};

/// Per-run administrator authentication state.
#[derive(Debug, Default)]
pub struct AdminSession {
    authenticated: bool,
}

impl AdminSession {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a credential pair, authenticating the session when it matches.
    ///
    /// Returns whether this attempt succeeded. A failed attempt never
    /// de-authenticates a session that is already logged in.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let ok = username == ADMIN_USERNAME && password == ADMIN_PASSWORD;
        if ok {
            self.authenticated = true;
        }
        ok
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Gate for admin-only operations.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::AdminRequired` while the session is logged out.
    pub fn require_admin(&self) -> ClinicResult<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(ClinicError::AdminRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_start_logged_out() {
        let session = AdminSession::new();
        assert!(!session.is_authenticated());
        assert!(matches!(
            session.require_admin(),
            Err(ClinicError::AdminRequired)
        ));
    }

    #[test]
    fn only_the_exact_credential_pair_authenticates() {
        let mut session = AdminSession::new();
        assert!(!session.login("admin", "wrong"));
        assert!(!session.login("root", "admin123"));
        assert!(!session.login("Admin", "admin123"));
        assert!(!session.is_authenticated());

        assert!(session.login("admin", "admin123"));
        assert!(session.is_authenticated());
        session.require_admin().expect("gate opens after login");
    }

    #[test]
    fn failed_attempts_do_not_revoke_an_authenticated_session() {
        let mut session = AdminSession::new();
        assert!(session.login("admin", "admin123"));
        assert!(!session.login("admin", "oops"));
        assert!(session.is_authenticated());
    }
}
