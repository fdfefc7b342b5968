use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::SessionCheck;

/// Flag set by the out-of-scope login step; its presence is the whole
/// session check.
pub const AUTHENTICATED_FLAG: &str = "is_authenticated";
/// Companion flag recording the signed-in role; cleared together with the
/// presence flag on logout.
pub const USER_ROLE_FLAG: &str = "user_role";

/// Keyed session flags scoped to the browser session.
///
/// There is no token, no expiry, and no validation of the flag's value
/// beyond its existence. Every view calls [`check`](Self::check) before
/// rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStore {
    flags: BTreeMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed login with the signed-in role.
    pub fn login(&mut self, role: &str) {
        debug!(role, "front-desk session started");
        self.flags
            .insert(AUTHENTICATED_FLAG.to_string(), "true".to_string());
        self.flags
            .insert(USER_ROLE_FLAG.to_string(), role.to_string());
    }

    /// Presence of the flag is the only criterion; any value counts.
    pub fn check(&self) -> SessionCheck {
        if self.flags.contains_key(AUTHENTICATED_FLAG) {
            SessionCheck::Active
        } else {
            SessionCheck::RedirectToLogin
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.check() == SessionCheck::Active
    }

    pub fn role(&self) -> Option<&str> {
        self.flags.get(USER_ROLE_FLAG).map(String::as_str)
    }

    /// Clears the presence flag and the companion role flag; the caller
    /// then redirects to the login screen.
    pub fn logout(&mut self) {
        debug!("front-desk session ended");
        self.flags.remove(AUTHENTICATED_FLAG);
        self.flags.remove(USER_ROLE_FLAG);
    }
}
