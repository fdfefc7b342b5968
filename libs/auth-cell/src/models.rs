use serde::{Deserialize, Serialize};

/// What a view should do after checking the session: render, or send the
/// user back to the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionCheck {
    Active,
    RedirectToLogin,
}
