// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User records returned by the user-search endpoint.

use serde::Deserialize;

/// Auth0 user as returned by `GET /api/v2/users`.
///
/// Only the fields the job reads are modelled; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Auth0User {
    /// Opaque user identifier, e.g. `auth0|64f1c...`
    pub user_id: String,
    /// Email address (display only)
    #[serde(default)]
    pub email: Option<String>,
}

impl Auth0User {
    /// Email for log lines.
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("<no email>")
    }
}
