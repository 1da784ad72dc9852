// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-credentials token exchange payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /oauth/token` for the client-credentials grant.
#[derive(Debug, Serialize)]
pub struct ClientCredentialsRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub audience: &'a str,
    pub grant_type: &'static str,
}

impl<'a> ClientCredentialsRequest<'a> {
    pub const GRANT_TYPE: &'static str = "client_credentials";

    pub fn new(client_id: &'a str, client_secret: &'a str, audience: &'a str) -> Self {
        Self {
            client_id,
            client_secret,
            audience,
            grant_type: Self::GRANT_TYPE,
        }
    }
}

/// Token response from Auth0.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: AccessToken,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Bearer token for the Management API.
///
/// Lives only for the duration of one run. Debug output is redacted.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
