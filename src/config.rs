// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Job configuration loaded from environment variables.
//!
//! All three Auth0 values are required. The job refuses to start, and makes
//! no network calls, if any of them is missing.

use std::env;

/// Job configuration, loaded once at startup.
#[derive(Clone)]
pub struct Config {
    /// Auth0 tenant domain, e.g. `example.auth0.com`
    pub auth0_domain: String,
    /// Machine-to-machine application client ID
    pub auth0_client_id: String,
    /// Machine-to-machine application client secret
    pub auth0_client_secret: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("auth0_domain", &self.auth0_domain)
            .field("auth0_client_id", &self.auth0_client_id)
            .field("auth0_client_secret", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local runs.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Values are trimmed; an empty value counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            auth0_domain: required("AUTH0_DOMAIN")?,
            auth0_client_id: required("AUTH0_CLIENT_ID")?,
            auth0_client_secret: required("AUTH0_CLIENT_SECRET")?,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            auth0_domain: "example.auth0.com".to_string(),
            auth0_client_id: "test_client_id".to_string(),
            auth0_client_secret: "test_secret".to_string(),
        }
    }

    /// Tenant base URL: `https://<domain>`.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.auth0_domain)
    }

    /// Management API audience, which is also the API base: `<base>/api/v2/`.
    pub fn audience(&self) -> String {
        audience_for(&self.base_url())
    }
}

/// Management API audience for a tenant base URL.
pub fn audience_for(base_url: &str) -> String {
    format!("{}/api/v2/", base_url.trim_end_matches('/'))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
