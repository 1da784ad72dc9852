// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth0 client for the three calls the reminder job makes.
//!
//! Handles:
//! - Client-credentials token exchange
//! - Searching for overdue unverified users
//! - Triggering the verification-email job for one user
//!
//! Every call is single-shot. Failures are returned to the caller as-is.

use crate::config::{audience_for, Config};
use crate::error::{AppError, Result, Step};
use crate::models::{
    AccessToken, Auth0User, ClientCredentialsRequest, TokenResponse, VerificationEmailRequest,
    VerificationJob,
};
use crate::time_utils::{format_utc_iso8601, reminder_cutoff};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Search engine version required by the user-search endpoint.
pub const SEARCH_ENGINE_VERSION: &str = "v3";

/// Page size for the user search. Only the first page is read.
pub const SEARCH_PAGE_SIZE: u32 = 100;

/// Lucene filter selecting users still unverified a day after sign-up.
pub fn unverified_users_query(now: DateTime<Utc>) -> String {
    let cutoff = format_utc_iso8601(reminder_cutoff(now));
    format!("email_verified:false AND created_at:[* TO \"{}\"]", cutoff)
}

/// Auth0 Management API client.
#[derive(Clone)]
pub struct Auth0Client {
    http: reqwest::Client,
    base_url: String,
    audience: String,
    client_id: String,
    client_secret: String,
}

impl Auth0Client {
    /// Create a client for the tenant named in `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(
            config.base_url(),
            config.auth0_client_id.clone(),
            config.auth0_client_secret.clone(),
        )
    }

    /// Create a client against an explicit tenant base URL.
    pub fn with_base_url(base_url: String, client_id: String, client_secret: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            audience: audience_for(&base_url),
            base_url,
            client_id,
            client_secret,
        }
    }

    /// Management API audience (and API base) this client targets.
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Exchange the client credentials for a Management API token.
    pub async fn request_access_token(&self) -> Result<AccessToken> {
        let url = format!("{}/oauth/token", self.base_url);
        let body =
            ClientCredentialsRequest::new(&self.client_id, &self.client_secret, &self.audience);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| request_error(Step::Token, e))?;

        let token: TokenResponse = check_response_json(Step::Token, response).await?;
        tracing::debug!(
            token_type = token.token_type.as_deref().unwrap_or("unknown"),
            expires_in = token.expires_in,
            "Management API token issued"
        );
        Ok(token.access_token)
    }

    /// Find users whose email is unverified and who signed up over a day before `now`.
    ///
    /// Returns at most one page of results.
    pub async fn search_unverified_users(
        &self,
        token: &AccessToken,
        now: DateTime<Utc>,
    ) -> Result<Vec<Auth0User>> {
        let url = format!("{}users", self.audience);
        let query = unverified_users_query(now);
        tracing::debug!(q = %query, "Searching for unverified users");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token.secret())
            .query(&[
                ("q", query),
                ("search_engine", SEARCH_ENGINE_VERSION.to_string()),
                ("per_page", SEARCH_PAGE_SIZE.to_string()),
            ])
            .send()
            .await
            .map_err(|e| request_error(Step::Search, e))?;

        check_response_json(Step::Search, response).await
    }

    /// Ask Auth0 to resend the verification email for one user.
    pub async fn send_verification_email(&self, token: &AccessToken, user_id: &str) -> Result<()> {
        let url = format!("{}jobs/verification-email", self.audience);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token.secret())
            .json(&VerificationEmailRequest { user_id })
            .send()
            .await
            .map_err(|e| request_error(Step::Dispatch, e))?;

        let response = check_response(Step::Dispatch, response).await?;

        // The job body is informational only; a 2xx is success either way.
        let job: VerificationJob = response.json().await.unwrap_or_default();
        tracing::debug!(user_id, job_id = job.id.as_deref(), "Verification email job created");
        Ok(())
    }
}

fn request_error(step: Step, err: reqwest::Error) -> AppError {
    AppError::Request {
        step,
        message: err.to_string(),
    }
}

/// Check response status and return the provider's error if not successful.
async fn check_response(step: Step, response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.as_u16() == 429 {
        tracing::warn!(%step, "Auth0 rate limit hit (429)");
    }

    Err(AppError::Api {
        step,
        status,
        payload: error_payload(&body),
    })
}

/// Check response and parse JSON body.
async fn check_response_json<T: DeserializeOwned>(
    step: Step,
    response: reqwest::Response,
) -> Result<T> {
    let response = check_response(step, response).await?;

    response.json().await.map_err(|e| AppError::Decode {
        step,
        message: e.to_string(),
    })
}

/// Parse an error body as JSON, keeping non-JSON text as a string.
fn error_payload(body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string())))
}
