// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Verification-email job payloads.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v2/jobs/verification-email`.
#[derive(Debug, Serialize)]
pub struct VerificationEmailRequest<'a> {
    pub user_id: &'a str,
}

/// Job object returned by Auth0. Only logged, never acted on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerificationJob {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
