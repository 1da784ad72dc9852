// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reminder job: token, search, then one verification email per user.
//!
//! Runs strictly in sequence. The first failure ends the run; users after a
//! failed send are not attempted.

use crate::error::Result;
use crate::services::Auth0Client;
use crate::time_utils::format_utc_iso8601;
use chrono::{DateTime, Utc};

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderSummary {
    /// Number of users a verification email was requested for.
    pub reminded: usize,
}

/// One invocation of the reminder job.
pub struct ReminderJob {
    client: Auth0Client,
}

impl ReminderJob {
    pub fn new(client: Auth0Client) -> Self {
        Self { client }
    }

    /// Run the job against the current wall-clock time.
    pub async fn run(&self) -> Result<ReminderSummary> {
        self.run_at(Utc::now()).await
    }

    /// Run the job as if invoked at `now`.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<ReminderSummary> {
        tracing::info!(
            started_at = %format_utc_iso8601(now),
            "Starting Auth0 email reminder job"
        );

        let token = self.client.request_access_token().await?;
        let users = self.client.search_unverified_users(&token, now).await?;

        if users.is_empty() {
            tracing::info!("No unverified users found");
            return Ok(ReminderSummary::default());
        }

        tracing::info!(count = users.len(), "Found unverified users");

        for user in &users {
            tracing::info!(
                email = user.display_email(),
                user_id = %user.user_id,
                "Resending verification email"
            );
            self.client
                .send_verification_email(&token, &user.user_id)
                .await?;
        }

        let summary = ReminderSummary {
            reminded: users.len(),
        };
        tracing::info!(
            count = summary.reminded,
            "Successfully sent reminders to {} user(s)",
            summary.reminded
        );
        Ok(summary)
    }
}
