// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Verification reminder job.
//!
//! Resends Auth0 verification emails to users still unverified 24 hours
//! after sign-up. Runs once and exits; scheduling is left to cron or
//! whatever invokes it.

use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use verification_reminder::{config::Config, Auth0Client, ReminderJob};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Missing Auth0 configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(domain = %config.auth0_domain, "Configuration loaded");

    let job = ReminderJob::new(Auth0Client::new(&config));

    match job.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(
                step = e.step().map(tracing::field::display),
                detail = %e.detail(),
                "Reminder job failed"
            );
            ExitCode::FAILURE
        }
    }
}

/// Initialize console logging.
///
/// Human-readable by default; `LOG_FORMAT=json` emits one JSON object per line.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("verification_reminder=info,warn"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}
