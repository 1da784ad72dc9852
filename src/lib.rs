// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Verification reminder: nudge Auth0 users who never verified their email.
//!
//! Finds accounts still unverified a day after sign-up and asks Auth0 to
//! resend their verification email. Meant to be run once per invocation
//! by an external scheduler.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use config::Config;
pub use error::{AppError, Step};
pub use services::{Auth0Client, ReminderJob, ReminderSummary};
