// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - Auth0 calls and the job that sequences them.

pub mod auth0;
pub mod reminder;

pub use auth0::Auth0Client;
pub use reminder::{ReminderJob, ReminderSummary};
