// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// How long a user may stay unverified before being reminded.
pub const UNVERIFIED_GRACE_HOURS: i64 = 24;

/// Format a UTC timestamp as ISO-8601 with milliseconds and a `Z` suffix.
pub fn format_utc_iso8601(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Creation cutoff: users created at or before this instant are overdue.
pub fn reminder_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::hours(UNVERIFIED_GRACE_HOURS)
}
