// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Auth0 Management API payloads.

pub mod job;
pub mod token;
pub mod user;

pub use job::{VerificationEmailRequest, VerificationJob};
pub use token::{AccessToken, ClientCredentialsRequest, TokenResponse};
pub use user::Auth0User;
