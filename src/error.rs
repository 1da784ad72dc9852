// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with best-effort detail extraction for logging.

use crate::config::ConfigError;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Which Auth0 call an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `POST /oauth/token`
    Token,
    /// `GET /api/v2/users`
    Search,
    /// `POST /api/v2/jobs/verification-email`
    Dispatch,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Token => "token exchange",
            Step::Search => "user search",
            Step::Dispatch => "verification email",
        };
        f.write_str(name)
    }
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Auth0 {step} request failed: {message}")]
    Request { step: Step, message: String },

    #[error("Auth0 {step} returned HTTP {status}")]
    Api {
        step: Step,
        status: StatusCode,
        /// Response body: parsed JSON, or the raw text as a JSON string.
        payload: Option<Value>,
    },

    #[error("Auth0 {step} response could not be parsed: {message}")]
    Decode { step: Step, message: String },
}

impl AppError {
    /// The step that failed, if the error came from an Auth0 call.
    pub fn step(&self) -> Option<Step> {
        match self {
            AppError::Config(_) => None,
            AppError::Request { step, .. }
            | AppError::Api { step, .. }
            | AppError::Decode { step, .. } => Some(*step),
        }
    }

    /// Most useful detail for a log line.
    ///
    /// Prefers the provider's error payload when one was returned, falling
    /// back to the error message.
    pub fn detail(&self) -> String {
        match self {
            AppError::Api {
                payload: Some(payload),
                ..
            } => match payload {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            },
            other => other.to_string(),
        }
    }
}

/// Result type alias for the job
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_prefers_json_payload() {
        let err = AppError::Api {
            step: Step::Token,
            status: StatusCode::UNAUTHORIZED,
            payload: Some(json!({
                "error": "access_denied",
                "error_description": "Unauthorized"
            })),
        };

        let detail = err.detail();
        assert!(detail.contains("access_denied"));
        assert!(detail.contains("Unauthorized"));
    }

    #[test]
    fn test_detail_uses_raw_text_payload() {
        let err = AppError::Api {
            step: Step::Search,
            status: StatusCode::BAD_GATEWAY,
            payload: Some(Value::String("upstream down".to_string())),
        };

        assert_eq!(err.detail(), "upstream down");
    }

    #[test]
    fn test_detail_falls_back_to_message() {
        let err = AppError::Api {
            step: Step::Dispatch,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            payload: None,
        };
        assert_eq!(
            err.detail(),
            "Auth0 verification email returned HTTP 500 Internal Server Error"
        );

        let err = AppError::Request {
            step: Step::Search,
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.detail(),
            "Auth0 user search request failed: connection refused"
        );
    }

    #[test]
    fn test_config_error_has_no_step() {
        let err = AppError::from(ConfigError::Missing("AUTH0_DOMAIN"));
        assert_eq!(err.step(), None);
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: AUTH0_DOMAIN"
        );
    }
}
