//! # Error Types
//!
//! Typed errors for Jira API calls. API and decode failures keep the HTTP
//! status and the raw response body so callers can inspect what the server
//! actually said instead of getting an opaque message.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced by a Jira API call.
#[derive(Debug, Error)]
pub enum Error {
  /// The request could not be built or dispatched, or the response body
  /// could not be read from the wire.
  #[error("request to Jira failed")]
  Transport(#[from] reqwest::Error),

  /// Jira answered with a non-success status code.
  #[error("Jira returned HTTP {status}: {body}")]
  Api {
    /// Status code of the failed response.
    status: StatusCode,
    /// Raw response body, usually Jira's `errorMessages` JSON.
    body: String,
  },

  /// Jira answered with a success status but the body was not the JSON
  /// shape we expected.
  #[error("failed to decode Jira response (HTTP {status})")]
  Decode {
    /// Status code of the response whose body failed to decode.
    status: StatusCode,
    /// Raw response body that failed to decode.
    body: String,
    /// Underlying deserialization error.
    #[source]
    source: serde_json::Error,
  },
}

impl Error {
  /// Status code of the response this error was built from, if any.
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Error::Transport(e) => e.status(),
      Error::Api { status, .. } | Error::Decode { status, .. } => Some(*status),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_error_display_includes_status_and_body() {
    let err = Error::Api {
      status: StatusCode::NOT_FOUND,
      body: r#"{"errorMessages":["The user named 'fred' does not exist"]}"#.to_string(),
    };

    let message = err.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("does not exist"));
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
  }

  #[test]
  fn test_decode_error_keeps_body() {
    let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
    let err = Error::Decode {
      status: StatusCode::OK,
      body: "<html>".to_string(),
      source,
    };

    assert_eq!(err.status(), Some(StatusCode::OK));
    match err {
      Error::Decode { body, .. } => assert_eq!(body, "<html>"),
      _ => panic!("expected decode error"),
    }
  }
}
