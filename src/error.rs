//! Error types for the BlueLink API client.
//!
//! This module provides a single error type covering every failure mode of
//! the client, from network errors to vendor-reported command rejections.

use thiserror::Error;

/// A specialized `Result` type for BlueLink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all BlueLink API operations.
///
/// None of these are recovered internally: every failure propagates to the
/// caller, who decides whether to retry (typically by re-logging-in).
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure (timeout, connection refused, DNS failure).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The vendor backend responded but reported the action failed.
    #[error("BlueLink {action} request failed: {message}")]
    Api {
        /// The vendor service code that was invoked (e.g. `remotelock`).
        action: String,
        /// The vendor's reported failure message.
        message: String,
    },

    /// Credentials rejected by the vendor, or the login response was
    /// malformed.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// An operation requiring a session token was invoked before a
    /// successful login.
    #[error("not logged in; call login() first")]
    AuthenticationRequired,

    /// A command option value falls outside its fixed enumerated or bounded
    /// set. Detected locally, before any network call.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// Configuration error (e.g. missing credential environment variables).
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    ///
    /// Callers should respond by constructing a fresh login; the client
    /// never re-authenticates silently.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_) | Error::AuthenticationRequired)
    }

    /// Returns `true` if this error occurred below the vendor API, at the
    /// network level.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns `true` if the vendor backend answered and rejected the
    /// requested action.
    pub fn is_vendor_rejection(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns `true` if this error was raised locally, without any network
    /// round trip.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::InvalidOption(_) | Error::AuthenticationRequired | Error::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_classification() {
        assert!(Error::AuthenticationRequired.is_auth_error());
        assert!(Error::Authentication("bad credentials".into()).is_auth_error());
        assert!(!Error::InvalidOption("temp".into()).is_auth_error());
    }

    #[test]
    fn test_local_errors_never_vendor_rejections() {
        let err = Error::InvalidOption("seat heat 9".into());
        assert!(err.is_local());
        assert!(!err.is_vendor_rejection());
    }

    #[test]
    fn test_api_error_message() {
        let err = Error::Api {
            action: "remotelock".into(),
            message: "Vehicle offline".into(),
        };
        assert!(err.is_vendor_rejection());
        assert_eq!(
            err.to_string(),
            "BlueLink remotelock request failed: Vehicle offline"
        );
    }
}
