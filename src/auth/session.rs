//! Session management for BlueLink authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::envelope::{CsrfToken, Envelope, LoginPayload};
use crate::{Credentials, Error, Result};

/// Path serving the CSRF bootstrap token.
const CSRF_TOKEN_PATH: &str = "/etc/designs/ownercommon/us/token.json";
/// Path that binds the CSRF token to the session cookie.
const CSRF_VALIDATE_PATH: &str = "/libs/granite/csrf/token.json";
/// Login endpoint.
const LOGIN_PATH: &str = "/bin/common/connectCar";

/// Authentication session for the BlueLink API.
///
/// A session is created unauthenticated and becomes authenticated after a
/// successful login through the owning client. It owns the credentials and the
/// vendor-issued session token, and produces the authentication form fields
/// attached to every remote command.
///
/// There is no silent refresh: when the vendor stops accepting the token,
/// operations fail and the caller logs in again.
///
/// # Thread Safety
///
/// `Session` can be shared across tasks; token state lives behind an
/// internal lock.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
}

struct SessionInner {
    credentials: Credentials,
    token: Option<SecretString>,
}

impl Session {
    /// Create an unauthenticated session holding `credentials`.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                credentials,
                token: None,
            })),
        }
    }

    /// The email address of the account this session belongs to.
    pub async fn email(&self) -> String {
        self.inner.read().await.credentials.email().to_string()
    }

    /// Whether a login has succeeded on this session.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.token.is_some()
    }

    /// Perform the vendor's login exchange and store the session token.
    ///
    /// Three round trips: fetch the CSRF bootstrap token, validate it
    /// against the session cookie, then submit the credential form. On any
    /// failure the session is left unauthenticated and an
    /// [`Error::Authentication`] is returned (network failures surface as
    /// [`Error::Transport`]).
    ///
    /// Re-calling simply re-authenticates, but each call costs the full
    /// exchange; callers should log in once per logical session.
    pub(crate) async fn login(&self, http: &reqwest::Client, base_url: &str) -> Result<()> {
        let credentials = self.inner.read().await.credentials.clone();

        let response = http
            .get(format!("{base_url}{CSRF_TOKEN_PATH}"))
            .send()
            .await?;
        let csrf: CsrfToken = response.json().await.map_err(|err| {
            Error::Authentication(format!("malformed CSRF token document: {err}"))
        })?;

        let response = http
            .get(format!("{base_url}{CSRF_VALIDATE_PATH}"))
            .header("csrf_token", &csrf.jwt_token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::Authentication(format!(
                "CSRF validation failed with status {}",
                response.status()
            )));
        }

        let form = [
            (":cq_csrf_token", csrf.jwt_token.clone()),
            ("username", credentials.email().to_string()),
            ("password", credentials.password().to_string()),
            ("url", format!("{base_url}/us/en/index.html")),
        ];
        let response = http
            .post(format!("{base_url}{LOGIN_PATH}"))
            .form(&form)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::Authentication(format!(
                "login rejected with status {}",
                response.status()
            )));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|err| Error::Authentication(format!("malformed login response: {err}")))?;
        let payload: LoginPayload = envelope.into_payload("login").map_err(|err| match err {
            Error::Api { message, .. } => Error::Authentication(message),
            other => other,
        })?;

        tracing::debug!(email = credentials.email(), "login succeeded");
        self.inner.write().await.token = Some(SecretString::from(payload.jwt_id));
        Ok(())
    }

    /// Authentication form fields attached to every remote command:
    /// `username`, `pin`, and the session token.
    ///
    /// # Errors
    ///
    /// [`Error::AuthenticationRequired`] if no login has succeeded. This is
    /// checked before any request is built, so an unauthenticated command
    /// never reaches the network.
    pub(crate) async fn command_form(&self) -> Result<Vec<(&'static str, String)>> {
        let inner = self.inner.read().await;
        let token = inner.token.as_ref().ok_or(Error::AuthenticationRequired)?;
        Ok(vec![
            ("username", inner.credentials.email().to_string()),
            ("pin", inner.credentials.pin().to_string()),
            ("token", token.expose_secret().to_string()),
        ])
    }

    /// Authentication form fields for account-level endpoints: `username`
    /// and the session token, without the PIN.
    pub(crate) async fn account_form(&self) -> Result<Vec<(&'static str, String)>> {
        let inner = self.inner.read().await;
        let token = inner.token.as_ref().ok_or(Error::AuthenticationRequired)?;
        Ok(vec![
            ("username", inner.credentials.email().to_string()),
            ("token", token.expose_secret().to_string()),
        ])
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose password, PIN, or token.
        match self.inner.try_read() {
            Ok(inner) => f
                .debug_struct("Session")
                .field("email", &inner.credentials.email())
                .field("authenticated", &inner.token.is_some())
                .finish(),
            Err(_) => f
                .debug_struct("Session")
                .field("email", &"<locked>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_session_is_unauthenticated() {
        let session = Session::new(Credentials::new("me@example.com", "pw", "1234"));
        assert!(!session.is_authenticated().await);
        assert!(matches!(
            session.command_form().await,
            Err(Error::AuthenticationRequired)
        ));
    }

    #[tokio::test]
    async fn test_debug_redacts_token() {
        let session = Session::new(Credentials::new("me@example.com", "hunter2", "9876"));
        session.inner.write().await.token = Some(SecretString::from("jwt-secret".to_string()));

        let debug_str = format!("{session:?}");
        assert!(debug_str.contains("me@example.com"));
        assert!(debug_str.contains("authenticated: true"));
        assert!(!debug_str.contains("jwt-secret"));
        assert!(!debug_str.contains("hunter2"));
        assert!(!debug_str.contains("9876"));
    }
}
