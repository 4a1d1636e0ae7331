//! Account credentials for the BlueLink service.

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable holding the account email.
pub const EMAIL_VAR: &str = "BLUELINK_EMAIL";
/// Environment variable holding the account password.
pub const PASSWORD_VAR: &str = "BLUELINK_PASSWORD";
/// Environment variable holding the account PIN.
pub const PIN_VAR: &str = "BLUELINK_PIN";

/// Credentials for a BlueLink account.
///
/// Password and PIN are held as [`SecretString`] and never appear in
/// `Debug` output. The library never reads the process environment
/// implicitly; [`Credentials::from_env`] is an explicit constructor meant
/// for the application boundary (the CLI uses it).
///
/// No validation is performed beyond non-empty: invalid values surface only
/// as an [`Error::Authentication`] from the vendor.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: SecretString,
    pin: SecretString,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        pin: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            pin: SecretString::from(pin.into()),
        }
    }

    /// Read credentials from `BLUELINK_EMAIL`, `BLUELINK_PASSWORD`, and
    /// `BLUELINK_PIN`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first variable that is missing
    /// or empty.
    pub fn from_env() -> Result<Self> {
        let read = |var: &str| -> Result<String> {
            match std::env::var(var) {
                Ok(value) if !value.is_empty() => Ok(value),
                _ => Err(Error::Config(format!("{var} is not set"))),
            }
        };
        Ok(Self::new(read(EMAIL_VAR)?, read(PASSWORD_VAR)?, read(PIN_VAR)?))
    }

    /// The account email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }

    pub(crate) fn pin(&self) -> &str {
        self.pin.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("pin", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("me@example.com", "hunter2", "1234");
        let debug_str = format!("{credentials:?}");
        assert!(debug_str.contains("me@example.com"));
        assert!(!debug_str.contains("hunter2"));
        assert!(!debug_str.contains("1234"));
        assert!(debug_str.contains("REDACTED"));
    }
}
