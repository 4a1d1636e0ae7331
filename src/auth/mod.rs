//! Authentication and session management for the BlueLink API.
//!
//! Credentials are an explicit configuration struct populated once at the
//! application boundary and passed by value into the client; the library
//! never reads the environment on its own.
//!
//! ```no_run
//! use bluelink_rs::{BlueLinkClient, Credentials};
//!
//! # async fn example() -> bluelink_rs::Result<()> {
//! let credentials = Credentials::from_env()?;
//! let client = BlueLinkClient::new(credentials)?;
//! client.login().await?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod session;

pub use credentials::{Credentials, EMAIL_VAR, PASSWORD_VAR, PIN_VAR};
pub use session::Session;
