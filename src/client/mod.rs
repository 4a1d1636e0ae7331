//! HTTP client and request layer for the BlueLink API.
//!
//! This module provides the main entry point [`BlueLinkClient`].
//!
//! # Example
//!
//! ```no_run
//! use bluelink_rs::{BlueLinkClient, Credentials};
//!
//! # async fn example() -> bluelink_rs::Result<()> {
//! let client = BlueLinkClient::new(Credentials::from_env()?)?;
//! client.login().await?;
//!
//! let vehicles = client.vehicles().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::BlueLinkClient;
pub(crate) use http::{ClientInner, REMOTE_ACTION_PATH, VEHICLE_HEALTH_PATH};
