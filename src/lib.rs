//! # bluelink-rs
//!
//! A Rust client for Hyundai's BlueLink remote vehicle service.
//!
//! This crate authenticates a BlueLink account, enumerates the vehicles
//! registered to it, and issues remote commands (lock, unlock, remote start
//! with climate options, stop, locate, odometer) against a specific vehicle
//! identified by its VIN.
//!
//! ## Features
//!
//! - **Session authentication**: the vendor's CSRF/form login exchange,
//!   with the session token attached to every command
//! - **Typed commands**: one method per remote command, decoding the
//!   vendor's response envelopes into plain values
//! - **Local option validation**: enumerated climate options are checked
//!   against the vendor's fixed sets before any network round trip
//! - **Secret hygiene**: password, PIN, and token never appear in `Debug`
//!   output
//! - **Async-first**: built on Tokio and reqwest
//!
//! Commands are accepted-or-rejected by the backend; success never
//! guarantees the physical action completed. The client performs no retry
//! and no silent re-authentication: every failure propagates to the caller
//! as a typed [`Error`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bluelink_rs::{BlueLinkClient, Credentials, StartOptions, Temperature, Vin};
//!
//! #[tokio::main]
//! async fn main() -> bluelink_rs::Result<()> {
//!     let client = BlueLinkClient::new(Credentials::from_env()?)?;
//!     client.login().await?;
//!
//!     // List vehicles on the account
//!     for (vin, vehicle) in client.vehicles().list().await? {
//!         println!("{} - {}", vehicle.model(), vin);
//!     }
//!
//!     // Issue commands against one vehicle
//!     let vin = Vin::new("KMHL14JA5MA123456");
//!     if let Some(vehicle) = client.vehicles().get(&vin).await? {
//!         vehicle.lock().await?;
//!         let options = StartOptions::new()
//!             .duration_minutes(5)
//!             .temperature(Temperature::Degrees(72))
//!             .defrost(true);
//!         vehicle.start(&options).await?;
//!         println!("odometer: {}", vehicle.odometer().await?);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use api::{Vehicle, VehiclesService};
pub use auth::{Credentials, Session};
pub use client::{BlueLinkClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{StartOptions, Temperature, VehicleInfo, Vin};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bluelink_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{Vehicle, VehiclesService};
    pub use crate::auth::{Credentials, Session};
    pub use crate::client::{BlueLinkClient, ClientConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{StartOptions, Temperature, VehicleInfo, Vin};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vin_creation() {
        let vin = Vin::new("KMHL14JA5MA123456");
        assert_eq!(vin.as_str(), "KMHL14JA5MA123456");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(DEFAULT_BASE_URL, "https://owners.hyundaiusa.com");
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
    }
}
