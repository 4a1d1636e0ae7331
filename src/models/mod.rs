//! Data models for the BlueLink API.
//!
//! This module contains the strongly-typed data structures used to interact
//! with the BlueLink backend, organized by domain:
//!
//! - [`primitives`] - Core types like [`Vin`]
//! - [`climate`] - Remote-start option types
//! - [`vehicle`] - Vehicle data decoded from the account listing
//!
//! The vendor's response envelopes are internal to the crate and decoded at
//! a single boundary in the client.

pub mod climate;
pub(crate) mod envelope;
pub mod primitives;
pub mod vehicle;

// Re-export commonly used types
pub use climate::{StartOptions, Temperature};
pub use primitives::Vin;
pub use vehicle::VehicleInfo;
