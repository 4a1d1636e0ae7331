//! API surface for the BlueLink backend.
//!
//! [`VehiclesService`] exposes the account's vehicle listing; [`Vehicle`]
//! is the per-VIN handle carrying one method per remote command.

mod vehicle;
mod vehicles;

pub use vehicle::Vehicle;
pub use vehicles::VehiclesService;
