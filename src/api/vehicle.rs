//! The per-vehicle command handle.

use std::sync::Arc;

use crate::client::{ClientInner, REMOTE_ACTION_PATH, VEHICLE_HEALTH_PATH};
use crate::models::envelope::{LocationPayload, MaintenancePayload};
use crate::models::{StartOptions, VehicleInfo, Vin};
use crate::{Error, Result};

/// The vendor service codes behind each remote command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RemoteAction {
    Lock,
    Unlock,
    Start,
    Stop,
    Find,
    Odometer,
}

impl RemoteAction {
    /// The `service` form field value for this action.
    pub(crate) fn service(&self) -> &'static str {
        match self {
            RemoteAction::Lock => "remotelock",
            RemoteAction::Unlock => "remoteunlock",
            RemoteAction::Start => "ignitionstart",
            RemoteAction::Stop => "ignitionstop",
            RemoteAction::Find => "getFindMyCar",
            RemoteAction::Odometer => "getRecMaintenanceTimeline",
        }
    }

    /// The servlet this action is posted to. Everything goes through
    /// `remoteAction` except the maintenance timeline.
    pub(crate) fn servlet_path(&self) -> &'static str {
        match self {
            RemoteAction::Odometer => VEHICLE_HEALTH_PATH,
            _ => REMOTE_ACTION_PATH,
        }
    }
}

/// Handle for issuing remote commands against a single vehicle.
///
/// Every command is a stateless point-in-time request authenticated with
/// the owning client's current session token: the call suspends until the
/// vendor confirms or rejects the action, and success means the backend
/// accepted the request within its own semantics, not that the physical
/// action (e.g. the door actually locking) completed. There is no polling,
/// no command queue, and no cancellation of an in-flight vendor action.
///
/// # Example
///
/// ```no_run
/// use bluelink_rs::{BlueLinkClient, Credentials, StartOptions, Vin};
///
/// # async fn example() -> bluelink_rs::Result<()> {
/// let client = BlueLinkClient::new(Credentials::from_env()?)?;
/// client.login().await?;
///
/// let vin = Vin::new("KMHL14JA5MA123456");
/// if let Some(vehicle) = client.vehicles().get(&vin).await? {
///     vehicle.start(&StartOptions::new().duration_minutes(5)).await?;
///     let (lat, lon) = vehicle.find().await?;
///     println!("parked at {lat}, {lon}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Vehicle {
    info: VehicleInfo,
    inner: Arc<ClientInner>,
}

impl Vehicle {
    pub(crate) fn new(info: VehicleInfo, inner: Arc<ClientInner>) -> Self {
        Self { info, inner }
    }

    /// Vehicle Identification Number.
    pub fn vin(&self) -> &Vin {
        &self.info.vin
    }

    /// Owner-assigned nickname.
    pub fn nickname(&self) -> &str {
        &self.info.nickname
    }

    /// Model name as reported by the vendor.
    pub fn model(&self) -> &str {
        &self.info.model
    }

    /// Model year.
    pub fn year(&self) -> i32 {
        self.info.year
    }

    /// Whether the vehicle has an active BlueLink subscription.
    pub fn has_bluelink(&self) -> bool {
        self.info.has_bluelink
    }

    /// The underlying vehicle data.
    pub fn info(&self) -> &VehicleInfo {
        &self.info
    }

    /// Lock the doors.
    ///
    /// Returns `true` when the backend accepted the request.
    pub async fn lock(&self) -> Result<bool> {
        self.ack(RemoteAction::Lock, Vec::new()).await?;
        Ok(true)
    }

    /// Unlock the doors.
    pub async fn unlock(&self) -> Result<bool> {
        self.ack(RemoteAction::Unlock, Vec::new()).await?;
        Ok(true)
    }

    /// Start the engine with the given climate options.
    ///
    /// Options are validated locally first; an out-of-range value fails
    /// with [`Error::InvalidOption`] before any network request is made.
    pub async fn start(&self, options: &StartOptions) -> Result<bool> {
        let fields = options.form_fields()?;
        self.ack(RemoteAction::Start, fields).await?;
        Ok(true)
    }

    /// Stop the engine.
    pub async fn stop(&self) -> Result<bool> {
        self.ack(RemoteAction::Stop, Vec::new()).await?;
        Ok(true)
    }

    /// Locate the vehicle.
    ///
    /// Returns `(latitude, longitude)` exactly as reported by the vendor,
    /// with no unit conversion or rounding.
    pub async fn find(&self) -> Result<(f64, f64)> {
        let action = RemoteAction::Find;
        let envelope = self
            .inner
            .vehicle_command(action.servlet_path(), action.service(), &self.info, Vec::new())
            .await?;
        let location: LocationPayload = envelope.into_payload(action.service())?;
        Ok((location.coord.lat, location.coord.lon))
    }

    /// Read the odometer, in the vendor's distance unit.
    ///
    /// Always fetched fresh from the maintenance timeline; never cached on
    /// the handle.
    pub async fn odometer(&self) -> Result<u64> {
        let action = RemoteAction::Odometer;
        let envelope = self
            .inner
            .vehicle_command(action.servlet_path(), action.service(), &self.info, Vec::new())
            .await?;
        let payload: MaintenancePayload = envelope.into_payload(action.service())?;
        let record = payload.records.first().ok_or_else(|| Error::Api {
            action: action.service().to_string(),
            message: "maintenance timeline is empty".to_string(),
        })?;
        Ok(record.current_mileage)
    }

    async fn ack(&self, action: RemoteAction, extra: Vec<(&'static str, String)>) -> Result<()> {
        let envelope = self
            .inner
            .vehicle_command(action.servlet_path(), action.service(), &self.info, extra)
            .await?;
        envelope.into_ack(action.service())
    }
}

impl std::fmt::Debug for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vehicle")
            .field("vin", &self.info.vin)
            .field("nickname", &self.info.nickname)
            .field("has_bluelink", &self.info.has_bluelink)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_service_codes() {
        assert_eq!(RemoteAction::Lock.service(), "remotelock");
        assert_eq!(RemoteAction::Start.service(), "ignitionstart");
        assert_eq!(RemoteAction::Odometer.service(), "getRecMaintenanceTimeline");
    }

    #[test]
    fn test_only_odometer_uses_health_servlet() {
        for action in [
            RemoteAction::Lock,
            RemoteAction::Unlock,
            RemoteAction::Start,
            RemoteAction::Stop,
            RemoteAction::Find,
        ] {
            assert_eq!(action.servlet_path(), REMOTE_ACTION_PATH);
        }
        assert_eq!(RemoteAction::Odometer.servlet_path(), VEHICLE_HEALTH_PATH);
    }
}
