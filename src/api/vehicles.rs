//! Vehicles service: account listing and VIN lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::envelope::OwnerInfoPayload;
use crate::models::{VehicleInfo, Vin};
use crate::Result;

use super::vehicle::Vehicle;

/// Service code for the account listing endpoint.
const OWNER_INFO_ACTION: &str = "getOwnerInfoService";

/// Service for the account's vehicle listing.
///
/// The listing is fetched once per client and cached for its lifetime;
/// there is no refresh or invalidation policy, so a new client must be
/// constructed to pick up account changes.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: bluelink_rs::BlueLinkClient) -> bluelink_rs::Result<()> {
/// for (vin, vehicle) in client.vehicles().list().await? {
///     println!("{} - {}", vehicle.nickname(), vin);
/// }
/// # Ok(())
/// # }
/// ```
pub struct VehiclesService {
    inner: Arc<ClientInner>,
}

impl VehiclesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// All vehicles linked to the account, keyed by VIN.
    ///
    /// The first call issues one authenticated request and populates the
    /// cache; subsequent calls build handles from the cache without any
    /// network request.
    ///
    /// # Errors
    ///
    /// [`Error::AuthenticationRequired`](crate::Error::AuthenticationRequired)
    /// if no login has succeeded.
    pub async fn list(&self) -> Result<HashMap<Vin, Vehicle>> {
        if let Some(cached) = self.inner.vehicle_cache.read().await.as_ref() {
            return Ok(self.handles(cached));
        }

        let envelope = self.inner.account_request(OWNER_INFO_ACTION).await?;
        let payload: OwnerInfoPayload = envelope.into_payload(OWNER_INFO_ACTION)?;
        let infos: HashMap<_, _> = payload
            .vehicles
            .into_iter()
            .map(|info| (info.vin.clone(), info))
            .collect();
        tracing::debug!(count = infos.len(), "fetched account vehicle listing");

        let handles = self.handles(&infos);
        *self.inner.vehicle_cache.write().await = Some(infos);
        Ok(handles)
    }

    /// Look up one vehicle by VIN.
    ///
    /// Returns `None` when no vehicle with that VIN is linked to the
    /// account. Uses the same cached listing as [`list`](Self::list).
    pub async fn get(&self, vin: &Vin) -> Result<Option<Vehicle>> {
        let mut vehicles = self.list().await?;
        Ok(vehicles.remove(vin))
    }

    fn handles(&self, infos: &HashMap<Vin, VehicleInfo>) -> HashMap<Vin, Vehicle> {
        infos
            .iter()
            .map(|(vin, info)| (vin.clone(), Vehicle::new(info.clone(), self.inner.clone())))
            .collect()
    }
}
