//! Vehicle data decoded from the account listing.

use serde::Deserialize;

use super::envelope::{lenient_bool, lenient_i32};
use super::primitives::Vin;

/// Descriptive data for one vehicle on the account.
///
/// This is plain data decoded from the vendor's `getOwnerInfoService`
/// response. The VIN is immutable and matches the key under which the
/// vehicle is stored in the account listing. Live readings (odometer,
/// location) are never cached here; they are fetched fresh through the
/// [`Vehicle`](crate::api::Vehicle) handle.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleInfo {
    /// Vehicle Identification Number.
    #[serde(rename = "VinNumber")]
    pub vin: Vin,
    /// Owner-assigned nickname.
    #[serde(rename = "VehicleNickName", default)]
    pub nickname: String,
    /// Model name as reported by the vendor.
    #[serde(rename = "Name", default)]
    pub model: String,
    /// Model year.
    #[serde(rename = "Year", deserialize_with = "lenient_i32", default)]
    pub year: i32,
    /// Vendor registration identifier, attached to every remote command.
    #[serde(rename = "RegistrationID", default)]
    pub registration_id: String,
    /// Whether the vehicle has an active BlueLink subscription.
    #[serde(rename = "IsBlueLinkCar", deserialize_with = "lenient_bool", default)]
    pub has_bluelink: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_vendor_record() {
        let info: VehicleInfo = serde_json::from_value(json!({
            "VinNumber": "KMHL14JA5MA123456",
            "VehicleNickName": "Sonata",
            "Name": "Sonata SEL",
            "Year": "2021",
            "RegistrationID": "REG-1",
            "IsBlueLinkCar": "1"
        }))
        .unwrap();

        assert_eq!(info.vin.as_str(), "KMHL14JA5MA123456");
        assert_eq!(info.nickname, "Sonata");
        assert_eq!(info.year, 2021);
        assert!(info.has_bluelink);
    }
}
