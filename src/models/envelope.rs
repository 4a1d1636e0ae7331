//! Vendor response envelope and per-endpoint payload types.
//!
//! Every BlueLink endpoint wraps its result in the same ad-hoc envelope:
//! `E_IFRESULT` carries a success marker, `E_IFFAILMSG` a failure message,
//! and `RESPONSE_STRING` the endpoint-specific payload. The envelope is
//! decoded in exactly one place ([`Envelope::into_payload`]) so decoding
//! failures stay localized and typed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{Error, Result};

/// The vendor's success marker in `E_IFRESULT`.
const SUCCESS_RESULT: &str = "Z:Success";

/// The wrapping response structure around every command result.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(rename = "E_IFRESULT")]
    pub result: String,
    #[serde(rename = "E_IFFAILMSG", default)]
    pub fail_msg: Option<String>,
    #[serde(rename = "RESPONSE_STRING", default)]
    pub payload: Option<Value>,
}

impl Envelope {
    /// Check the vendor's result marker and decode the payload into the
    /// endpoint's typed result.
    ///
    /// `action` is the vendor service code, used only for diagnostics.
    pub(crate) fn into_payload<T: DeserializeOwned>(self, action: &str) -> Result<T> {
        if self.result != SUCCESS_RESULT {
            return Err(self.into_rejection(action));
        }
        let payload = self.payload.ok_or_else(|| Error::Api {
            action: action.to_string(),
            message: "success envelope without a response payload".to_string(),
        })?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Check the vendor's result marker, ignoring any payload.
    ///
    /// Used by commands whose only meaningful result is acceptance
    /// (lock, unlock, start, stop).
    pub(crate) fn into_ack(self, action: &str) -> Result<()> {
        if self.result != SUCCESS_RESULT {
            return Err(self.into_rejection(action));
        }
        Ok(())
    }

    fn into_rejection(self, action: &str) -> Error {
        let message = match self.fail_msg.as_deref() {
            // The vendor reports "Bad Gateway" when a previous remote
            // request is still pending on its side.
            Some("Bad Gateway") => {
                "a previous request is still pending; wait and try again later".to_string()
            }
            Some(msg) => msg.to_string(),
            None => format!("unexpected result marker {:?}", self.result),
        };
        Error::Api {
            action: action.to_string(),
            message,
        }
    }
}

/// Login payload: the JWT attached to every subsequent command.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginPayload {
    #[serde(rename = "jwt_id")]
    pub jwt_id: String,
}

/// CSRF bootstrap document served before login.
#[derive(Debug, Deserialize)]
pub(crate) struct CsrfToken {
    pub jwt_token: String,
}

/// Account listing payload.
#[derive(Debug, Deserialize)]
pub(crate) struct OwnerInfoPayload {
    #[serde(rename = "OwnersVehiclesInfo", default)]
    pub vehicles: Vec<super::vehicle::VehicleInfo>,
}

/// Location payload returned by `getFindMyCar`.
#[derive(Debug, Deserialize)]
pub(crate) struct LocationPayload {
    pub coord: Coordinates,
}

/// A latitude/longitude pair, passed through without conversion or rounding.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Maintenance timeline payload; the odometer reading lives in the most
/// recent record.
#[derive(Debug, Deserialize)]
pub(crate) struct MaintenancePayload {
    #[serde(rename = "MaintenanceInfo", default)]
    pub records: Vec<MaintenanceRecord>,
}

/// One maintenance timeline record.
#[derive(Debug, Deserialize)]
pub(crate) struct MaintenanceRecord {
    #[serde(rename = "CurrentMileage", deserialize_with = "lenient_u64")]
    pub current_mileage: u64,
}

// The vendor emits scalar fields as bool/number/string inconsistently
// between endpoints and firmware generations. These deserializers accept
// all three shapes at the envelope boundary only.

pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom(format!("not an unsigned integer: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("not an unsigned integer: {s:?}"))),
        other => Err(serde::de::Error::custom(format!(
            "expected integer, got {other}"
        ))),
    }
}

pub(crate) fn lenient_i32<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Number(n) => n
            .as_i64()
            .map(|n| n as i32)
            .ok_or_else(|| serde::de::Error::custom(format!("not an integer: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| serde::de::Error::custom(format!("not an integer: {s:?}"))),
        other => Err(serde::de::Error::custom(format!(
            "expected integer, got {other}"
        ))),
    }
}

pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_i64().unwrap_or(0) != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "y" | "yes" => Ok(true),
            "false" | "0" | "n" | "no" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!("not a boolean: {other:?}"))),
        },
        other => Err(serde::de::Error::custom(format!(
            "expected boolean, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_decodes_payload() {
        let envelope: Envelope = serde_json::from_value(json!({
            "E_IFRESULT": "Z:Success",
            "RESPONSE_STRING": { "coord": { "lat": 37.7, "lon": -122.4 } }
        }))
        .unwrap();

        let location: LocationPayload = envelope.into_payload("getFindMyCar").unwrap();
        assert_eq!(location.coord.lat, 37.7);
        assert_eq!(location.coord.lon, -122.4);
    }

    #[test]
    fn test_failure_envelope_carries_vendor_message() {
        let envelope: Envelope = serde_json::from_value(json!({
            "E_IFRESULT": "Z:Fail",
            "E_IFFAILMSG": "Vehicle offline"
        }))
        .unwrap();

        let err = envelope.into_ack("remotelock").unwrap_err();
        match err {
            Error::Api { action, message } => {
                assert_eq!(action, "remotelock");
                assert_eq!(message, "Vehicle offline");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_pending_request_rephrased() {
        let envelope: Envelope = serde_json::from_value(json!({
            "E_IFRESULT": "Z:Fail",
            "E_IFFAILMSG": "Bad Gateway"
        }))
        .unwrap();

        let err = envelope.into_ack("ignitionstart").unwrap_err();
        assert!(err.to_string().contains("still pending"));
    }

    #[test]
    fn test_maintenance_mileage_accepts_string_and_number() {
        let payload: MaintenancePayload = serde_json::from_value(json!({
            "MaintenanceInfo": [
                { "CurrentMileage": "7643" },
                { "CurrentMileage": 7200 }
            ]
        }))
        .unwrap();

        assert_eq!(payload.records[0].current_mileage, 7643);
        assert_eq!(payload.records[1].current_mileage, 7200);
    }

    #[test]
    fn test_lenient_bool_shapes() {
        #[derive(Deserialize)]
        struct Flag {
            #[serde(deserialize_with = "lenient_bool")]
            value: bool,
        }

        for (raw, expected) in [
            (json!({"value": true}), true),
            (json!({"value": "true"}), true),
            (json!({"value": 1}), true),
            (json!({"value": "0"}), false),
            (json!({"value": false}), false),
        ] {
            let flag: Flag = serde_json::from_value(raw).unwrap();
            assert_eq!(flag.value, expected);
        }
    }
}
