//! Climate and remote-start option types.
//!
//! Option values are validated locally against the vendor's fixed sets
//! before any network call, so a request the backend would reject anyway
//! never costs a round trip.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Cabin temperature setting for remote start.
///
/// The vendor accepts the symbolic codes `LO` and `HI`, or a Fahrenheit
/// value inside its supported band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperature {
    /// Maximum cooling.
    Lo,
    /// Maximum heat.
    Hi,
    /// An explicit cabin temperature in degrees Fahrenheit.
    Degrees(u8),
}

impl Temperature {
    /// Lowest explicit temperature the vendor accepts, in °F.
    pub const MIN_DEGREES: u8 = 62;
    /// Highest explicit temperature the vendor accepts, in °F.
    pub const MAX_DEGREES: u8 = 82;

    /// Validate this setting against the vendor's fixed set.
    pub fn validate(&self) -> Result<()> {
        match self {
            Temperature::Lo | Temperature::Hi => Ok(()),
            Temperature::Degrees(deg) => {
                if (Self::MIN_DEGREES..=Self::MAX_DEGREES).contains(deg) {
                    Ok(())
                } else {
                    Err(Error::InvalidOption(format!(
                        "temperature {deg}F is outside the supported {}-{}F range",
                        Self::MIN_DEGREES,
                        Self::MAX_DEGREES
                    )))
                }
            }
        }
    }

    /// The vendor's wire representation for this setting.
    pub(crate) fn vendor_code(&self) -> String {
        match self {
            Temperature::Lo => "LO".to_string(),
            Temperature::Hi => "HI".to_string(),
            Temperature::Degrees(deg) => deg.to_string(),
        }
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Temperature::Lo
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Lo => write!(f, "LO"),
            Temperature::Hi => write!(f, "HI"),
            Temperature::Degrees(deg) => write!(f, "{deg}F"),
        }
    }
}

impl FromStr for Temperature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LO" => Ok(Temperature::Lo),
            "HI" => Ok(Temperature::Hi),
            other => other
                .parse::<u8>()
                .map(Temperature::Degrees)
                .map_err(|_| {
                    Error::InvalidOption(format!(
                        "temperature must be LO, HI, or a Fahrenheit value, got {s:?}"
                    ))
                }),
        }
    }
}

/// Options for [`Vehicle::start`](crate::api::Vehicle::start).
///
/// Defaults match the vendor dashboard: ten minutes, maximum cooling, no
/// defrost, both front seats at level 4.
///
/// # Example
///
/// ```
/// use bluelink_rs::{StartOptions, Temperature};
///
/// let options = StartOptions::new()
///     .duration_minutes(5)
///     .temperature(Temperature::Degrees(72))
///     .defrost(true)
///     .driver_seat_heat(0)
///     .passenger_seat_heat(0);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartOptions {
    duration_minutes: u8,
    temperature: Temperature,
    defrost: bool,
    driver_seat_heat: u8,
    passenger_seat_heat: u8,
}

impl StartOptions {
    /// Longest engine run the vendor accepts, in minutes.
    pub const MAX_DURATION_MINUTES: u8 = 10;
    /// Highest seat-heat level; 0 means off.
    pub const MAX_SEAT_HEAT: u8 = 8;

    /// Create options with the vendor defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// How long to run the engine, in minutes (1 to 10).
    pub fn duration_minutes(mut self, minutes: u8) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Cabin temperature setting.
    pub fn temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = temperature;
        self
    }

    /// Whether to run the defroster.
    pub fn defrost(mut self, defrost: bool) -> Self {
        self.defrost = defrost;
        self
    }

    /// Driver seat-heat level (0 = off, up to 8).
    pub fn driver_seat_heat(mut self, level: u8) -> Self {
        self.driver_seat_heat = level;
        self
    }

    /// Passenger seat-heat level (0 = off, up to 8).
    pub fn passenger_seat_heat(mut self, level: u8) -> Self {
        self.passenger_seat_heat = level;
        self
    }

    /// Validate every option against its fixed set.
    ///
    /// Called by [`Vehicle::start`](crate::api::Vehicle::start) before the
    /// request is built; an out-of-range value fails here with
    /// [`Error::InvalidOption`] and costs no network round trip.
    pub fn validate(&self) -> Result<()> {
        if self.duration_minutes == 0 || self.duration_minutes > Self::MAX_DURATION_MINUTES {
            return Err(Error::InvalidOption(format!(
                "duration must be 1-{} minutes, got {}",
                Self::MAX_DURATION_MINUTES,
                self.duration_minutes
            )));
        }
        self.temperature.validate()?;
        for (name, level) in [
            ("driver seat heat", self.driver_seat_heat),
            ("passenger seat heat", self.passenger_seat_heat),
        ] {
            if level > Self::MAX_SEAT_HEAT {
                return Err(Error::InvalidOption(format!(
                    "{name} level must be 0-{}, got {level}",
                    Self::MAX_SEAT_HEAT
                )));
            }
        }
        Ok(())
    }

    /// Encode the options as the vendor's `ignitionstart` form fields.
    ///
    /// `seatHeaterVentInfo` is a JSON document serialized to a string; the
    /// vendor expects a string field, not nested JSON.
    pub(crate) fn form_fields(&self) -> Result<Vec<(&'static str, String)>> {
        self.validate()?;
        let seat_heat = serde_json::json!({
            "drvSeatHeatState": self.driver_seat_heat,
            "astSeatHeatState": self.passenger_seat_heat,
        });
        Ok(vec![
            ("airCtrl", "true".to_string()),
            ("igniOnDuration", self.duration_minutes.to_string()),
            ("airTempvalue", self.temperature.vendor_code()),
            ("defrost", self.defrost.to_string()),
            ("heating1", "0".to_string()),
            ("seatHeaterVentInfo", seat_heat.to_string()),
        ])
    }
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            duration_minutes: 10,
            temperature: Temperature::default(),
            defrost: false,
            driver_seat_heat: 4,
            passenger_seat_heat: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_parsing() {
        assert_eq!("lo".parse::<Temperature>().unwrap(), Temperature::Lo);
        assert_eq!("HI".parse::<Temperature>().unwrap(), Temperature::Hi);
        assert_eq!(
            "72".parse::<Temperature>().unwrap(),
            Temperature::Degrees(72)
        );
        assert!("warm".parse::<Temperature>().is_err());
    }

    #[test]
    fn test_temperature_bounds() {
        assert!(Temperature::Degrees(62).validate().is_ok());
        assert!(Temperature::Degrees(82).validate().is_ok());
        assert!(Temperature::Degrees(40).validate().is_err());
        assert!(Temperature::Degrees(90).validate().is_err());
        assert!(Temperature::Lo.validate().is_ok());
    }

    #[test]
    fn test_duration_bounds() {
        assert!(StartOptions::new().duration_minutes(0).validate().is_err());
        assert!(StartOptions::new().duration_minutes(11).validate().is_err());
        assert!(StartOptions::new().duration_minutes(10).validate().is_ok());
    }

    #[test]
    fn test_seat_heat_bounds() {
        assert!(StartOptions::new().driver_seat_heat(9).validate().is_err());
        assert!(StartOptions::new().passenger_seat_heat(8).validate().is_ok());
        assert!(StartOptions::new().driver_seat_heat(0).validate().is_ok());
    }

    #[test]
    fn test_form_encoding() {
        let fields = StartOptions::new()
            .duration_minutes(5)
            .temperature(Temperature::Degrees(72))
            .defrost(true)
            .driver_seat_heat(2)
            .passenger_seat_heat(0)
            .form_fields()
            .unwrap();

        let lookup = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(lookup("igniOnDuration"), "5");
        assert_eq!(lookup("airTempvalue"), "72");
        assert_eq!(lookup("defrost"), "true");
        assert_eq!(
            lookup("seatHeaterVentInfo"),
            r#"{"astSeatHeatState":0,"drvSeatHeatState":2}"#
        );
    }

    #[test]
    fn test_invalid_options_fail_encoding() {
        let err = StartOptions::new()
            .temperature(Temperature::Degrees(40))
            .form_fields()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidOption(_)));
    }
}
