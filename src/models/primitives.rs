//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed Vehicle Identification Number.
///
/// The VIN uniquely identifies a vehicle within an account and is the lookup
/// key for vehicle handles.
///
/// # Example
///
/// ```
/// use bluelink_rs::Vin;
///
/// let vin = Vin::new("KMHL14JA5MA123456");
/// assert_eq!(vin.as_str(), "KMHL14JA5MA123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vin(String);

impl Vin {
    /// Create a new VIN from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the VIN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Vin {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Vin {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vin() {
        let vin: Vin = "5NPE34AF1HH123456".into();
        assert_eq!(vin.as_str(), "5NPE34AF1HH123456");
        assert_eq!(vin.to_string(), "5NPE34AF1HH123456");
    }
}
