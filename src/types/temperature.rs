// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature type.
//!
//! The device encodes temperatures as integer tenths of a degree Celsius.
//! This module provides a type-safe target temperature that is always within
//! the range the control surface accepts.

use std::fmt;

use crate::error::ValueError;

/// Target temperature in tenths of a degree Celsius (10.0°C - 32.0°C).
///
/// # Examples
///
/// ```
/// use ulisse_lib::types::Temperature;
///
/// let temp = Temperature::from_celsius(23.5).unwrap();
/// assert_eq!(temp.tenths(), 235);
/// assert!((temp.celsius() - 23.5).abs() < f64::EPSILON);
///
/// // Outside the supported range
/// assert!(Temperature::from_celsius(35.0).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Temperature(i64);

impl Temperature {
    /// Lowest settable temperature in °C.
    pub const MIN_CELSIUS: f64 = 10.0;

    /// Highest settable temperature in °C.
    pub const MAX_CELSIUS: f64 = 32.0;

    /// Resolution of the device in °C.
    pub const PRECISION: f64 = 0.1;

    /// Lowest settable temperature.
    pub const MIN: Self = Self(100);

    /// Highest settable temperature.
    pub const MAX: Self = Self(320);

    /// Creates a target temperature from degrees Celsius.
    ///
    /// The value is rounded to the nearest tenth of a degree.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TemperatureOutOfRange` if the value is outside
    /// [10.0, 32.0] or not a finite number.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_celsius(celsius: f64) -> Result<Self, ValueError> {
        if !(Self::MIN_CELSIUS..=Self::MAX_CELSIUS).contains(&celsius) {
            return Err(ValueError::TemperatureOutOfRange {
                min: Self::MIN_CELSIUS,
                max: Self::MAX_CELSIUS,
                actual: celsius,
            });
        }
        // Safe: the range check bounds the product to [100, 320]
        Ok(Self((celsius * 10.0).round() as i64))
    }

    /// Creates a target temperature from tenths of a degree Celsius.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TemperatureOutOfRange` if the value is outside
    /// [100, 320].
    pub fn from_tenths(tenths: i64) -> Result<Self, ValueError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&tenths) {
            return Err(ValueError::TemperatureOutOfRange {
                min: Self::MIN_CELSIUS,
                max: Self::MAX_CELSIUS,
                actual: tenths_to_celsius(tenths),
            });
        }
        Ok(Self(tenths))
    }

    /// Returns the raw device value in tenths of °C.
    #[must_use]
    pub const fn tenths(&self) -> i64 {
        self.0
    }

    /// Returns the temperature in °C.
    #[must_use]
    pub fn celsius(&self) -> f64 {
        tenths_to_celsius(self.0)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.celsius())
    }
}

impl TryFrom<f64> for Temperature {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_celsius(value)
    }
}

impl TryFrom<i64> for Temperature {
    type Error = ValueError;

    fn try_from(tenths: i64) -> Result<Self, Self::Error> {
        Self::from_tenths(tenths)
    }
}

impl From<Temperature> for i64 {
    fn from(temperature: Temperature) -> Self {
        temperature.0
    }
}

/// Converts a device reading in tenths of °C to °C.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn tenths_to_celsius(tenths: i64) -> f64 {
    tenths as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(Temperature::from_celsius(10.0).unwrap(), Temperature::MIN);
        assert_eq!(Temperature::from_celsius(32.0).unwrap(), Temperature::MAX);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(Temperature::from_celsius(9.9).is_err());
        assert!(Temperature::from_celsius(32.1).is_err());
        assert!(Temperature::from_celsius(f64::NAN).is_err());
        assert!(Temperature::from_tenths(99).is_err());
        assert!(Temperature::from_tenths(321).is_err());
    }

    #[test]
    fn rounds_to_nearest_tenth() {
        assert_eq!(Temperature::from_celsius(23.0).unwrap().tenths(), 230);
        assert_eq!(Temperature::from_celsius(21.26).unwrap().tenths(), 213);
        assert_eq!(Temperature::from_celsius(19.94).unwrap().tenths(), 199);
    }

    #[test]
    fn celsius_conversion() {
        let temp = Temperature::from_tenths(255).unwrap();
        assert!((temp.celsius() - 25.5).abs() < 1e-9);
    }

    #[test]
    fn display() {
        assert_eq!(Temperature::from_tenths(215).unwrap().to_string(), "21.5°C");
    }

    #[test]
    fn deserialize_enforces_range() {
        let temp: Temperature = serde_json::from_str("235").unwrap();
        assert_eq!(temp.tenths(), 235);
        assert_eq!(serde_json::to_string(&temp).unwrap(), "235");

        for raw in ["999", "99", "321", "-230"] {
            assert!(serde_json::from_str::<Temperature>(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn out_of_range_error_reports_celsius() {
        let err = Temperature::from_tenths(400).unwrap_err();
        assert_eq!(
            err,
            ValueError::TemperatureOutOfRange {
                min: 10.0,
                max: 32.0,
                actual: 40.0
            }
        );
    }
}
