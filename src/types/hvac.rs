// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC operating mode.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Operating mode of the air conditioner as seen by the control surface.
///
/// The device stores power (`ON_OFF`) and mode (`MODE`) in separate fields;
/// `Off` stands for "powered off" regardless of the stored mode.
///
/// | Mode       | `MODE` code |
/// |------------|-------------|
/// | `Cool`     | 1           |
/// | `Dry`      | 2           |
/// | `Heat`     | 3           |
/// | `FanOnly`  | 4           |
/// | `HeatCool` | 5           |
///
/// # Examples
///
/// ```
/// use ulisse_lib::types::HvacMode;
///
/// assert_eq!(HvacMode::Heat.mode_code(), Some(3));
/// assert_eq!(HvacMode::Off.mode_code(), None);
/// assert_eq!(HvacMode::from_mode_code(5), Some(HvacMode::HeatCool));
/// assert_eq!("fan_only".parse::<HvacMode>().unwrap(), HvacMode::FanOnly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    /// Powered off.
    Off,
    /// Cooling.
    Cool,
    /// Dehumidifying.
    Dry,
    /// Heating.
    Heat,
    /// Fan only, no compressor.
    FanOnly,
    /// Automatic heating or cooling.
    HeatCool,
}

impl HvacMode {
    /// All modes offered by the control surface.
    pub const ALL: [Self; 6] = [
        Self::Off,
        Self::Cool,
        Self::Dry,
        Self::Heat,
        Self::FanOnly,
        Self::HeatCool,
    ];

    /// Returns the device `MODE` code, or `None` for [`HvacMode::Off`].
    #[must_use]
    pub const fn mode_code(&self) -> Option<i64> {
        match self {
            Self::Off => None,
            Self::Cool => Some(1),
            Self::Dry => Some(2),
            Self::Heat => Some(3),
            Self::FanOnly => Some(4),
            Self::HeatCool => Some(5),
        }
    }

    /// Maps a device `MODE` code to a mode.
    #[must_use]
    pub const fn from_mode_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Cool),
            2 => Some(Self::Dry),
            3 => Some(Self::Heat),
            4 => Some(Self::FanOnly),
            5 => Some(Self::HeatCool),
            _ => None,
        }
    }

    /// Derives the mode from the `ON_OFF` and `MODE` device fields.
    ///
    /// Returns `None` when power is unknown. A powered device with an
    /// unknown or unmapped mode code reads as [`HvacMode::Off`].
    #[must_use]
    pub fn from_device(on_off: Option<i64>, mode: Option<i64>) -> Option<Self> {
        let on_off = on_off?;
        if on_off != 1 {
            return Some(Self::Off);
        }
        Some(mode.and_then(Self::from_mode_code).unwrap_or(Self::Off))
    }

    /// Returns the `ON_OFF` value this mode requires.
    #[must_use]
    pub const fn on_off(&self) -> i64 {
        match self {
            Self::Off => 0,
            _ => 1,
        }
    }

    /// Returns the mode identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Cool => "cool",
            Self::Dry => "dry",
            Self::Heat => "heat",
            Self::FanOnly => "fan_only",
            Self::HeatCool => "heat_cool",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::InvalidHvacMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_codes_round_trip() {
        for mode in HvacMode::ALL {
            if let Some(code) = mode.mode_code() {
                assert_eq!(HvacMode::from_mode_code(code), Some(mode));
            }
        }
    }

    #[test]
    fn unknown_power_is_unknown_mode() {
        assert_eq!(HvacMode::from_device(None, Some(3)), None);
    }

    #[test]
    fn powered_off_is_off_regardless_of_mode() {
        assert_eq!(HvacMode::from_device(Some(0), Some(3)), Some(HvacMode::Off));
        assert_eq!(HvacMode::from_device(Some(2), Some(1)), Some(HvacMode::Off));
    }

    #[test]
    fn powered_on_maps_mode() {
        assert_eq!(HvacMode::from_device(Some(1), Some(1)), Some(HvacMode::Cool));
        assert_eq!(HvacMode::from_device(Some(1), Some(4)), Some(HvacMode::FanOnly));
    }

    #[test]
    fn unmapped_mode_falls_back_to_off() {
        assert_eq!(HvacMode::from_device(Some(1), Some(9)), Some(HvacMode::Off));
        assert_eq!(HvacMode::from_device(Some(1), None), Some(HvacMode::Off));
    }

    #[test]
    fn on_off_value() {
        assert_eq!(HvacMode::Off.on_off(), 0);
        assert_eq!(HvacMode::Dry.on_off(), 1);
    }

    #[test]
    fn parse_mode_names() {
        assert_eq!("HEAT_COOL".parse::<HvacMode>().unwrap(), HvacMode::HeatCool);
        assert!("auto".parse::<HvacMode>().is_err());
    }
}
