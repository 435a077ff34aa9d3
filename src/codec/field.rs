// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named fields of the device state.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A named field of the Ulisse device state.
///
/// The device's wire string also carries anonymous positions; those are
/// modelled as gaps in the [`Schema`](super::Schema) and have no `Field`.
///
/// # Examples
///
/// ```
/// use ulisse_lib::codec::Field;
///
/// assert_eq!(Field::FanSpeed.as_str(), "FAN_SPEED");
/// assert_eq!("ON_OFF".parse::<Field>().unwrap(), Field::OnOff);
/// assert!("HUMIDITY".parse::<Field>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Field {
    /// Target temperature in tenths of °C.
    TemperatureIntended,
    /// Measured room temperature in tenths of °C.
    TemperatureMeasured,
    /// Power: 0 = off, 1 = on.
    OnOff,
    /// Operating mode code.
    Mode,
    /// Fan speed, 0 (auto) to 6.
    FanSpeed,
    /// Vertical louvre mode.
    VerticalAirMode,
    /// Whether the remote's temperature sensor is used.
    UseRemoteTemperature,
    /// Filter flag.
    UseFilter,
    /// Eco preset flag.
    UseEcoMode,
    /// Turbo preset flag.
    UseTurboMode,
    /// Night preset flag.
    UseNightMode,
    /// Display light mode.
    LightMode,
    /// Timer mode.
    TimerMode,
}

impl Field {
    /// Number of named fields.
    pub const COUNT: usize = 13;

    /// All named fields, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::TemperatureIntended,
        Self::TemperatureMeasured,
        Self::OnOff,
        Self::Mode,
        Self::FanSpeed,
        Self::VerticalAirMode,
        Self::UseRemoteTemperature,
        Self::UseFilter,
        Self::UseEcoMode,
        Self::UseTurboMode,
        Self::UseNightMode,
        Self::LightMode,
        Self::TimerMode,
    ];

    /// Returns the canonical field identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TemperatureIntended => "TEMPERATURE_INTENDED",
            Self::TemperatureMeasured => "TEMPERATURE_MEASURED",
            Self::OnOff => "ON_OFF",
            Self::Mode => "MODE",
            Self::FanSpeed => "FAN_SPEED",
            Self::VerticalAirMode => "VERTICAL_AIR_MODE",
            Self::UseRemoteTemperature => "USE_REMOTE_TEMPERATURE",
            Self::UseFilter => "USE_FILTER",
            Self::UseEcoMode => "USE_ECO_MODE",
            Self::UseTurboMode => "USE_TURBO_MODE",
            Self::UseNightMode => "USE_NIGHT_MODE",
            Self::LightMode => "LIGHT_MODE",
            Self::TimerMode => "TIMER_MODE",
        }
    }

    /// Index of this field inside a [`StateRecord`](super::StateRecord).
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}
