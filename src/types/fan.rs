// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan mode type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Fan mode of the air conditioner.
///
/// The device reports a speed from 0 (auto) to 6. Readings are grouped in
/// pairs; writes use the upper value of each pair.
///
/// | Mode     | Read speeds | Written speed |
/// |----------|-------------|---------------|
/// | `Auto`   | 0           | 0             |
/// | `Low`    | 1, 2        | 2             |
/// | `Medium` | 3, 4        | 4             |
/// | `High`   | 5, 6        | 6             |
///
/// # Examples
///
/// ```
/// use ulisse_lib::types::FanMode;
///
/// assert_eq!(FanMode::from_speed(3), FanMode::Medium);
/// assert_eq!(FanMode::Medium.speed(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanMode {
    /// Device picks the speed.
    Auto,
    /// Low speed.
    Low,
    /// Medium speed.
    Medium,
    /// High speed.
    High,
}

impl FanMode {
    /// All fan modes offered by the control surface.
    pub const ALL: [Self; 4] = [Self::Auto, Self::Low, Self::Medium, Self::High];

    /// Maps a reported speed to a mode. Unmapped speeds read as `Auto`.
    #[must_use]
    pub const fn from_speed(speed: i64) -> Self {
        match speed {
            1 | 2 => Self::Low,
            3 | 4 => Self::Medium,
            5 | 6 => Self::High,
            _ => Self::Auto,
        }
    }

    /// Returns the speed written to the device for this mode.
    #[must_use]
    pub const fn speed(&self) -> i64 {
        match self {
            Self::Auto => 0,
            Self::Low => 2,
            Self::Medium => 4,
            Self::High => 6,
        }
    }

    /// Returns the mode identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::InvalidFanMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_mapping() {
        let expected = [
            FanMode::Auto,
            FanMode::Low,
            FanMode::Low,
            FanMode::Medium,
            FanMode::Medium,
            FanMode::High,
            FanMode::High,
        ];
        for (speed, mode) in (0..).zip(expected) {
            assert_eq!(FanMode::from_speed(speed), mode);
        }
    }

    #[test]
    fn unmapped_speed_reads_as_auto() {
        assert_eq!(FanMode::from_speed(7), FanMode::Auto);
        assert_eq!(FanMode::from_speed(-1), FanMode::Auto);
    }

    #[test]
    fn write_speeds() {
        let speeds: Vec<_> = FanMode::ALL.iter().map(FanMode::speed).collect();
        assert_eq!(speeds, vec![0, 2, 4, 6]);
    }

    #[test]
    fn written_speed_reads_back_as_same_mode() {
        for mode in FanMode::ALL {
            assert_eq!(FanMode::from_speed(mode.speed()), mode);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("High".parse::<FanMode>().unwrap(), FanMode::High);
        assert!("turbo".parse::<FanMode>().is_err());
    }
}
