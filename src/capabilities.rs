// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control surface capabilities.
//!
//! The Ulisse device has a fixed feature set, so capabilities are plain
//! immutable values rather than something probed from the device. Host
//! integrations use them to describe the thermostat entity (unit, bounds,
//! selectable modes).

use crate::types::{FanMode, HvacMode, Preset, Temperature};

/// Unit in which temperatures are reported and set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    Celsius,
}

/// Capabilities of the air conditioner control surface.
///
/// # Examples
///
/// ```
/// use ulisse_lib::Capabilities;
/// use ulisse_lib::types::{FanMode, HvacMode};
///
/// let caps = Capabilities::ulisse_eco_13_dci();
/// assert!((caps.min_temp - 10.0).abs() < f64::EPSILON);
/// assert!((caps.max_temp - 32.0).abs() < f64::EPSILON);
/// assert!(caps.supports_hvac_mode(HvacMode::HeatCool));
/// assert!(caps.supports_fan_mode(FanMode::Auto));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Capabilities {
    /// Temperature unit.
    pub temperature_unit: TemperatureUnit,

    /// Temperature resolution.
    pub precision: f64,

    /// Lowest settable target temperature.
    pub min_temp: f64,

    /// Highest settable target temperature.
    pub max_temp: f64,

    /// Selectable HVAC modes.
    pub hvac_modes: &'static [HvacMode],

    /// Selectable fan modes.
    pub fan_modes: &'static [FanMode],

    /// Selectable presets.
    pub preset_modes: &'static [Preset],

    /// The device never pushes updates; the host must poll.
    pub should_poll: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ulisse_eco_13_dci()
    }
}

impl Capabilities {
    /// Capabilities of the Ulisse Eco 13 DCI Wi-Fi.
    #[must_use]
    pub const fn ulisse_eco_13_dci() -> Self {
        Self {
            temperature_unit: TemperatureUnit::Celsius,
            precision: Temperature::PRECISION,
            min_temp: Temperature::MIN_CELSIUS,
            max_temp: Temperature::MAX_CELSIUS,
            hvac_modes: &HvacMode::ALL,
            fan_modes: &FanMode::ALL,
            preset_modes: &Preset::ALL,
            should_poll: true,
        }
    }

    /// Returns `true` if the HVAC mode can be selected.
    #[must_use]
    pub fn supports_hvac_mode(&self, mode: HvacMode) -> bool {
        self.hvac_modes.contains(&mode)
    }

    /// Returns `true` if the fan mode can be selected.
    #[must_use]
    pub fn supports_fan_mode(&self, mode: FanMode) -> bool {
        self.fan_modes.contains(&mode)
    }

    /// Returns `true` if the preset can be selected.
    #[must_use]
    pub fn supports_preset(&self, preset: Preset) -> bool {
        self.preset_modes.contains(&preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_eco_13_dci() {
        assert_eq!(Capabilities::default(), Capabilities::ulisse_eco_13_dci());
    }

    #[test]
    fn all_modes_supported() {
        let caps = Capabilities::ulisse_eco_13_dci();
        assert!(HvacMode::ALL.iter().all(|m| caps.supports_hvac_mode(*m)));
        assert!(FanMode::ALL.iter().all(|m| caps.supports_fan_mode(*m)));
        assert!(Preset::ALL.iter().all(|p| caps.supports_preset(*p)));
    }

    #[test]
    fn polling_required() {
        let caps = Capabilities::ulisse_eco_13_dci();
        assert!(caps.should_poll);
        assert_eq!(caps.temperature_unit, TemperatureUnit::Celsius);
        assert!((caps.precision - 0.1).abs() < f64::EPSILON);
    }
}
