// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Preset mode type.

use std::fmt;
use std::str::FromStr;

use crate::codec::{Field, StateRecord};
use crate::error::ValueError;

/// Preset mode, backed by three mutually-exclusive device flags.
///
/// | Preset  | Flag             |
/// |---------|------------------|
/// | `Eco`   | `USE_ECO_MODE`   |
/// | `Boost` | `USE_TURBO_MODE` |
/// | `Sleep` | `USE_NIGHT_MODE` |
/// | `None`  | all cleared      |
///
/// # Examples
///
/// ```
/// use ulisse_lib::codec::Field;
/// use ulisse_lib::types::Preset;
///
/// let flags = Preset::Sleep.flags();
/// assert!(flags.contains(&(Field::UseNightMode, 1)));
/// assert!(flags.contains(&(Field::UseEcoMode, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// No preset active.
    None,
    /// Energy saving.
    Eco,
    /// Turbo.
    Boost,
    /// Night mode.
    Sleep,
}

impl Preset {
    /// All presets offered by the control surface.
    pub const ALL: [Self; 4] = [Self::None, Self::Eco, Self::Boost, Self::Sleep];

    /// The preset flag fields, in write order.
    pub const FLAG_FIELDS: [Field; 3] = [Field::UseTurboMode, Field::UseNightMode, Field::UseEcoMode];

    /// Returns the flag field owned by this preset.
    #[must_use]
    pub const fn flag(&self) -> Option<Field> {
        match self {
            Self::None => None,
            Self::Eco => Some(Field::UseEcoMode),
            Self::Boost => Some(Field::UseTurboMode),
            Self::Sleep => Some(Field::UseNightMode),
        }
    }

    /// Returns the values to write for all three flags. At most one is set.
    #[must_use]
    pub fn flags(&self) -> [(Field, i64); 3] {
        Self::FLAG_FIELDS.map(|field| (field, i64::from(self.flag() == Some(field))))
    }

    /// Derives the preset from a device state.
    ///
    /// Returns `None` when all three flags are absent. If the device reports
    /// more than one flag, turbo wins over night, and night over eco.
    #[must_use]
    pub fn from_state(state: &StateRecord) -> Option<Self> {
        if Self::FLAG_FIELDS.iter().all(|field| state.get(*field).is_none()) {
            return None;
        }
        let is_set = |field| state.get(field).is_some_and(|value| value != 0);

        let preset = if is_set(Field::UseTurboMode) {
            Self::Boost
        } else if is_set(Field::UseNightMode) {
            Self::Sleep
        } else if is_set(Field::UseEcoMode) {
            Self::Eco
        } else {
            Self::None
        };
        Some(preset)
    }

    /// Returns the preset identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Eco => "eco",
            Self::Boost => "boost",
            Self::Sleep => "sleep",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::InvalidPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(flags: &[(Field, i64)]) -> StateRecord {
        flags.iter().map(|(field, value)| (*field, Some(*value))).collect()
    }

    #[test]
    fn at_most_one_flag_is_written() {
        for preset in Preset::ALL {
            let set: i64 = preset.flags().iter().map(|(_, value)| value).sum();
            let expected = i64::from(preset != Preset::None);
            assert_eq!(set, expected, "{preset}");
        }
    }

    #[test]
    fn none_clears_all_flags() {
        assert!(Preset::None.flags().iter().all(|(_, value)| *value == 0));
    }

    #[test]
    fn absent_flags_are_unknown() {
        assert_eq!(Preset::from_state(&StateRecord::new()), None);
    }

    #[test]
    fn cleared_flags_read_as_none() {
        let state = state_with(&[(Field::UseEcoMode, 0)]);
        assert_eq!(Preset::from_state(&state), Some(Preset::None));
    }

    #[test]
    fn single_flag_maps_to_preset() {
        let state = state_with(&[(Field::UseEcoMode, 1), (Field::UseTurboMode, 0)]);
        assert_eq!(Preset::from_state(&state), Some(Preset::Eco));
    }

    #[test]
    fn turbo_wins_over_other_flags() {
        let state = state_with(&[
            (Field::UseEcoMode, 1),
            (Field::UseNightMode, 1),
            (Field::UseTurboMode, 1),
        ]);
        assert_eq!(Preset::from_state(&state), Some(Preset::Boost));
    }

    #[test]
    fn night_wins_over_eco() {
        let state = state_with(&[(Field::UseEcoMode, 1), (Field::UseNightMode, 1)]);
        assert_eq!(Preset::from_state(&state), Some(Preset::Sleep));
    }

    #[test]
    fn written_flags_read_back_as_same_preset() {
        for preset in Preset::ALL {
            let state = state_with(&preset.flags());
            assert_eq!(Preset::from_state(&state), Some(preset));
        }
    }
}
