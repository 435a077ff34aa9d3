// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State record: a value-or-absent slot for every named field.

use std::fmt;

use crate::error::ParseError;

use super::Field;

/// Mapping from every named [`Field`] to an integer value or absent.
///
/// A record always covers the whole schema: a field that was never set is
/// absent (`None`). Fields outside the schema cannot be addressed at all,
/// see [`get_by_name`](Self::get_by_name).
///
/// # Examples
///
/// ```
/// use ulisse_lib::codec::{Field, StateRecord};
///
/// let mut record = StateRecord::new();
/// assert!(record.is_blank());
///
/// record.set(Field::TemperatureIntended, 230);
/// assert_eq!(record.get(Field::TemperatureIntended), Some(230));
/// assert_eq!(record.get(Field::FanSpeed), None);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StateRecord {
    values: [Option<i64>; Field::COUNT],
}

impl StateRecord {
    /// Creates a record with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field, or `None` if absent.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<i64> {
        self.values[field.index()]
    }

    /// Sets a field. Passing `None` marks the field absent.
    pub fn set(&mut self, field: Field, value: impl Into<Option<i64>>) {
        self.values[field.index()] = value.into();
    }

    /// Returns the value of a field looked up by its wire identifier.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownField` if `name` is not a schema field.
    pub fn get_by_name(&self, name: &str) -> Result<Option<i64>, ParseError> {
        Ok(self.get(name.parse()?))
    }

    /// Returns `true` if every field is absent.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Iterates over all fields with their values, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<i64>)> + '_ {
        Field::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// Iterates over the fields that carry a value.
    pub fn present(&self) -> impl Iterator<Item = (Field, i64)> + '_ {
        self.iter().filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

impl fmt::Debug for StateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(field, value)| (field.as_str(), value)))
            .finish()
    }
}

impl FromIterator<(Field, Option<i64>)> for StateRecord {
    fn from_iter<I: IntoIterator<Item = (Field, Option<i64>)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (field, value) in iter {
            record.set(field, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_and_clears() {
        let mut record = StateRecord::new();
        record.set(Field::Mode, 3);
        record.set(Field::Mode, 1);
        assert_eq!(record.get(Field::Mode), Some(1));

        record.set(Field::Mode, None);
        assert_eq!(record.get(Field::Mode), None);
        assert!(record.is_blank());
    }

    #[test]
    fn zero_is_not_blank() {
        let mut record = StateRecord::new();
        record.set(Field::OnOff, 0);
        assert!(!record.is_blank());
    }

    #[test]
    fn get_by_name() {
        let mut record = StateRecord::new();
        record.set(Field::FanSpeed, 4);
        assert_eq!(record.get_by_name("FAN_SPEED"), Ok(Some(4)));
        assert_eq!(record.get_by_name("VERTICAL_AIR_MODE"), Ok(None));
        assert!(record.get_by_name("NOT_A_FIELD").is_err());
    }

    #[test]
    fn present_skips_absent_fields() {
        let record: StateRecord = [(Field::OnOff, Some(1)), (Field::Mode, None)]
            .into_iter()
            .collect();
        let present: Vec<_> = record.present().collect();
        assert_eq!(present, vec![(Field::OnOff, 1)]);
    }

    #[test]
    fn debug_prints_field_names() {
        let mut record = StateRecord::new();
        record.set(Field::OnOff, 1);
        let debug = format!("{record:?}");
        assert!(debug.contains("\"ON_OFF\": Some(1)"));
        assert!(debug.contains("\"MODE\": None"));
    }
}
