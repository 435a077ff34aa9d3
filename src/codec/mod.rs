// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Positional codec for the Ulisse wire string.
//!
//! The device exchanges its whole state as one line of comma-separated
//! tokens. Each token is either a base-10 integer or the absent marker `N`,
//! and its meaning is given only by its position. A [`Schema`] names those
//! positions, and this module is the single place that converts between the
//! raw line and an addressable [`StateRecord`].
//!
//! # Examples
//!
//! ```
//! use ulisse_lib::codec::{Field, Schema, StateRecord};
//!
//! let schema = Schema::ULISSE_ECO_13_DCI;
//!
//! let mut change = StateRecord::new();
//! change.set(Field::TemperatureIntended, 230);
//! change.set(Field::FanSpeed, 2);
//!
//! let wire = schema.serialize(&change);
//! assert!(wire.starts_with("230,N,N,N,2,N"));
//! assert_eq!(wire.split(',').count(), 34);
//!
//! let parsed = schema.parse(&wire).unwrap();
//! assert_eq!(parsed, change);
//! ```

mod field;
mod record;

pub use field::Field;
pub use record::StateRecord;

use crate::error::ParseError;

/// Token used on the wire for an absent value.
pub const ABSENT_TOKEN: &str = "N";

const ECO_13_DCI_LEN: usize = 34;

const fn eco_13_dci_slots() -> [Option<Field>; ECO_13_DCI_LEN] {
    let mut slots = [None; ECO_13_DCI_LEN];
    let mut i = 0;
    while i < Field::COUNT {
        slots[i] = Some(Field::ALL[i]);
        i += 1;
    }
    slots
}

const ECO_13_DCI_SLOTS: [Option<Field>; ECO_13_DCI_LEN] = eco_13_dci_slots();

/// Ordered layout of the wire string.
///
/// Each slot is either a named [`Field`] or an anonymous gap the device
/// exposes but this library does not model. The layout is the wire contract
/// and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    slots: &'static [Option<Field>],
}

impl Schema {
    /// Layout of the Ulisse Eco 13 DCI Wi-Fi: 13 named fields followed by
    /// 21 anonymous positions.
    pub const ULISSE_ECO_13_DCI: Self = Self {
        slots: &ECO_13_DCI_SLOTS,
    };

    /// Number of positions on the wire.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the schema has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the zero-based wire position of a named field.
    #[must_use]
    pub fn position(&self, field: Field) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(field))
    }

    /// Returns a record with every named field absent.
    #[must_use]
    pub fn empty(&self) -> StateRecord {
        StateRecord::new()
    }

    /// Decodes a wire string into a state record.
    ///
    /// Tokens are paired with schema positions in order. Tokens past the end
    /// of the schema are ignored and missing trailing tokens decode as
    /// absent; firmware revisions are known to vary the token count.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidToken` if a token within the schema is
    /// neither `N` nor a base-10 integer.
    pub fn parse(&self, wire: &str) -> Result<StateRecord, ParseError> {
        let mut record = StateRecord::new();
        let mut count = 0;

        for (position, token) in wire.split(',').enumerate() {
            count = position + 1;
            let Some(slot) = self.slots.get(position) else {
                continue;
            };
            let value = decode_token(position, token)?;
            if let Some(field) = slot {
                record.set(*field, value);
            }
        }

        if count != self.len() {
            tracing::debug!(
                expected = self.len(),
                actual = count,
                "Wire string token count differs from schema"
            );
        }

        Ok(record)
    }

    /// Encodes a state record into a wire string.
    ///
    /// Absent fields and gap positions are written as `N`, which the device
    /// reads as "leave unchanged".
    #[must_use]
    pub fn serialize(&self, state: &StateRecord) -> String {
        self.slots
            .iter()
            .map(|slot| match slot.and_then(|field| state.get(field)) {
                Some(value) => value.to_string(),
                None => ABSENT_TOKEN.to_string(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::ULISSE_ECO_13_DCI
    }
}

fn decode_token(position: usize, token: &str) -> Result<Option<i64>, ParseError> {
    let trimmed = token.trim();
    if trimmed.eq_ignore_ascii_case(ABSENT_TOKEN) {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ParseError::InvalidToken {
            position,
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: Schema = Schema::ULISSE_ECO_13_DCI;

    fn absent_tail(count: usize) -> String {
        ",N".repeat(count)
    }

    #[test]
    fn reference_schema_layout() {
        assert_eq!(SCHEMA.len(), 34);
        assert_eq!(SCHEMA.position(Field::TemperatureIntended), Some(0));
        assert_eq!(SCHEMA.position(Field::FanSpeed), Some(4));
        assert_eq!(SCHEMA.position(Field::TimerMode), Some(12));
    }

    #[test]
    fn serialize_empty() {
        let wire = SCHEMA.serialize(&SCHEMA.empty());
        assert_eq!(wire, vec!["N"; 34].join(","));
    }

    #[test]
    fn serialize_partial_change() {
        let mut state = StateRecord::new();
        state.set(Field::TemperatureIntended, 230);
        state.set(Field::OnOff, None);
        state.set(Field::FanSpeed, 2);

        let wire = SCHEMA.serialize(&state);
        assert_eq!(wire, format!("230,N,N,N,2,N,N,N,N,N,N,N,N{}", absent_tail(21)));
    }

    #[test]
    fn serialize_negative_values() {
        let mut state = StateRecord::new();
        state.set(Field::TemperatureMeasured, -15);
        assert!(SCHEMA.serialize(&state).starts_with("N,-15,"));
    }

    #[test]
    fn parse_device_response() {
        let wire = format!(
            "230,250,1,5,6,N,0,1,1,0,0,0,0,2,1,2,1,0,0,1,0,75,1416,0{}",
            absent_tail(10)
        );
        let state = SCHEMA.parse(&wire).unwrap();

        assert_eq!(state.get(Field::TemperatureIntended), Some(230));
        assert_eq!(state.get(Field::TemperatureMeasured), Some(250));
        assert_eq!(state.get(Field::OnOff), Some(1));
        assert_eq!(state.get(Field::Mode), Some(5));
        assert_eq!(state.get(Field::FanSpeed), Some(6));
        assert_eq!(state.get(Field::UseEcoMode), Some(1));
        assert_eq!(state.get(Field::VerticalAirMode), None);
        assert_eq!(state.get(Field::TimerMode), Some(0));
    }

    #[test]
    fn parse_absent_marker_is_case_insensitive_and_trimmed() {
        let state = SCHEMA.parse(" n ,N, 7 ").unwrap();
        assert_eq!(state.get(Field::TemperatureIntended), None);
        assert_eq!(state.get(Field::TemperatureMeasured), None);
        assert_eq!(state.get(Field::OnOff), Some(7));
    }

    #[test]
    fn parse_short_response_pads_with_absent() {
        let state = SCHEMA.parse("220,210,1").unwrap();
        assert_eq!(state.get(Field::OnOff), Some(1));
        assert_eq!(state.get(Field::Mode), None);
        assert_eq!(state.get(Field::TimerMode), None);
    }

    #[test]
    fn parse_ignores_extra_tokens() {
        let wire = format!("{}{}", vec!["1"; 34].join(","), ",99,not-a-number");
        let state = SCHEMA.parse(&wire).unwrap();
        assert!(state.iter().all(|(_, value)| value == Some(1)));
    }

    #[test]
    fn parse_rejects_non_integer_token() {
        let err = SCHEMA.parse("230,25.5,1").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidToken {
                position: 1,
                token: "25.5".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_garbage_in_gap_position() {
        let wire = format!("{},x", vec!["N"; 13].join(","));
        assert!(matches!(
            SCHEMA.parse(&wire),
            Err(ParseError::InvalidToken { position: 13, .. })
        ));
    }

    #[test]
    fn parse_tolerates_trailing_newline() {
        let wire = format!("{}\n", vec!["3"; 34].join(","));
        let state = SCHEMA.parse(&wire).unwrap();
        assert_eq!(state.get(Field::Mode), Some(3));
    }

    #[test]
    fn round_trip_preserves_values_and_absence() {
        let mut state = StateRecord::new();
        state.set(Field::TemperatureIntended, 215);
        state.set(Field::OnOff, 0);
        state.set(Field::UseNightMode, 1);
        state.set(Field::LightMode, -2);

        let parsed = SCHEMA.parse(&SCHEMA.serialize(&state)).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn round_trip_over_record_shapes() {
        let mut records = vec![
            StateRecord::new(),
            Field::ALL.into_iter().map(|f| (f, Some(0))).collect(),
            Field::ALL.into_iter().map(|f| (f, Some(i64::MAX))).collect(),
            Field::ALL.into_iter().map(|f| (f, Some(i64::MIN))).collect(),
            (-6_i64..)
                .zip(Field::ALL)
                .map(|(v, f)| (f, Some(v * 37)))
                .collect(),
        ];
        for field in Field::ALL {
            for value in [-1, 1, 320, i64::MIN, i64::MAX] {
                let mut alone = StateRecord::new();
                alone.set(field, value);
                records.push(alone);
            }
        }
        // Every other field present
        records.push(
            Field::ALL
                .into_iter()
                .enumerate()
                .map(|(i, f)| (f, (i % 2 == 0).then_some(-1)))
                .collect(),
        );

        for record in records {
            let wire = SCHEMA.serialize(&record);
            assert_eq!(wire.split(',').count(), SCHEMA.len(), "{wire}");
            assert_eq!(SCHEMA.parse(&wire).unwrap(), record, "{wire}");
        }
    }
}
