// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the air conditioner control surface.
//!
//! Each type is a fixed lookup table between a control-surface value and the
//! raw integers stored in the device fields. Types that accept user input
//! validate it at construction time.
//!
//! # Types
//!
//! - [`Temperature`] - Target temperature (10.0°C - 32.0°C, 0.1° steps)
//! - [`HvacMode`] - Off / Cool / Dry / Heat / Fan only / Heat-cool
//! - [`FanMode`] - Auto / Low / Medium / High
//! - [`Preset`] - None / Eco / Boost / Sleep
//! - [`PowerState`] - On / Off

mod fan;
mod hvac;
mod power;
mod preset;
mod temperature;

pub use fan::FanMode;
pub use hvac::HvacMode;
pub use power::PowerState;
pub use preset::Preset;
pub use temperature::Temperature;

pub(crate) use temperature::tenths_to_celsius;
