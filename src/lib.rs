// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Ulisse` Lib - A Rust library to control Ulisse Eco Wi-Fi air conditioners.
//!
//! The device exposes its whole state as one line of comma-separated
//! positional tokens over plain HTTP. This library decodes that line into
//! named fields, maps them to a thermostat control surface, and reconciles
//! user intent with the device through a stage/flush/refresh cycle.
//!
//! # Supported Features
//!
//! - **Climate control**: Target temperature, HVAC mode, fan mode, presets
//! - **Power control**: Turn the unit on/off in its stored mode
//! - **State queries**: Room temperature and the full device state
//! - **Batching**: Several intents coalesced into one round trip
//!
//! # Supported Models
//!
//! - Ulisse Eco 13 DCI Wi-Fi
//!
//! # Quick Start
//!
//! ```no_run
//! use ulisse_lib::Session;
//! use ulisse_lib::types::{HvacMode, Temperature};
//!
//! #[tokio::main]
//! async fn main() -> ulisse_lib::Result<()> {
//!     let session = Session::http("192.168.1.60")
//!         .with_unique_id("living_room")
//!         .build()?;
//!
//!     if session.refresh().await {
//!         println!("{:?} at {:?}°C", session.hvac_mode(), session.current_temperature());
//!     }
//!
//!     session.set_hvac_mode(HvacMode::Cool).await;
//!     session.set_temperature(Temperature::from_celsius(23.0)?).await;
//!     Ok(())
//! }
//! ```
//!
//! ## Sessions from Configuration
//!
//! ```no_run
//! use ulisse_lib::config::PlatformConfig;
//!
//! #[tokio::main]
//! async fn main() -> ulisse_lib::Result<()> {
//!     let platform = PlatformConfig::from_json(
//!         r#"{"devices": [{"host": "192.168.1.60", "unique_id": "attic"}]}"#,
//!     )?;
//!
//!     for session in platform.build_sessions()? {
//!         session.refresh().await;
//!     }
//!     Ok(())
//! }
//! ```

mod capabilities;
pub mod codec;
pub mod config;
pub mod error;
pub mod protocol;
mod session;
pub mod types;

pub use capabilities::{Capabilities, TemperatureUnit};
pub use codec::{Field, Schema, StateRecord};
pub use config::{DeviceConfig, PlatformConfig, RetryPolicy};
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::HttpConfig;
pub use session::{DOMAIN, Session};
#[cfg(feature = "http")]
pub use session::SessionBuilder;
pub use types::{FanMode, HvacMode, PowerState, Preset, Temperature};
