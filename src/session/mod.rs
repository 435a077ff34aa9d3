// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device session: known state, staged changes, and reconciliation.
//!
//! A [`Session`] is the single owner of one device's protocol state:
//!
//! - the **known state**, the last state the device reported, replaced
//!   wholesale by every successful poll;
//! - the **pending change set**, user intent that has not been transmitted.
//!
//! Changes are staged locally, then [`Session::flush`] drains them in one
//! atomic swap, sends them to the device and polls the device for its
//! authoritative state. A change staged while a flush is in flight is never
//! lost; it lands in the next flush.
//!
//! # Examples
//!
//! ```no_run
//! use ulisse_lib::Session;
//! use ulisse_lib::types::{FanMode, HvacMode, Temperature};
//!
//! # async fn example() -> ulisse_lib::Result<()> {
//! let session = Session::http("192.168.1.60")
//!     .with_unique_id("living_room")
//!     .build()?;
//!
//! if session.refresh().await {
//!     println!("room: {:?}°C", session.current_temperature());
//! }
//!
//! // One intent, one round trip
//! session.set_temperature(Temperature::from_celsius(22.5)?).await;
//!
//! // Several intents coalesced into one round trip
//! session.stage_change(ulisse_lib::codec::Field::FanSpeed, FanMode::High.speed());
//! session.stage_changes([
//!     (ulisse_lib::codec::Field::OnOff, Some(HvacMode::Cool.on_off())),
//!     (ulisse_lib::codec::Field::Mode, HvacMode::Cool.mode_code()),
//! ]);
//! session.flush().await;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod builder;

#[cfg(feature = "http")]
pub use builder::SessionBuilder;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};

use crate::capabilities::Capabilities;
use crate::codec::{Field, Schema, StateRecord};
use crate::config::{DEFAULT_NAME, RetryPolicy, validate_unique_id};
use crate::error::{ConfigError, Error, ProtocolError};
use crate::protocol::{DeviceRequest, Transport};
use crate::types::{FanMode, HvacMode, PowerState, Preset, Temperature, tenths_to_celsius};

/// Domain used to derive entity ids.
pub const DOMAIN: &str = "ulisse_eco_wifi";

/// What the session last learned from the device.
#[derive(Debug, Default)]
struct KnownState {
    record: StateRecord,
    refreshed_at: Option<DateTime<Utc>>,
    available: bool,
}

/// A session with one Ulisse device.
///
/// All operations take `&self`; share a session between tasks with an
/// `Arc`. Staging never waits on the network. Flushes and refreshes on the
/// same session run one at a time, so requests to the device never overlap.
///
/// # Type Parameter
///
/// `T` is the [`Transport`] used to reach the device, normally
/// [`HttpTransport`](crate::protocol::HttpTransport).
#[derive(Debug)]
pub struct Session<T: Transport> {
    transport: T,
    schema: Schema,
    name: String,
    unique_id: Option<String>,
    retry: RetryPolicy,
    capabilities: Capabilities,
    known: RwLock<KnownState>,
    pending: Mutex<StateRecord>,
    exchange: tokio::sync::Mutex<()>,
}

impl<T: Transport> Session<T> {
    /// Creates a session over the given transport with default settings.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            schema: Schema::ULISSE_ECO_13_DCI,
            name: DEFAULT_NAME.to_string(),
            unique_id: None,
            retry: RetryPolicy::default(),
            capabilities: Capabilities::ulisse_eco_13_dci(),
            known: RwLock::new(KnownState::default()),
            pending: Mutex::new(StateRecord::new()),
            exchange: tokio::sync::Mutex::new(()),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the unique id.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUniqueId` if the id is malformed.
    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Result<Self, ConfigError> {
        let unique_id = unique_id.into();
        validate_unique_id(&unique_id)?;
        self.unique_id = Some(unique_id);
        Ok(self)
    }

    /// Sets how updates are repeated.
    ///
    /// A policy with zero attempts still sends once.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    // ========== Identity ==========

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unique id, if configured.
    #[must_use]
    pub fn unique_id(&self) -> Option<&str> {
        self.unique_id.as_deref()
    }

    /// Returns the entity id derived from the unique id.
    ///
    /// ```
    /// use ulisse_lib::Session;
    ///
    /// let session = Session::http("192.168.1.60")
    ///     .with_unique_id("bedroom")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(session.entity_id().as_deref(), Some("climate.ulisse_eco_wifi_bedroom"));
    /// ```
    #[must_use]
    pub fn entity_id(&self) -> Option<String> {
        self.unique_id
            .as_ref()
            .map(|id| format!("climate.{DOMAIN}_{id}"))
    }

    /// Returns the control surface capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the retry policy.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ========== Staging ==========

    /// Stages a change, replacing any value already staged for the field.
    ///
    /// Staging `None` withdraws a staged value.
    pub fn stage_change(&self, field: Field, value: impl Into<Option<i64>>) {
        self.pending.lock().set(field, value);
    }

    /// Stages several changes as one unit.
    ///
    /// All entries are applied under one lock, so a concurrent flush sees
    /// either none or all of them.
    pub fn stage_changes<I>(&self, changes: I)
    where
        I: IntoIterator<Item = (Field, Option<i64>)>,
    {
        let mut pending = self.pending.lock();
        for (field, value) in changes {
            pending.set(field, value);
        }
    }

    /// Returns a snapshot of the changes waiting for the next flush.
    #[must_use]
    pub fn pending(&self) -> StateRecord {
        *self.pending.lock()
    }

    // ========== Reconciliation ==========

    /// Transmits staged changes and reloads the device state.
    ///
    /// Staged changes are drained in one atomic swap. If any were staged,
    /// the update is sent as many times as the retry policy says, pausing
    /// after each send. The device state is then polled.
    ///
    /// Returns `true` only if every request succeeded. On a transport failure
    /// the drained changes are dropped, not re-staged, and the known state
    /// is left as it was.
    pub async fn flush(&self) -> bool {
        let _exchange = self.exchange.lock().await;

        let changes = std::mem::take(&mut *self.pending.lock());
        tracing::debug!(changes = ?changes, "Flushing staged changes");

        if !changes.is_blank() && self.transmit(&changes).await.is_err() {
            return false;
        }

        self.poll_logged().await
    }

    /// Polls the device and replaces the known state.
    ///
    /// Returns `false` if the device could not be reached or answered with
    /// a malformed state; the known state is then left unchanged.
    pub async fn refresh(&self) -> bool {
        let _exchange = self.exchange.lock().await;
        self.poll_logged().await
    }

    /// Polls the device and replaces the known state, reporting the cause
    /// of a failure.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the device could not be reached, or
    /// `Error::Parse` if its answer is not a valid wire string.
    pub async fn try_refresh(&self) -> Result<StateRecord, Error> {
        let _exchange = self.exchange.lock().await;
        self.poll().await
    }

    async fn transmit(&self, changes: &StateRecord) -> Result<(), ProtocolError> {
        let request = DeviceRequest::update(self.schema.serialize(changes));
        let attempts = self.retry.attempts.max(1);

        for attempt in 1..=attempts {
            match self.transport.send(&request).await {
                Ok(body) => {
                    tracing::debug!(attempt, attempts, response = %body, "Update sent");
                }
                Err(e) => {
                    tracing::error!(
                        device = %self.name,
                        hmi = %request.hmi(),
                        attempt,
                        error = %e,
                        "Could not send update to device"
                    );
                    return Err(e);
                }
            }
            tokio::time::sleep(self.retry.delay).await;
        }

        Ok(())
    }

    async fn poll_logged(&self) -> bool {
        match self.poll().await {
            Ok(_) => true,
            Err(Error::Parse(e)) => {
                tracing::warn!(device = %self.name, error = %e, "Device sent a malformed state");
                false
            }
            Err(e) => {
                tracing::error!(device = %self.name, error = %e, "Could not query device state");
                false
            }
        }
    }

    async fn poll(&self) -> Result<StateRecord, Error> {
        let result = match self.transport.send(&DeviceRequest::Query).await {
            Ok(body) => self.schema.parse(&body).map_err(Error::Parse),
            Err(e) => Err(Error::Protocol(e)),
        };

        let mut known = self.known.write();
        match result {
            Ok(record) => {
                tracing::debug!(state = ?record, "Updated device state");
                known.record = record;
                known.refreshed_at = Some(Utc::now());
                known.available = true;
                Ok(record)
            }
            Err(e) => {
                known.available = false;
                Err(e)
            }
        }
    }

    // ========== Known State ==========

    /// Returns a snapshot of the known device state.
    #[must_use]
    pub fn state(&self) -> StateRecord {
        self.known.read().record
    }

    /// Returns when the known state was last replaced by a successful poll.
    #[must_use]
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.known.read().refreshed_at
    }

    /// Returns `true` if the most recent poll succeeded.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.known.read().available
    }

    fn known_value(&self, field: Field) -> Option<i64> {
        self.known.read().record.get(field)
    }

    /// Returns the measured room temperature in °C.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.known_value(Field::TemperatureMeasured)
            .map(tenths_to_celsius)
    }

    /// Returns the target temperature in °C.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f64> {
        self.known_value(Field::TemperatureIntended)
            .map(tenths_to_celsius)
    }

    /// Returns the HVAC mode, or `None` if the power state is unknown.
    #[must_use]
    pub fn hvac_mode(&self) -> Option<HvacMode> {
        let known = self.known.read();
        HvacMode::from_device(known.record.get(Field::OnOff), known.record.get(Field::Mode))
    }

    /// Returns the fan mode, or `None` if the fan speed is unknown.
    #[must_use]
    pub fn fan_mode(&self) -> Option<FanMode> {
        self.known_value(Field::FanSpeed).map(FanMode::from_speed)
    }

    /// Returns the active preset, or `None` if no preset flag is known.
    #[must_use]
    pub fn preset(&self) -> Option<Preset> {
        Preset::from_state(&self.known.read().record)
    }

    /// Returns the power state, or `None` if unknown.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.known_value(Field::OnOff).map(PowerState::from_num)
    }

    // ========== Intents ==========

    /// Sets the target temperature.
    ///
    /// Returns the outcome of the flush.
    pub async fn set_temperature(&self, temperature: Temperature) -> bool {
        self.stage_change(Field::TemperatureIntended, temperature.tenths());
        self.flush().await
    }

    /// Sets the HVAC mode. [`HvacMode::Off`] powers the device off and leaves
    /// the stored mode untouched.
    ///
    /// Returns the outcome of the flush.
    pub async fn set_hvac_mode(&self, mode: HvacMode) -> bool {
        self.stage_changes([
            (Field::OnOff, Some(mode.on_off())),
            (Field::Mode, mode.mode_code()),
        ]);
        self.flush().await
    }

    /// Sets the fan mode.
    ///
    /// Returns the outcome of the flush.
    pub async fn set_fan_mode(&self, mode: FanMode) -> bool {
        self.stage_change(Field::FanSpeed, mode.speed());
        self.flush().await
    }

    /// Sets the preset, clearing the other preset flags.
    ///
    /// Returns the outcome of the flush.
    pub async fn set_preset(&self, preset: Preset) -> bool {
        self.stage_changes(preset.flags().map(|(field, value)| (field, Some(value))));
        self.flush().await
    }

    /// Powers the device on in its stored mode.
    ///
    /// Returns the outcome of the flush.
    pub async fn turn_on(&self) -> bool {
        self.stage_change(Field::OnOff, PowerState::On.as_num());
        self.flush().await
    }

    /// Powers the device off.
    ///
    /// Returns the outcome of the flush.
    pub async fn turn_off(&self) -> bool {
        self.stage_change(Field::OnOff, PowerState::Off.as_num());
        self.flush().await
    }
}
