// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device and platform configuration.
//!
//! Configuration is plain data that host integrations deserialize from their
//! own config documents. Defaults match the device's factory settings.
//!
//! # Examples
//!
//! ```
//! use ulisse_lib::config::PlatformConfig;
//!
//! let platform = PlatformConfig::from_json(r#"{
//!     "devices": [
//!         { "host": "192.168.1.60", "unique_id": "living_room" },
//!         { "host": "192.168.1.61", "port": 8080, "ssl": true }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(platform.devices.len(), 2);
//! assert_eq!(platform.devices[0].port, 1001);
//! assert_eq!(platform.devices[1].name, "Ulisse Air Conditioner");
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default device name.
pub const DEFAULT_NAME: &str = "Ulisse Air Conditioner";

/// How an update is repeated to get through to the device.
///
/// The device drops some commands that arrive in quick succession, so every
/// update is sent `attempts` times with `delay` after each send.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ulisse_lib::config::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.attempts, 5);
/// assert_eq!(policy.delay, Duration::from_millis(200));
///
/// let policy = RetryPolicy::new(3, Duration::from_millis(50));
/// assert_eq!(policy.attempts, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of times an update is sent.
    pub attempts: u32,
    /// Pause after each send.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Default number of sends per update.
    pub const DEFAULT_ATTEMPTS: u32 = 5;
    /// Default pause after each send.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

    /// Creates a retry policy.
    #[must_use]
    pub const fn new(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }

    /// Checks that the policy sends at least once.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroRetryAttempts` if `attempts` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attempts == 0 {
            return Err(ConfigError::ZeroRetryAttempts);
        }
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ATTEMPTS, Self::DEFAULT_DELAY)
    }
}

/// Configuration of one device.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    /// Hostname or IP address.
    pub host: String,

    /// Web server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Use HTTPS instead of HTTP.
    #[serde(default)]
    pub ssl: bool,

    /// Display name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Stable identifier used to derive the entity id.
    #[serde(default)]
    pub unique_id: Option<String>,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Number of times an update is sent.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Pause after each update send, in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_port() -> u16 {
    1001
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

#[allow(clippy::cast_possible_truncation)]
fn default_timeout_ms() -> u64 {
    // Safe: ten seconds in milliseconds fits in u64
    Duration::from_secs(10).as_millis() as u64
}

fn default_retry_attempts() -> u32 {
    RetryPolicy::DEFAULT_ATTEMPTS
}

#[allow(clippy::cast_possible_truncation)]
fn default_retry_delay_ms() -> u64 {
    // Safe: 200 ms fits in u64
    RetryPolicy::DEFAULT_DELAY.as_millis() as u64
}

impl DeviceConfig {
    /// Creates a configuration with defaults for everything but the host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: default_port(),
            ssl: false,
            name: default_name(),
            unique_id: None,
            timeout_ms: default_timeout_ms(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }

    /// Sets the unique id.
    #[must_use]
    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the retry policy.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_attempts, Duration::from_millis(self.retry_delay_ms))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host is empty, the unique id is
    /// malformed, or the retry policy never sends.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if let Some(unique_id) = &self.unique_id {
            validate_unique_id(unique_id)?;
        }
        self.retry_policy().validate()
    }
}

/// Configuration of the whole platform: a list of devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    /// Configured devices.
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
}

impl PlatformConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document is malformed or any device
    /// fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every device.
    ///
    /// # Errors
    ///
    /// Returns the first device validation error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.devices.iter().try_for_each(DeviceConfig::validate)
    }
}

/// Checks a unique id: lowercase alphanumerics and underscores, starting
/// with an alphanumeric and not ending with an underscore.
///
/// # Errors
///
/// Returns `ConfigError::InvalidUniqueId` if the id does not match.
pub fn validate_unique_id(unique_id: &str) -> Result<(), ConfigError> {
    let allowed = |c: char| c.is_ascii_digit() || c.is_ascii_lowercase();

    let valid = unique_id.chars().next().is_some_and(allowed)
        && unique_id.chars().all(|c| allowed(c) || c == '_')
        && !unique_id.ends_with('_');

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidUniqueId(unique_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_config_defaults() {
        let config: DeviceConfig = serde_json::from_str(r#"{"host": "10.0.0.5"}"#).unwrap();
        assert_eq!(config, DeviceConfig::new("10.0.0.5"));
        assert_eq!(config.port, 1001);
        assert!(!config.ssl);
        assert_eq!(config.name, "Ulisse Air Conditioner");
        assert_eq!(config.unique_id, None);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn device_config_requires_host() {
        let result: Result<DeviceConfig, _> = serde_json::from_str(r#"{"port": 1001}"#);
        assert!(result.is_err());
    }

    #[test]
    fn device_config_rejects_unknown_keys() {
        let result: Result<DeviceConfig, _> =
            serde_json::from_str(r#"{"host": "ac", "password": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn valid_unique_ids() {
        for id in ["a", "0", "living_room", "ac_2", "a1_b2_c3"] {
            assert!(validate_unique_id(id).is_ok(), "{id}");
        }
    }

    #[test]
    fn invalid_unique_ids() {
        for id in ["", "_ac", "ac_", "Living", "ac-2", "ac 2", "äc"] {
            assert!(validate_unique_id(id).is_err(), "{id}");
        }
    }

    #[test]
    fn validate_rejects_empty_host() {
        assert!(matches!(
            DeviceConfig::new(" ").validate(),
            Err(ConfigError::EmptyHost)
        ));
    }

    #[test]
    fn validate_rejects_zero_attempts() {
        let mut config = DeviceConfig::new("ac");
        config.retry_attempts = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroRetryAttempts)
        ));
    }

    #[test]
    fn platform_config_defaults_to_no_devices() {
        let platform = PlatformConfig::from_json("{}").unwrap();
        assert!(platform.devices.is_empty());
    }

    #[test]
    fn platform_config_validates_devices() {
        let result = PlatformConfig::from_json(
            r#"{"devices": [{"host": "ac", "unique_id": "Bad-Id"}]}"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidUniqueId(_))));
    }

    #[test]
    fn platform_config_rejects_malformed_json() {
        assert!(matches!(
            PlatformConfig::from_json("{devices: ["),
            Err(ConfigError::Json(_))
        ));
    }
}
