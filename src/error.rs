// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ulisse_lib` library.
//!
//! This module provides the error hierarchy used across the library: value
//! validation, transport communication, wire-string parsing, and
//! configuration.
//!
//! Note that the [`Session`](crate::Session) operations that talk to the
//! device (`flush`, `refresh`) never return these errors; they log the cause
//! and report a boolean outcome. Use
//! [`Session::try_refresh`](crate::Session::try_refresh) when the cause
//! matters.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the device.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a device response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The device configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A target temperature is outside the supported range.
    #[error("temperature {actual}°C is out of range [{min}, {max}]")]
    TemperatureOutOfRange {
        /// Minimum allowed temperature in °C.
        min: f64,
        /// Maximum allowed temperature in °C.
        max: f64,
        /// The temperature that was provided.
        actual: f64,
    },

    /// An invalid HVAC mode string was provided.
    #[error("invalid hvac mode: {0}")]
    InvalidHvacMode(String),

    /// An invalid fan mode string was provided.
    #[error("invalid fan mode: {0}")]
    InvalidFanMode(String),

    /// An invalid preset string was provided.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// Errors related to device communication over HTTP.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing the device wire string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token was neither the absent marker nor a base-10 integer.
    #[error("invalid token {token:?} at position {position}")]
    InvalidToken {
        /// Zero-based position of the token in the wire string.
        position: usize,
        /// The offending token, untrimmed.
        token: String,
    },

    /// A field name does not belong to the device schema.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Errors related to device configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be decoded.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),

    /// The host is empty.
    #[error("host must not be empty")]
    EmptyHost,

    /// The unique id does not match `[0-9a-z][0-9a-z_]*` or ends with `_`.
    #[error("invalid unique id: {0:?}")]
    InvalidUniqueId(String),

    /// The retry policy would never send an update.
    #[error("retry attempts must be at least 1")]
    ZeroRetryAttempts,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
