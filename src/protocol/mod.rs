// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for the Ulisse HTTP state protocol.
//!
//! The device understands exactly two requests, both plain `GET`s on `/`:
//!
//! - a state query: `?HMI=`
//! - an update: `?HMI=<wire-string>&UPD=1`
//!
//! Both answer with the full device state as a wire string.
//!
//! # Transports
//!
//! - [`HttpTransport`]: reqwest-based HTTP implementation
//!
//! Other transports (for example in-memory fakes) implement [`Transport`].

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};

use crate::error::ProtocolError;

/// A request understood by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceRequest {
    /// Ask for the current state.
    Query,
    /// Apply a wire string. Absent tokens leave their fields unchanged.
    Update {
        /// The serialized change set.
        hmi: String,
    },
}

impl DeviceRequest {
    /// Creates an update request carrying a serialized change set.
    #[must_use]
    pub fn update(hmi: impl Into<String>) -> Self {
        Self::Update { hmi: hmi.into() }
    }

    /// Returns the `HMI` parameter value.
    #[must_use]
    pub fn hmi(&self) -> &str {
        match self {
            Self::Query => "",
            Self::Update { hmi } => hmi,
        }
    }

    /// Returns `true` for update requests.
    #[must_use]
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    /// Builds the query string, without the leading `?`.
    ///
    /// The wire string is sent verbatim; the device does not decode
    /// percent-escapes.
    #[must_use]
    pub fn query_string(&self) -> String {
        match self {
            Self::Query => "HMI=".to_string(),
            Self::Update { hmi } => format!("HMI={hmi}&UPD=1"),
        }
    }
}

/// Trait for transports that can deliver requests to a Ulisse device.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request cannot be delivered or the
    /// device answers with a failure status.
    async fn send(&self, request: &DeviceRequest) -> Result<String, ProtocolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_for_state_query() {
        assert_eq!(DeviceRequest::Query.query_string(), "HMI=");
        assert!(!DeviceRequest::Query.is_update());
    }

    #[test]
    fn query_string_for_update() {
        let request = DeviceRequest::update("230,N,N");
        assert_eq!(request.query_string(), "HMI=230,N,N&UPD=1");
        assert_eq!(request.hmi(), "230,N,N");
        assert!(request.is_update());
    }
}
