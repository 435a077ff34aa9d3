// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP session builder.

use std::time::Duration;

use crate::config::{DEFAULT_NAME, DeviceConfig, PlatformConfig, RetryPolicy};
use crate::error::Error;
use crate::protocol::{HttpConfig, HttpTransport};
use crate::session::Session;

/// Builder for creating HTTP-based sessions.
///
/// This builder can be created in two ways:
/// - `Session::http("host")` - Simple host string
/// - `Session::http_config(HttpConfig::new("host").with_port(8080))` - Advanced configuration
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ulisse_lib::Session;
/// use ulisse_lib::config::RetryPolicy;
///
/// # fn example() -> ulisse_lib::Result<()> {
/// let session = Session::http("192.168.1.60")
///     .with_port(1001)
///     .with_name("Bedroom AC")
///     .with_unique_id("bedroom")
///     .with_retry_policy(RetryPolicy::new(3, Duration::from_millis(300)))
///     .build()?;
///
/// assert_eq!(session.name(), "Bedroom AC");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SessionBuilder {
    config: HttpConfig,
    name: String,
    unique_id: Option<String>,
    retry: RetryPolicy,
}

impl SessionBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            name: DEFAULT_NAME.to_string(),
            unique_id: None,
            retry: RetryPolicy::default(),
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Enables HTTPS.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.config = self.config.with_https();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the unique id. It is validated by [`build`](Self::build).
    #[must_use]
    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    /// Sets how updates are repeated.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn http_config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the session. No request is sent; call
    /// [`Session::refresh`] to load the device state.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The host is empty or the HTTP client cannot be created
    /// - The unique id is malformed
    /// - The retry policy has zero attempts
    pub fn build(self) -> Result<Session<HttpTransport>, Error> {
        self.retry.validate()?;
        let transport = self.config.into_transport()?;

        let mut session = Session::new(transport)
            .with_name(self.name)
            .with_retry_policy(self.retry);
        if let Some(unique_id) = self.unique_id {
            session = session.with_unique_id(unique_id)?;
        }
        Ok(session)
    }
}

// ========== HTTP Session Entry Points ==========

impl Session<HttpTransport> {
    /// Creates a builder for an HTTP session from a host string.
    ///
    /// This is a convenience method equivalent to
    /// `Session::http_config(HttpConfig::new(host))`.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the device
    #[must_use]
    pub fn http(host: impl Into<String>) -> SessionBuilder {
        SessionBuilder::new(HttpConfig::new(host))
    }

    /// Creates a builder for an HTTP session from an `HttpConfig`.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> SessionBuilder {
        SessionBuilder::new(config)
    }

    /// Creates a session from a device configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn from_config(config: &DeviceConfig) -> Result<Self, Error> {
        config.validate()?;

        let http = HttpConfig::new(config.host.clone())
            .with_port(config.port)
            .with_tls(config.ssl)
            .with_timeout(config.timeout());

        let mut builder = SessionBuilder::new(http)
            .with_name(config.name.clone())
            .with_retry_policy(config.retry_policy());
        if let Some(unique_id) = &config.unique_id {
            builder = builder.with_unique_id(unique_id.clone());
        }
        builder.build()
    }
}

impl PlatformConfig {
    /// Creates one session per configured device.
    ///
    /// # Errors
    ///
    /// Returns the first configuration or client error.
    pub fn build_sessions(&self) -> Result<Vec<Session<HttpTransport>>, Error> {
        self.devices.iter().map(Session::from_config).collect()
    }
}
