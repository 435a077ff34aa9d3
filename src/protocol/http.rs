// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Ulisse devices.

use std::time::Duration;

use reqwest::Client;

use crate::error::ProtocolError;
use crate::protocol::{DeviceRequest, Transport};

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for an HTTP connection to a Ulisse device.
///
/// The device is unauthenticated; each request is independent.
///
/// # Examples
///
/// ```
/// use ulisse_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration, default port 1001
/// let config = HttpConfig::new("192.168.1.60");
/// assert_eq!(config.base_url(), "http://192.168.1.60:1001");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.60")
///     .with_port(8443)
///     .with_https()
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "https://192.168.1.60:8443");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
}

impl HttpConfig {
    /// Default port of the device's web server.
    pub const DEFAULT_PORT: u16 = 1001;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the device
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS. The port is left as configured.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        self
    }

    /// Sets whether HTTPS is used.
    #[must_use]
    pub fn with_tls(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    ///
    /// The port is always spelled out; the device rarely listens on a
    /// scheme default.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host, self.port)
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_transport(self) -> Result<HttpTransport, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }

        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpTransport { base_url, client })
    }
}

// ============================================================================
// HttpTransport - reqwest-backed transport
// ============================================================================

/// HTTP transport for communicating with a Ulisse device.
///
/// # Examples
///
/// ```no_run
/// use ulisse_lib::protocol::{DeviceRequest, HttpConfig, Transport};
///
/// # async fn example() -> Result<(), ulisse_lib::ProtocolError> {
/// let transport = HttpConfig::new("192.168.1.60").into_transport()?;
/// let wire = transport.send(&DeviceRequest::Query).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a request.
    fn build_url(&self, request: &DeviceRequest) -> String {
        format!("{}/?{}", self.base_url, request.query_string())
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &DeviceRequest) -> Result<String, ProtocolError> {
        let url = self.build_url(request);

        tracing::debug!(url = %url, "Sending HTTP request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.60");
        assert_eq!(config.host(), "192.168.1.60");
        assert_eq!(config.port(), 1001);
        assert!(!config.use_https());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn http_config_with_https_keeps_port() {
        let config = HttpConfig::new("192.168.1.60").with_https();
        assert!(config.use_https());
        assert_eq!(config.port(), 1001);
        assert_eq!(config.base_url(), "https://192.168.1.60:1001");
    }

    #[test]
    fn http_config_with_tls_flag() {
        assert!(HttpConfig::new("ac").with_tls(true).use_https());
        assert!(!HttpConfig::new("ac").with_https().with_tls(false).use_https());
    }

    #[test]
    fn http_config_base_url_custom_port() {
        let config = HttpConfig::new("ac.local").with_port(80);
        assert_eq!(config.base_url(), "http://ac.local:80");
    }

    #[test]
    fn into_transport_rejects_empty_host() {
        let result = HttpConfig::new("  ").into_transport();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn build_url_for_query() {
        let transport = HttpConfig::new("192.168.1.60").into_transport().unwrap();
        assert_eq!(
            transport.build_url(&DeviceRequest::Query),
            "http://192.168.1.60:1001/?HMI="
        );
    }

    #[test]
    fn build_url_for_update() {
        let transport = HttpConfig::new("192.168.1.60")
            .with_port(8080)
            .into_transport()
            .unwrap();
        assert_eq!(
            transport.build_url(&DeviceRequest::update("230,N,1")),
            "http://192.168.1.60:8080/?HMI=230,N,1&UPD=1"
        );
    }
}
