use std::time::Duration;

use super::Client;
use super::ClientConfig;

pub struct ClientBuilder {
    config: ClientConfig,
    host: String,
    port: u16,
}

impl ClientBuilder {
    /// Create a new builder with default config and the store address
    pub fn new(
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            config: ClientConfig::default(),
            host: host.into(),
            port,
        }
    }

    /// Set connection timeout (default: 1s)
    pub fn connect_timeout(
        mut self,
        timeout: Duration,
    ) -> Self {
        self.config.connect_timeout_in_ms = timeout.as_millis() as u64;
        self
    }

    /// Set request timeout (default: 3s)
    pub fn request_timeout(
        mut self,
        timeout: Duration,
    ) -> Self {
        self.config.request_timeout_in_ms = timeout.as_millis() as u64;
        self
    }

    /// Enable/disable compression (default: enabled)
    pub fn enable_compression(
        mut self,
        enable: bool,
    ) -> Self {
        self.config.enable_compression = enable;
        self
    }

    /// Completely replaces the default configuration
    ///
    /// # Warning: Configuration Override
    /// This will discard all previous settings configured through individual
    /// methods like [`connect_timeout`](ClientBuilder::connect_timeout) or
    /// [`enable_compression`](ClientBuilder::enable_compression).
    pub fn set_config(
        mut self,
        config: ClientConfig,
    ) -> Self {
        self.config = config;
        self
    }

    /// Build the client with current configuration
    pub async fn build(self) -> std::result::Result<Client, super::ClientApiError> {
        Client::create(self.host, self.port, self.config).await
    }
}
