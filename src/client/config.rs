use std::time::Duration;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::client::ClientApiError;
use crate::utils::get_now_as_u32;

/// Client configuration parameters for the store session.
///
/// Encapsulates the tunable settings for establishing and maintaining the
/// single logical connection: timeouts, keepalive policies, and network
/// efficiency options. Durations are plain integers in the file format
/// (`*_in_ms` / `*_in_secs`); use the accessor methods from code.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    /// Client id stamped on every request; defaults to seconds since epoch
    #[serde(default = "default_client_id")]
    pub id: u32,

    /// Maximum time to wait for establishing a TCP connection
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_in_ms: u64,

    /// Maximum time to wait for a complete RPC response
    #[serde(default = "default_request_timeout")]
    pub request_timeout_in_ms: u64,

    /// TCP keepalive duration for the idle connection
    #[serde(default = "default_tcp_keepalive")]
    pub tcp_keepalive_in_secs: u64,

    /// Interval for HTTP/2 keepalive pings
    #[serde(default = "default_http2_keepalive_interval")]
    pub http2_keepalive_interval_in_secs: u64,

    /// Timeout for HTTP/2 keepalive pings
    #[serde(default = "default_http2_keepalive_timeout")]
    pub http2_keepalive_timeout_in_secs: u64,

    /// Enable Gzip compression for request and response payloads
    #[serde(default = "default_enable_compression")]
    pub enable_compression: bool,
}

fn default_client_id() -> u32 {
    get_now_as_u32()
}

fn default_connect_timeout() -> u64 {
    1000
}

fn default_request_timeout() -> u64 {
    3000
}

fn default_tcp_keepalive() -> u64 {
    300
}

fn default_http2_keepalive_interval() -> u64 {
    60
}

fn default_http2_keepalive_timeout() -> u64 {
    20
}

fn default_enable_compression() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            id: default_client_id(),
            connect_timeout_in_ms: default_connect_timeout(),
            request_timeout_in_ms: default_request_timeout(),
            tcp_keepalive_in_secs: default_tcp_keepalive(),
            http2_keepalive_interval_in_secs: default_http2_keepalive_interval(),
            http2_keepalive_timeout_in_secs: default_http2_keepalive_timeout(),
            enable_compression: default_enable_compression(),
        }
    }
}

impl ClientConfig {
    /// Load configuration with priority:
    /// 1. Hardcoded defaults
    /// 2. Optional TOML file
    /// 3. `ATTRKV_*` environment variables (highest priority)
    pub fn load(path: Option<&str>) -> std::result::Result<Self, ClientApiError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("ATTRKV")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_in_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_in_ms)
    }

    pub fn tcp_keepalive(&self) -> Duration {
        Duration::from_secs(self.tcp_keepalive_in_secs)
    }

    pub fn http2_keepalive_interval(&self) -> Duration {
        Duration::from_secs(self.http2_keepalive_interval_in_secs)
    }

    pub fn http2_keepalive_timeout(&self) -> Duration {
        Duration::from_secs(self.http2_keepalive_timeout_in_secs)
    }
}
