use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;
use tonic::transport::Endpoint;
use tracing::debug;
use tracing::error;
use tracing::info;

use crate::client::ClientApiError;
use crate::client::ClientConfig;
use crate::proto::client::space_service_client::SpaceServiceClient;
use crate::proto::client::MetadataRequest;
use crate::utils::address_str;

/// Owns the single logical session to the store.
///
/// Holds exactly one underlying transport channel, established against
/// `host:port` and validated with a metadata handshake. Safe for sequential
/// reuse across calls; tonic channels are cheaply cloneable so specialized
/// clients borrow the channel per operation.
#[derive(Clone)]
pub struct Connection {
    // Tonic's Channel is thread-safe and reference-counted.
    channel: Channel,
    addr: String,
    server_version: String,
}

impl Connection {
    /// Establishes the session and validates it with a handshake.
    ///
    /// # Implementation Details
    /// 1. Normalizes `host:port` into an endpoint URI
    /// 2. Opens the channel with the configured timeouts and keepalives
    /// 3. Fetches store metadata to confirm the server speaks our protocol
    pub(crate) async fn create(
        host: &str,
        port: u16,
        config: &ClientConfig,
    ) -> std::result::Result<Self, ClientApiError> {
        let addr = address_str(&format!("{host}:{port}"));
        let channel = Self::create_channel(addr.clone(), config).await?;
        let server_version = Self::handshake(channel.clone(), config).await?;
        info!("connected to {addr}, server version {server_version}");

        Ok(Self {
            channel,
            addr,
            server_version,
        })
    }

    /// Rebuilds the underlying channel against the same address
    pub(crate) async fn refresh(
        &mut self,
        config: &ClientConfig,
    ) -> std::result::Result<(), ClientApiError> {
        let channel = Self::create_channel(self.addr.clone(), config).await?;
        self.server_version = Self::handshake(channel.clone(), config).await?;
        self.channel = channel;
        Ok(())
    }

    pub(super) async fn create_channel(
        addr: String,
        config: &ClientConfig,
    ) -> std::result::Result<Channel, ClientApiError> {
        debug!("create_channel, addr = {:?}", &addr);
        Endpoint::try_from(addr)?
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .tcp_keepalive(Some(config.tcp_keepalive()))
            .http2_keep_alive_interval(config.http2_keepalive_interval())
            .keep_alive_timeout(config.http2_keepalive_timeout())
            .connect()
            .await
            .map_err(Into::into)
    }

    /// Probe the store so connect failures surface before the first operation
    async fn handshake(
        channel: Channel,
        config: &ClientConfig,
    ) -> std::result::Result<String, ClientApiError> {
        let mut client = SpaceServiceClient::new(channel);
        if config.enable_compression {
            client = client
                .send_compressed(CompressionEncoding::Gzip)
                .accept_compressed(CompressionEncoding::Gzip);
        }

        match client
            .get_store_metadata(tonic::Request::new(MetadataRequest { client_id: config.id }))
            .await
        {
            Ok(response) => Ok(response.into_inner().server_version),
            Err(status) => {
                error!("get_store_metadata failed: {:?}", status);
                Err(status.into())
            }
        }
    }

    /// The channel used for all operations on this session
    pub(crate) fn channel(&self) -> Channel {
        self.channel.clone()
    }

    /// Normalized address this session is bound to
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Server version reported during the connect handshake
    pub fn server_version(&self) -> &str {
        &self.server_version
    }
}
