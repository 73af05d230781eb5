use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;
use tonic_health::server::health_reporter;
use tracing::debug;
use tracing::info;

use crate::client::mock_rpc::InMemorySpaceStore;
use crate::client::mock_rpc::MockSpaceService;
use crate::proto::client::space_service_server::SpaceService;
use crate::proto::client::space_service_server::SpaceServiceServer;
use crate::proto::client::SpaceReadResponse;
use crate::proto::client::SpaceWriteResponse;

pub struct MockNode;
impl MockNode {
    pub async fn mock_listener<S: SpaceService>(
        service: S,
        rx: oneshot::Receiver<()>,
        is_ready: bool,
    ) -> std::result::Result<(u16, SocketAddr), tonic::Status> {
        // Return port + address
        let (mut health_reporter, health_service) = health_reporter();
        if is_ready {
            health_reporter.set_serving::<SpaceServiceServer<S>>().await;
            info!("set service is serving");
        } else {
            health_reporter.set_not_serving::<SpaceServiceServer<S>>().await;
            info!("set service is not serving");
        }

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener
            .local_addr()
            .map_err(|e| tonic::Status::internal(format!("Failed to bind: {e}")))?;
        let port = addr.port();
        debug!("starting mock space service:port={port}",);

        let service = Arc::new(service);

        let _r = tokio::spawn(async move {
            tonic::transport::Server::builder()
                .add_service(health_service)
                .add_service(
                    SpaceServiceServer::from_arc(service)
                        .accept_compressed(CompressionEncoding::Gzip)
                        .send_compressed(CompressionEncoding::Gzip),
                )
                .serve_with_incoming_shutdown(
                    tokio_stream::wrappers::TcpListenerStream::new(listener),
                    async {
                        rx.await.ok();
                    },
                )
                .await
                .unwrap();
        });

        Ok((port, addr)) // Return both port and address
    }

    pub(crate) async fn mock_channel_with_port(port: u16) -> Channel {
        Channel::from_shared(format!("http://127.0.0.1:{port}"))
            .expect("valid address")
            .connect()
            .await
            .expect("connection failed")
    }

    /// Canned server whose read RPC always returns `response`
    pub(crate) async fn simulate_read_mock_server(
        rx: oneshot::Receiver<()>,
        response: std::result::Result<SpaceReadResponse, tonic::Status>,
    ) -> std::result::Result<(Channel, u16), tonic::Status> {
        let mock_service = MockSpaceService {
            expected_metadata_response: Some(Ok(MockSpaceService::default_metadata())),
            expected_read_response: Some(response),
            ..Default::default()
        };
        let (port, _addr) = Self::mock_listener(mock_service, rx, true).await?;
        let channel = Self::mock_channel_with_port(port).await;
        Ok((channel, port))
    }

    /// Canned server whose write RPC always returns `response`
    pub(crate) async fn simulate_write_mock_server(
        rx: oneshot::Receiver<()>,
        response: std::result::Result<SpaceWriteResponse, tonic::Status>,
    ) -> std::result::Result<(Channel, u16), tonic::Status> {
        let mock_service = MockSpaceService {
            expected_metadata_response: Some(Ok(MockSpaceService::default_metadata())),
            expected_write_response: Some(response),
            ..Default::default()
        };
        let (port, _addr) = Self::mock_listener(mock_service, rx, true).await?;
        let channel = Self::mock_channel_with_port(port).await;
        Ok((channel, port))
    }

    /// Canned server whose delete RPC always returns `response`
    pub(crate) async fn simulate_delete_mock_server(
        rx: oneshot::Receiver<()>,
        response: std::result::Result<SpaceWriteResponse, tonic::Status>,
    ) -> std::result::Result<(Channel, u16), tonic::Status> {
        let mock_service = MockSpaceService {
            expected_metadata_response: Some(Ok(MockSpaceService::default_metadata())),
            expected_delete_response: Some(response),
            ..Default::default()
        };
        let (port, _addr) = Self::mock_listener(mock_service, rx, true).await?;
        let channel = Self::mock_channel_with_port(port).await;
        Ok((channel, port))
    }

    /// Stateful in-memory store provisioned with the given spaces
    pub(crate) async fn simulate_store<'a>(
        rx: oneshot::Receiver<()>,
        spaces: impl IntoIterator<Item = &'a str>,
    ) -> std::result::Result<u16, tonic::Status> {
        let store = InMemorySpaceStore::with_spaces(spaces);
        let (port, _addr) = Self::mock_listener(store, rx, true).await?;
        Ok(port)
    }
}
