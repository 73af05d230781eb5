use std::sync::Arc;

use arc_swap::ArcSwap;
use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;
use tracing::debug;
use tracing::error;
use tracing::warn;

use super::ClientInner;
use crate::client::Attributes;
use crate::client::ClientApiError;
use crate::client::Status;
use crate::proto::client::space_service_client::SpaceServiceClient;
use crate::proto::client::SpaceDeleteRequest;
use crate::proto::client::SpaceReadRequest;
use crate::proto::client::SpaceWriteRequest;
use crate::proto::error::ErrorCode;
use crate::proto::SpaceReadResponseExt;
use crate::proto::SpaceWriteResponseExt;
use crate::scoped_timer::ScopedTimer;

/// Key/attribute store operations over the session.
///
/// Encodes typed GET/PUT/PARTIAL-GET/DELETE requests into wire messages and
/// decodes responses into an [`Attributes`] mapping plus [`Status`].
/// Store-level outcomes (`NotFound`, `UnknownSpace`) are returned inside
/// `Ok`; only transport and protocol faults produce an `Err`.
#[derive(Clone)]
pub struct SpaceClient {
    pub(super) client_inner: Arc<ArcSwap<ClientInner>>,
}

impl SpaceClient {
    pub(crate) fn new(client_inner: Arc<ArcSwap<ClientInner>>) -> Self {
        Self { client_inner }
    }

    /// Reads the full attribute set of one record.
    ///
    /// The mapping contains exactly the attributes the store holds for the
    /// key; this client asserts no default-padding policy, so a record
    /// written with a partial attribute set reads back without the unset
    /// names (servers that pad are tolerated by
    /// [`Attributes::sloppy_eq`]).
    ///
    /// # Returns
    /// - `Ok((attrs, Status::Success))` when the key exists
    /// - `Ok((empty, Status::NotFound))` when it does not
    ///
    /// # Errors
    /// - [`ClientApiError::Network`] on transport failures
    /// - [`ClientApiError::Protocol`] for malformed responses
    pub async fn get(
        &self,
        space: impl Into<String>,
        key: impl Into<String>,
    ) -> std::result::Result<(Attributes, Status), ClientApiError> {
        self.read(space.into(), key.into(), Vec::new()).await
    }

    /// Reads a caller-specified subset of attribute names.
    ///
    /// The returned mapping contains only requested fields that exist on
    /// the record; requested-but-absent fields are silently omitted, never
    /// padded with defaults. The status is `Success` even when some
    /// requested fields are absent.
    pub async fn get_partial(
        &self,
        space: impl Into<String>,
        key: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> std::result::Result<(Attributes, Status), ClientApiError> {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();

        // An empty projection would decode as a full read; reject it instead
        if fields.is_empty() {
            warn!("Attempted partial read with empty field list");
            return Err(ErrorCode::InvalidRequest.into());
        }

        self.read(space.into(), key.into(), fields).await
    }

    /// Stores an attribute set for one record.
    ///
    /// Merge semantics: attributes not named in `attrs` keep their stored
    /// values, so a partial PUT never erases sibling attributes.
    ///
    /// # Returns
    /// `Status::Success` on acceptance; `Status::UnknownSpace` when the
    /// space does not exist.
    pub async fn put(
        &self,
        space: impl Into<String>,
        key: impl Into<String>,
        attrs: Attributes,
    ) -> std::result::Result<Status, ClientApiError> {
        let _timer = ScopedTimer::new("client::put");

        let client_inner = self.client_inner.load();

        let request = SpaceWriteRequest {
            client_id: client_inner.config.id,
            space: space.into(),
            key: key.into(),
            attributes: attrs.to_proto(),
        };

        let mut client = self.make_client();
        match client.handle_space_write(request).await {
            Ok(response) => {
                debug!("[:SpaceClient:put] response: {:?}", response);
                response.into_inner().into_status()
            }
            Err(status) => {
                error!("[:SpaceClient:put] status: {:?}", status);
                Err(status.into())
            }
        }
    }

    /// Removes one record and all of its attributes
    pub async fn delete(
        &self,
        space: impl Into<String>,
        key: impl Into<String>,
    ) -> std::result::Result<Status, ClientApiError> {
        let _timer = ScopedTimer::new("client::delete");

        let client_inner = self.client_inner.load();

        let request = SpaceDeleteRequest {
            client_id: client_inner.config.id,
            space: space.into(),
            key: key.into(),
        };

        let mut client = self.make_client();
        match client.handle_space_delete(request).await {
            Ok(response) => {
                debug!("[:SpaceClient:delete] response: {:?}", response);
                response.into_inner().into_status()
            }
            Err(status) => {
                error!("[:SpaceClient:delete] status: {:?}", status);
                Err(status.into())
            }
        }
    }

    async fn read(
        &self,
        space: String,
        key: String,
        fields: Vec<String>,
    ) -> std::result::Result<(Attributes, Status), ClientApiError> {
        let _timer = ScopedTimer::new("client::read");

        let client_inner = self.client_inner.load();

        let request = SpaceReadRequest {
            client_id: client_inner.config.id,
            space,
            key,
            fields,
        };

        let mut client = self.make_client();
        match client.handle_space_read(request).await {
            Ok(response) => {
                debug!("Read response: {:?}", response);
                response.into_inner().into_read_outcome()
            }
            Err(status) => {
                error!("Read request failed: {:?}", status);
                Err(status.into())
            }
        }
    }

    fn make_client(&self) -> SpaceServiceClient<Channel> {
        let client_inner = self.client_inner.load();

        let channel = client_inner.conn.channel();
        let mut client = SpaceServiceClient::new(channel);
        if client_inner.config.enable_compression {
            client = client
                .send_compressed(CompressionEncoding::Gzip)
                .accept_compressed(CompressionEncoding::Gzip);
        }

        client
    }
}
