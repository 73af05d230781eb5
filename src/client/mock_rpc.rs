use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;

use parking_lot::RwLock;

use crate::proto::client::attribute;
use crate::proto::client::space_service_server::SpaceService;
use crate::proto::client::Attribute;
use crate::proto::client::MetadataRequest;
use crate::proto::client::SpaceDeleteRequest;
use crate::proto::client::SpaceReadRequest;
use crate::proto::client::SpaceReadResponse;
use crate::proto::client::SpaceWriteRequest;
use crate::proto::client::SpaceWriteResponse;
use crate::proto::client::StoreMetadata;
use crate::proto::error::ErrorCode;

/// Canned-response mock for the space service.
///
/// Each RPC returns the configured response; an unconfigured RPC fails with
/// an `unknown` status so a test that hits the wrong method fails loudly.
#[derive(Clone, Default)]
pub struct MockSpaceService {
    // Expected responses for each method
    pub expected_metadata_response: Option<Result<StoreMetadata, tonic::Status>>,
    pub expected_read_response: Option<Result<SpaceReadResponse, tonic::Status>>,
    pub expected_write_response: Option<Result<SpaceWriteResponse, tonic::Status>>,
    pub expected_delete_response: Option<Result<SpaceWriteResponse, tonic::Status>>,
}

impl MockSpaceService {
    /// Metadata response used by helpers that only care about data RPCs
    pub fn default_metadata() -> StoreMetadata {
        StoreMetadata {
            server_version: "mock-store-0.1".to_string(),
        }
    }
}

#[tonic::async_trait]
impl SpaceService for MockSpaceService {
    async fn get_store_metadata(
        &self,
        _request: tonic::Request<MetadataRequest>,
    ) -> std::result::Result<tonic::Response<StoreMetadata>, tonic::Status> {
        match &self.expected_metadata_response {
            Some(Ok(response)) => Ok(tonic::Response::new(response.clone())),
            Some(Err(status)) => Err(status.clone()),
            None => Err(tonic::Status::unknown(
                "No mock get_store_metadata response set",
            )),
        }
    }

    async fn handle_space_read(
        &self,
        _request: tonic::Request<SpaceReadRequest>,
    ) -> std::result::Result<tonic::Response<SpaceReadResponse>, tonic::Status> {
        match &self.expected_read_response {
            Some(Ok(response)) => Ok(tonic::Response::new(response.clone())),
            Some(Err(status)) => Err(status.clone()),
            None => Err(tonic::Status::unknown(
                "No mock handle_space_read response set",
            )),
        }
    }

    async fn handle_space_write(
        &self,
        _request: tonic::Request<SpaceWriteRequest>,
    ) -> std::result::Result<tonic::Response<SpaceWriteResponse>, tonic::Status> {
        match &self.expected_write_response {
            Some(Ok(response)) => Ok(tonic::Response::new(response.clone())),
            Some(Err(status)) => Err(status.clone()),
            None => Err(tonic::Status::unknown(
                "No mock handle_space_write response set",
            )),
        }
    }

    async fn handle_space_delete(
        &self,
        _request: tonic::Request<SpaceDeleteRequest>,
    ) -> std::result::Result<tonic::Response<SpaceWriteResponse>, tonic::Status> {
        match &self.expected_delete_response {
            Some(Ok(response)) => Ok(tonic::Response::new(response.clone())),
            Some(Err(status)) => Err(status.clone()),
            None => Err(tonic::Status::unknown(
                "No mock handle_space_delete response set",
            )),
        }
    }
}

/// Stateful in-memory store implementing the full operation semantics:
/// merge-on-write, field projection on partial reads, and UNKNOWN_SPACE for
/// unprovisioned spaces. Records are never padded with default values.
pub struct InMemorySpaceStore {
    spaces: HashSet<String>,
    records: RwLock<HashMap<(String, String), BTreeMap<String, attribute::Value>>>,
}

impl InMemorySpaceStore {
    pub fn with_spaces<'a>(spaces: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            spaces: spaces.into_iter().map(str::to_string).collect(),
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[tonic::async_trait]
impl SpaceService for InMemorySpaceStore {
    async fn get_store_metadata(
        &self,
        _request: tonic::Request<MetadataRequest>,
    ) -> std::result::Result<tonic::Response<StoreMetadata>, tonic::Status> {
        Ok(tonic::Response::new(StoreMetadata {
            server_version: format!("in-memory-{}", env!("CARGO_PKG_VERSION")),
        }))
    }

    async fn handle_space_read(
        &self,
        request: tonic::Request<SpaceReadRequest>,
    ) -> std::result::Result<tonic::Response<SpaceReadResponse>, tonic::Status> {
        let request = request.into_inner();
        if !self.spaces.contains(&request.space) {
            return Ok(tonic::Response::new(SpaceReadResponse::client_error(
                ErrorCode::UnknownSpace,
            )));
        }

        let records = self.records.read();
        let Some(record) = records.get(&(request.space, request.key)) else {
            return Ok(tonic::Response::new(SpaceReadResponse::not_found()));
        };

        // An empty field list selects the whole record; requested-but-absent
        // fields are omitted, not padded.
        let attributes = record
            .iter()
            .filter(|(name, _)| request.fields.is_empty() || request.fields.contains(*name))
            .map(|(name, value)| Attribute {
                name: name.clone(),
                value: Some(value.clone()),
            })
            .collect();

        Ok(tonic::Response::new(SpaceReadResponse::read_success(
            attributes,
        )))
    }

    async fn handle_space_write(
        &self,
        request: tonic::Request<SpaceWriteRequest>,
    ) -> std::result::Result<tonic::Response<SpaceWriteResponse>, tonic::Status> {
        let request = request.into_inner();
        if !self.spaces.contains(&request.space) {
            return Ok(tonic::Response::new(SpaceWriteResponse::client_error(
                ErrorCode::UnknownSpace,
            )));
        }

        let mut records = self.records.write();
        let record = records.entry((request.space, request.key)).or_default();
        // Merge: attributes absent from the request keep their stored values.
        for attr in request.attributes {
            if let Some(value) = attr.value {
                record.insert(attr.name, value);
            }
        }

        Ok(tonic::Response::new(SpaceWriteResponse::write_success()))
    }

    async fn handle_space_delete(
        &self,
        request: tonic::Request<SpaceDeleteRequest>,
    ) -> std::result::Result<tonic::Response<SpaceWriteResponse>, tonic::Status> {
        let request = request.into_inner();
        if !self.spaces.contains(&request.space) {
            return Ok(tonic::Response::new(SpaceWriteResponse::client_error(
                ErrorCode::UnknownSpace,
            )));
        }

        let mut records = self.records.write();
        let response = match records.remove(&(request.space, request.key)) {
            Some(_) => SpaceWriteResponse::write_success(),
            None => SpaceWriteResponse::client_error(ErrorCode::NotFound),
        };
        Ok(tonic::Response::new(response))
    }
}
