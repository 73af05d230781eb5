use tracing::error;

use crate::client::Attributes;
use crate::client::ClientApiError;
use crate::client::Status;
use crate::proto::client::attribute;
use crate::proto::client::Attribute;
use crate::proto::client::SpaceReadResponse;
use crate::proto::client::SpaceWriteResponse;
use crate::proto::error::ErrorCode;

impl Attribute {
    /// Create a string-valued attribute
    pub fn str(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: Some(attribute::Value::Str(value.into())),
        }
    }

    /// Create an integer-valued attribute
    pub fn int(
        name: impl Into<String>,
        value: i64,
    ) -> Self {
        Self {
            name: name.into(),
            value: Some(attribute::Value::Int(value)),
        }
    }
}

impl SpaceReadResponse {
    /// Build success response carrying the record's attribute set
    pub fn read_success(attributes: Vec<Attribute>) -> Self {
        Self {
            status: ErrorCode::Success as i32,
            attributes,
        }
    }

    /// Build response for a key that is absent from the space
    pub fn not_found() -> Self {
        Self {
            status: ErrorCode::NotFound as i32,
            attributes: Vec::new(),
        }
    }

    /// Build generic non-success response for any read operation
    pub fn client_error(code: ErrorCode) -> Self {
        Self {
            status: code as i32,
            attributes: Vec::new(),
        }
    }
}

impl SpaceWriteResponse {
    /// Build success response for write operations
    pub fn write_success() -> Self {
        Self {
            status: ErrorCode::Success as i32,
        }
    }

    /// Build generic non-success response for any write operation
    pub fn client_error(code: ErrorCode) -> Self {
        Self {
            status: code as i32,
        }
    }
}

/// Conversion of a wire read response into the typed outcome the caller
/// branches on.
pub trait SpaceReadResponseExt {
    /// Decode into an attribute mapping plus operation status.
    ///
    /// Outcome codes (`SUCCESS`, `NOT_FOUND`, `UNKNOWN_SPACE`,
    /// `SERVER_INTERNAL`) become a [`Status`]; fault codes become an `Err`.
    fn into_read_outcome(self) -> std::result::Result<(Attributes, Status), ClientApiError>;
}

/// Conversion of a wire write response into an operation status.
pub trait SpaceWriteResponseExt {
    fn into_status(self) -> std::result::Result<Status, ClientApiError>;
}

impl SpaceReadResponseExt for SpaceReadResponse {
    fn into_read_outcome(self) -> std::result::Result<(Attributes, Status), ClientApiError> {
        let status = split_status(self.status)?;
        if status != Status::Success && !self.attributes.is_empty() {
            error!(
                "read response carried {} attributes with status {:?}",
                self.attributes.len(),
                status
            );
            return Err(ErrorCode::InvalidResponse.into());
        }
        Ok((Attributes::from_proto(self.attributes), status))
    }
}

impl SpaceWriteResponseExt for SpaceWriteResponse {
    fn into_status(self) -> std::result::Result<Status, ClientApiError> {
        split_status(self.status)
    }
}

/// Split a wire code into an operation outcome or a fault.
///
/// Unknown numeric codes decode as `Uncategorized` and are treated as faults.
fn split_status(raw: i32) -> std::result::Result<Status, ClientApiError> {
    match ErrorCode::try_from(raw).unwrap_or(ErrorCode::Uncategorized) {
        ErrorCode::Success => Ok(Status::Success),
        ErrorCode::NotFound => Ok(Status::NotFound),
        ErrorCode::UnknownSpace => Ok(Status::UnknownSpace),
        ErrorCode::ServerInternal => Ok(Status::ServerError),
        fault => Err(fault.into()),
    }
}
