use std::error::Error;

use tonic::Code;
use tonic::Status;

use crate::proto::error::ErrorCode;

/// Client-side fault taxonomy.
///
/// Faults terminate the operation with an `Err`; expected store outcomes
/// (missing key, unknown space) are [`crate::client::Status`] values instead
/// and never appear here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientApiError {
    /// Network layer fault (retryable)
    #[error("network error ({code:?}): {message}")]
    Network {
        code: ErrorCode,
        message: String,
        retry_after_ms: Option<u64>,
    },

    /// Protocol layer fault (malformed or incompatible responses)
    #[error("protocol error ({code:?}): {message}")]
    Protocol { code: ErrorCode, message: String },

    /// Fault reported by the store for this request
    #[error("server error ({code:?}): {message}")]
    Server { code: ErrorCode, message: String },

    /// Client configuration could not be loaded or validated
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl ClientApiError {
    /// Returns the wire error code associated with this fault
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientApiError::Network { code, .. } => *code,
            ClientApiError::Protocol { code, .. } => *code,
            ClientApiError::Server { code, .. } => *code,
            ClientApiError::Config { .. } => ErrorCode::Uncategorized,
        }
    }
}

impl From<tonic::transport::Error> for ClientApiError {
    /// Converts a tonic transport error into a ClientApiError
    ///
    /// Handles the scenarios the connection manager can hit:
    /// - connection timeouts
    /// - invalid URI/address formats
    /// - unexpected connection loss
    fn from(err: tonic::transport::Error) -> Self {
        if let Some(io_err) = err.source().and_then(|e| e.downcast_ref::<std::io::Error>()) {
            if io_err.kind() == std::io::ErrorKind::TimedOut {
                return Self::Network {
                    code: ErrorCode::ConnectionTimeout,
                    message: format!("Connection timeout: {err}"),
                    retry_after_ms: Some(3000),
                };
            }
        }

        if err.to_string().contains("invalid uri") {
            return Self::Network {
                code: ErrorCode::InvalidAddress,
                message: format!("Invalid address: {err}"),
                retry_after_ms: None,
            };
        }

        Self::Network {
            code: ErrorCode::ConnectionTimeout,
            message: format!("Connection failed: {err}"),
            retry_after_ms: Some(5000),
        }
    }
}

impl From<Status> for ClientApiError {
    fn from(status: Status) -> Self {
        let code = status.code();
        let message = status.message().to_string();

        match code {
            Code::Unavailable | Code::DeadlineExceeded => Self::Network {
                code: ErrorCode::ConnectionTimeout,
                message,
                retry_after_ms: Some(3000),
            },

            Code::Cancelled => Self::Network {
                code: ErrorCode::ConnectionTimeout,
                message,
                retry_after_ms: Some(1000),
            },

            Code::InvalidArgument => Self::Server {
                code: ErrorCode::InvalidRequest,
                message,
            },

            Code::PermissionDenied | Code::Unauthenticated => Self::Server {
                code: ErrorCode::Unauthorized,
                message,
            },

            Code::Internal | Code::Aborted => Self::Server {
                code: ErrorCode::ServerInternal,
                message,
            },

            _ => Self::Server {
                code: ErrorCode::Uncategorized,
                message: format!("Unhandled status code {code:?}: {message}"),
            },
        }
    }
}

impl From<ErrorCode> for ClientApiError {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::ConnectionTimeout => ClientApiError::Network {
                code,
                message: "Connection timeout".to_string(),
                retry_after_ms: Some(3000),
            },
            ErrorCode::InvalidAddress => ClientApiError::Network {
                code,
                message: "Invalid address".to_string(),
                retry_after_ms: None,
            },

            ErrorCode::InvalidResponse => ClientApiError::Protocol {
                code,
                message: "Invalid response format".to_string(),
            },
            ErrorCode::VersionMismatch => ClientApiError::Protocol {
                code,
                message: "Version mismatch".to_string(),
            },

            ErrorCode::InvalidRequest => ClientApiError::Server {
                code,
                message: "Invalid request".to_string(),
            },
            ErrorCode::Unauthorized => ClientApiError::Server {
                code,
                message: "Unauthorized request".to_string(),
            },
            ErrorCode::ServerInternal => ClientApiError::Server {
                code,
                message: "Internal server error".to_string(),
            },

            // Operation outcomes; decoded to `Status`, never to a fault
            ErrorCode::Success | ErrorCode::NotFound | ErrorCode::UnknownSpace => {
                ClientApiError::Protocol {
                    code: ErrorCode::InvalidResponse,
                    message: format!("Outcome code {code:?} is not a fault"),
                }
            }

            ErrorCode::Uncategorized => ClientApiError::Server {
                code,
                message: "Uncategorized error".to_string(),
            },
        }
    }
}

impl From<config::ConfigError> for ClientApiError {
    fn from(err: config::ConfigError) -> Self {
        ClientApiError::Config {
            message: err.to_string(),
        }
    }
}
