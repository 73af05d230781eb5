use crate::client::ClientApiError;
use crate::client::Status;
use crate::proto::client::attribute;
use crate::proto::client::Attribute;
use crate::proto::client::SpaceReadResponse;
use crate::proto::client::SpaceWriteResponse;
use crate::proto::error::ErrorCode;
use crate::proto::SpaceReadResponseExt;
use crate::proto::SpaceWriteResponseExt;

#[test]
fn test_attribute_constructors() {
    let attr = Attribute::str("v1", "ABC");
    assert_eq!(attr.name, "v1");
    assert_eq!(attr.value, Some(attribute::Value::Str("ABC".to_string())));

    let attr = Attribute::int("count", -7);
    assert_eq!(attr.name, "count");
    assert_eq!(attr.value, Some(attribute::Value::Int(-7)));
}

#[test]
fn test_read_success_decodes_attributes() {
    let response = SpaceReadResponse::read_success(vec![
        Attribute::str("v1", "ABC"),
        Attribute::int("v2", 123),
    ]);

    let (attrs, status) = response.into_read_outcome().unwrap();
    assert_eq!(status, Status::Success);
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.get("v1").and_then(|v| v.as_str()), Some("ABC"));
}

#[test]
fn test_not_found_decodes_to_empty_outcome() {
    let (attrs, status) = SpaceReadResponse::not_found().into_read_outcome().unwrap();
    assert_eq!(status, Status::NotFound);
    assert!(attrs.is_empty());
}

#[test]
fn test_unknown_space_is_read_outcome() {
    let response = SpaceReadResponse::client_error(ErrorCode::UnknownSpace);
    let (_, status) = response.into_read_outcome().unwrap();
    assert_eq!(status, Status::UnknownSpace);
}

#[test]
fn test_server_internal_is_read_outcome() {
    let response = SpaceReadResponse::client_error(ErrorCode::ServerInternal);
    let (_, status) = response.into_read_outcome().unwrap();
    assert_eq!(status, Status::ServerError);
}

#[test]
fn test_non_success_with_attributes_is_protocol_fault() {
    let response = SpaceReadResponse {
        status: ErrorCode::NotFound as i32,
        attributes: vec![Attribute::str("v1", "ABC")],
    };

    match response.into_read_outcome() {
        Err(ClientApiError::Protocol { code, .. }) => {
            assert_eq!(code, ErrorCode::InvalidResponse)
        }
        other => panic!("expected protocol fault, got {other:?}"),
    }
}

#[test]
fn test_fault_code_in_read_response_is_error() {
    let response = SpaceReadResponse::client_error(ErrorCode::Unauthorized);
    match response.into_read_outcome() {
        Err(ClientApiError::Server { code, .. }) => {
            assert_eq!(code, ErrorCode::Unauthorized)
        }
        other => panic!("expected server fault, got {other:?}"),
    }
}

#[test]
fn test_unknown_numeric_status_is_fault() {
    // Codes outside the enum decode as UNCATEGORIZED and fail the operation.
    let response = SpaceReadResponse {
        status: 9999,
        attributes: Vec::new(),
    };
    match response.into_read_outcome() {
        Err(err) => assert_eq!(err.code(), ErrorCode::Uncategorized),
        other => panic!("expected fault, got {other:?}"),
    }
}

#[test]
fn test_write_status_decoding() {
    assert_eq!(
        SpaceWriteResponse::write_success().into_status().unwrap(),
        Status::Success
    );
    assert_eq!(
        SpaceWriteResponse::client_error(ErrorCode::UnknownSpace)
            .into_status()
            .unwrap(),
        Status::UnknownSpace
    );
    assert!(SpaceWriteResponse::client_error(ErrorCode::ConnectionTimeout)
        .into_status()
        .is_err());
}
