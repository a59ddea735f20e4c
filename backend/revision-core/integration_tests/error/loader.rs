use revision_core::error::{CoreError, LoaderError};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Loader errors name their origin.
///
/// **BUG THIS CATCHES**: Losing the location suffix makes the logged cause of a
/// failed page load impossible to trace back.
#[test]
fn given_resource_unavailable_when_formatted_then_includes_kind_message_and_location() {
    let err = LoaderError::ResourceUnavailable {
        message: String::from("HTTP error! status: 404"),
        status: Some(HttpStatusCode(404)),
        location: ErrorLocation::from(Location::caller()),
    };

    let text = err.to_string();

    assert!(text.starts_with("Resource Unavailable Error: HTTP error! status: 404"));
    assert!(text.contains("loader.rs"));
}

#[test]
fn given_json_error_when_converted_then_becomes_malformed_document() {
    let json_err = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();

    let err = LoaderError::from(json_err);

    assert!(matches!(err, LoaderError::MalformedDocument { .. }));
    assert_eq!(err.status(), None);
}

#[test]
fn given_loader_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let err = LoaderError::InvalidSource {
        message: String::from("empty"),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = err.to_string();

    let core: CoreError = err.into();

    assert_eq!(core.to_string(), expected);
}
