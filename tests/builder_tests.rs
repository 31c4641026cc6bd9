//! Builder Tests

use outcome::{Response, Status};

#[test]
fn test_builder_defaults_match_new() {
    let built = Response::builder().build();

    assert_eq!(built.status_code(), 200);
    assert_eq!(built.description(), None);
    assert!(built.errors().is_empty());
    assert!(built.is_successful());
}

#[test]
fn test_builder_sets_every_field() {
    let response = Response::builder()
        .status(Status::UnprocessableEntity)
        .description("import batch 12")
        .error("row 3: bad date")
        .errors(["row 9: missing sku", "row 11: negative price"])
        .build();

    assert_eq!(response.status_code(), 422);
    assert_eq!(response.description(), Some("import batch 12"));
    assert_eq!(
        response.errors(),
        ["row 3: bad date", "row 9: missing sku", "row 11: negative price"]
    );
    assert_eq!(response.first_error(), Some("row 3: bad date"));
}

#[test]
fn test_builder_raw_code_overrides_status() {
    let response = Response::builder()
        .status(Status::Created)
        .status_code(299)
        .build();

    assert_eq!(response.status_code(), 299);
    assert_eq!(response.status(), None);
}

#[test]
fn test_builder_error_on_success_code_is_unsuccessful() {
    let response = Response::builder().status(Status::Updated).error("late failure").build();

    assert!(!response.is_successful());
}
