//! Integration tests for the ContactClient using mockito for HTTP mocking.

use contact_book::{ContactClient, ContactPayload, SaveResponse, SubmitError};
use mockito::{Matcher, Server};
use tokio_test::{assert_err, assert_ok};

fn jane() -> ContactPayload {
    ContactPayload {
        mobile: "5551234567".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        company: String::new(),
    }
}

fn client_for(server: &Server) -> ContactClient {
    ContactClient::with_endpoint(format!("{}/ReactApp/SaveContact", server.url()))
}

#[test]
fn test_save_contact_sends_json_payload() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/ReactApp/SaveContact")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "mobile": "5551234567",
            "first_name": "Jane",
            "last_name": "Doe",
            "company": ""
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 101, "message": "Contact saved"}"#)
        .create();

    let client = client_for(&server);
    let response = assert_ok!(client.save_contact(&jane()));

    mock.assert();
    assert_eq!(
        response,
        SaveResponse::Json(serde_json::json!({"id": 101, "message": "Contact saved"}))
    );
    assert_eq!(client.metrics().http_requests_total(), 1);
}

#[test]
fn test_save_contact_plain_text_success() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/ReactApp/SaveContact")
        .with_status(201)
        .with_header("content-type", "text/plain")
        .with_body("Contact created")
        .create();

    let client = client_for(&server);
    let response = assert_ok!(client.save_contact(&jane()));

    mock.assert();
    assert_eq!(response, SaveResponse::Text("Contact created".to_string()));
}

#[test]
fn test_save_contact_empty_success_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/ReactApp/SaveContact")
        .with_status(204)
        .create();

    let client = client_for(&server);
    let response = assert_ok!(client.save_contact(&jane()));

    mock.assert();
    assert_eq!(response, SaveResponse::Text(String::new()));
}

#[test]
fn test_save_contact_large_text_body_is_still_success() {
    let mut server = Server::new();
    // Larger than the 10 MB limit of `ureq::Response::into_string`
    let body = "x".repeat(11 * 1024 * 1024);

    let mock = server
        .mock("POST", "/ReactApp/SaveContact")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body(&body)
        .create();

    let client = client_for(&server);
    let response = assert_ok!(client.save_contact(&jane()));

    mock.assert();
    match response {
        SaveResponse::Text(text) => assert_eq!(text.len(), body.len()),
        other => panic!("Expected Text response, got: {:?}", other),
    }
}

#[test]
fn test_save_contact_invalid_utf8_body_is_decoded_lossily() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/ReactApp/SaveContact")
        .with_status(200)
        .with_body(vec![0xff, 0xfe, b'o', b'k'])
        .create();

    let client = client_for(&server);
    let response = assert_ok!(client.save_contact(&jane()));

    mock.assert();
    assert_eq!(response, SaveResponse::Text("\u{fffd}\u{fffd}ok".to_string()));
}

#[test]
fn test_save_contact_client_error_returns_raw_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/ReactApp/SaveContact")
        .with_status(400)
        .with_body("Mobile number already registered")
        .create();

    let client = client_for(&server);
    let err = assert_err!(client.save_contact(&jane()));

    mock.assert();
    match err {
        SubmitError::Server { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "Mobile number already registered");
        }
        other => panic!("Expected Server error, got: {:?}", other),
    }
}

#[test]
fn test_save_contact_server_error_keeps_json_body_verbatim() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/ReactApp/SaveContact")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"db down"}"#)
        .create();

    let client = client_for(&server);
    let err = assert_err!(client.save_contact(&jane()));

    mock.assert();
    assert!(matches!(
        err,
        SubmitError::Server { status: 500, ref body } if body == r#"{"error":"db down"}"#
    ));
}

#[test]
fn test_save_contact_connection_refused() {
    // Nothing listens on port 1
    let client =
        ContactClient::with_endpoint("http://127.0.0.1:1/ReactApp/SaveContact".to_string());

    let err = assert_err!(client.save_contact(&jane()));

    match err {
        SubmitError::Transport(message) => assert!(!message.is_empty()),
        other => panic!("Expected Transport error, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_requests_total(), 1);
}

#[test]
fn test_save_contact_makes_exactly_one_request() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/ReactApp/SaveContact")
        .with_status(503)
        .with_body("Service Unavailable")
        .expect(1)
        .create();

    let client = client_for(&server);
    assert_err!(client.save_contact(&jane()));

    mock.assert();
}
