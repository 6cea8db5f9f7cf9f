//! Test response wrapper with fluent assertions

use std::collections::BTreeSet;

use actix_web::{dev::ServiceResponse, http::StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct TestResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl TestResponse {
    pub(crate) async fn new(resp: ServiceResponse) -> Self {
        let status = resp.status();
        let body = actix_web::body::to_bytes(resp.into_body())
            .await
            .unwrap()
            .to_vec();
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Deserialize the body
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!("Failed to parse body as JSON: {e}. Body: {}", self.body_string())
        })
    }

    /// Assert status equals expected, returns self for chaining
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected}, got {}. Body: {}",
            self.status,
            self.body_string()
        );
        self
    }

    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    pub fn assert_created(self) -> Self {
        self.assert_status(StatusCode::CREATED)
    }

    pub fn assert_no_content(self) -> Self {
        self.assert_status(StatusCode::NO_CONTENT)
    }

    pub fn assert_bad_request(self) -> Self {
        self.assert_status(StatusCode::BAD_REQUEST)
    }

    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    /// Assert the error envelope carries the given business code
    pub fn assert_error_code(self, code: i32) -> Self {
        let body: Value = self.json();
        assert_eq!(body["code"], code, "Unexpected error body: {body}");
        self
    }
}

/// Key set of a JSON object
pub fn keys_of(value: &Value) -> BTreeSet<String> {
    value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .cloned()
        .collect()
}

/// The fields every serialized course exposes
pub fn course_fields() -> BTreeSet<String> {
    ["id", "name", "students"]
        .into_iter()
        .map(String::from)
        .collect()
}
