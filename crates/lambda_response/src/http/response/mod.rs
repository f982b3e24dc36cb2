use std::fmt::Display;

use serde::Serialize;

mod builder;
pub use builder::ResponseBuilder;

use crate::http::header::HeaderMap;

/// An HTTP status code, accepted verbatim.
///
/// The builder is domain-agnostic and performs no range validation, so
/// non-standard codes pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: Self = Self(200);
    pub const CREATED: Self = Self(201);
    pub const BAD_REQUEST: Self = Self(400);
    pub const NOT_FOUND: Self = Self(404);
    pub const TOO_MANY_REQUESTS: Self = Self(429);
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    pub const fn canonical_reason(&self) -> Option<&'static str> {
        Some(match self.0 {
            200 => "OK",
            201 => "Created",
            400 => "Bad Request",
            404 => "Not Found",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            _ => return None,
        })
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

// The wrapper should cost nothing over the raw code, we check that it is the case
static_assertions::assert_eq_size!(StatusCode, u16);

/// The finished response record handed back to the invocation runtime.
///
/// `body` is already-serialized JSON text; serializing the record itself
/// produces the `{"statusCode": ..., "headers": ..., "body": ...}` wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_reason() {
        let cases: &[(u16, Option<&'static str>)] = &[
            (200, Some("OK")),
            (201, Some("Created")),
            (429, Some("Too Many Requests")),
            (500, Some("Internal Server Error")),
            (599, None),
        ];

        for (code, reason) in cases {
            assert_eq!(StatusCode::new(*code).canonical_reason(), *reason);
        }
    }

    #[test]
    fn test_status_code_serializes_as_integer() {
        assert_eq!(
            serde_json::to_string(&StatusCode::TOO_MANY_REQUESTS).unwrap(),
            "429"
        );
    }

    #[test]
    fn test_response_wire_shape() {
        let response = Response {
            status_code: StatusCode::OK,
            headers: HeaderMap::from([("content-type", "application/json")]),
            body: r#"{"message":"success"}"#.to_string(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"statusCode":200,"headers":{"content-type":"application/json"},"body":"{\"message\":\"success\"}"}"#
        );
    }
}
