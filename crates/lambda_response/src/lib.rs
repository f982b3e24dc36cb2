//! Response shaping for serverless function handlers.
//!
//! Builds the two payload shapes a handler hands back to the invocation
//! runtime: HTTP proxy-integration responses and SQS partial batch failure
//! reports. Setter API inspired by
//! [expressjs/response](https://expressjs.com/en/4x/api.html#res).
//!
//! ## Usage
//!
//! ```
//! use lambda_response::{ResponseBuilder, StatusCode};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), lambda_response::ResponseError> {
//! let response = ResponseBuilder::new()
//!     .status(StatusCode::CREATED)
//!     .json(json!({ "message": "Hello World!" }))?;
//!
//! assert_eq!(response.status_code, StatusCode::CREATED);
//! assert_eq!(response.headers.get("content-type"), Some("application/json"));
//! assert_eq!(response.body, r#"{"message":"Hello World!"}"#);
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod sqs;

pub use http::response::{Response, ResponseBuilder, ResponseError, StatusCode};
pub use sqs::{BatchItemFailure, SqsResponse, SqsResponseBuilder};
