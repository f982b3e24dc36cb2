use serde::Serialize;

use crate::http::{
    Body,
    header::{self, HeaderMap},
    response::{Response, ResponseError, StatusCode},
};

/// Builds an HTTP response for a function handler.
///
/// Setters chain; [`json`](Self::json) and [`build`](Self::build) finalize.
/// A builder can be finalized more than once, each result reflecting the
/// state accumulated so far.
///
/// ## Example
///
/// ```
/// use lambda_response::{ResponseBuilder, StatusCode};
/// use serde_json::json;
///
/// let response = ResponseBuilder::new()
///     .status(StatusCode::TOO_MANY_REQUESTS)
///     .json(json!({ "message": "slow down" }))
///     .unwrap();
///
/// assert_eq!(response.body, r#"{"message":"slow down"}"#);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: HeaderMap,
    body: Body,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder {
    /// A fresh builder: status 200, no headers, no body.
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Body::None,
        }
    }

    /// Set the status code.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Replace the response headers wholesale.
    ///
    /// ## Example
    ///
    /// ```
    /// use lambda_response::ResponseBuilder;
    /// use serde_json::json;
    ///
    /// let response = ResponseBuilder::new()
    ///     .headers([
    ///         ("content-type", "application/json"),
    ///         ("x-token", "p@ssword123"),
    ///     ])
    ///     .json(json!({ "message": "Hello World!" }))
    ///     .unwrap();
    ///
    /// assert_eq!(response.headers.get("x-token"), Some("p@ssword123"));
    /// ```
    pub fn headers(mut self, headers: impl Into<HeaderMap>) -> Self {
        self.headers = headers.into();
        self
    }

    /// Set the body value used by [`build`](Self::build).
    pub fn body(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.body = Body::Json(value.into());
        self
    }

    /// Finalize with an explicit body, which takes precedence over any value
    /// set via [`body`](Self::body) without replacing it.
    ///
    /// Fails only if `body`'s `Serialize` impl fails.
    pub fn json<T: Serialize>(&mut self, body: T) -> Result<Response, ResponseError> {
        let body = serde_json::to_value(body)?;
        Ok(self.finish(Body::Json(body)))
    }

    /// Finalize with the accumulated body. A body which was never set
    /// serializes as JSON `null`.
    pub fn build(&mut self) -> Response {
        let body = self.body.clone();
        self.finish(body)
    }

    fn finish(&mut self, body: Body) -> Response {
        self.set_content_type();
        Response {
            status_code: self.status,
            headers: self.headers.clone(),
            body: body.to_json_text(),
        }
    }

    /// Forces a single content-type entry, no matter how callers cased the
    /// key, reusing the casing and position of an existing one.
    fn set_content_type(&mut self) {
        if let Some(old) = self
            .headers
            .insert_ignore_case(header::CONTENT_TYPE, header::APPLICATION_JSON)
        {
            if old != header::APPLICATION_JSON {
                log::debug!("content-type {old:?} overridden with {:?}", header::APPLICATION_JSON);
            }
        }
    }
}
