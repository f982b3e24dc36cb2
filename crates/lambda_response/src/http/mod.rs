pub mod header;
pub mod response;

#[derive(Debug, Clone)]
enum Body {
    None,
    Json(serde_json::Value),
}

impl Body {
    /// Renders the pending body as JSON text. A body which was never set
    /// serializes as `null`.
    fn to_json_text(&self) -> String {
        match self {
            Body::None => serde_json::Value::Null.to_string(),
            Body::Json(value) => value.to_string(),
        }
    }
}
