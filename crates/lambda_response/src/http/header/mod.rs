mod map;
pub use map::HeaderMap;

/// The header name the response builder normalizes on finalization.
pub const CONTENT_TYPE: &str = "content-type";
/// The only media type a shaped response carries.
pub const APPLICATION_JSON: &str = "application/json";
