use bytes::Bytes;
use http_body_util::Full;
use mime::APPLICATION_JSON;

use super::TypedBody;
use crate::http::HeaderValue;

/// A [`Response`](crate::response::Response) body with `Content-Type` set to
/// `application/json`.
///
/// # Example
///
/// ```rust
/// use routeparam::response::{Response, body::Json};
/// use routeparam::http::header::CONTENT_TYPE;
///
/// #[derive(serde::Serialize)]
/// struct Rejection {
///     error: String,
/// }
///
/// let json = Json::new(Rejection { error: "Nope".into() })
///     .expect("Failed to serialize the response body");
/// let response = Response::bad_request().set_typed_body(json);
///
/// assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
/// ```
pub struct Json(Bytes);

impl Json {
    /// Build a new [`Json`] body by serializing to JSON an instance of type `T`.
    ///
    /// It returns an error if serialization fails.
    pub fn new<T>(value: T) -> Result<Self, JsonSerializationError>
    where
        T: serde::Serialize,
    {
        let bytes = serde_json::to_vec(&value).map_err(JsonSerializationError)?;
        Ok(Self(bytes.into()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
/// The error returned by [`Json::new`] when the serialization into JSON fails.
pub struct JsonSerializationError(serde_json::Error);

impl TypedBody for Json {
    type Body = Full<Bytes>;

    fn content_type(&self) -> HeaderValue {
        HeaderValue::from_static(APPLICATION_JSON.as_ref())
    }

    fn body(self) -> Self::Body {
        Full::new(self.0)
    }
}
