use bytes::Bytes;
use http::StatusCode;

use super::Response;

/// Convert a type into a [`Response`].
///
/// Types that implement `IntoResponse` can be written into a
/// [`ResponseSink`](super::ResponseSink).
pub trait IntoResponse {
    /// Convert `self` into an HTTP response.
    fn into_response(self) -> Response;
}

impl<B> IntoResponse for Response<B>
where
    B: http_body::Body<Data = Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + 'static,
{
    fn into_response(self) -> Response {
        self.box_body()
    }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        Response::new(self).box_body()
    }
}
