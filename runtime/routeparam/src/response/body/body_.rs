use std::pin::{Pin, pin};
use std::task::{Context, Poll};

use http_body::{Frame, SizeHint};
use http_body_util::BodyExt;
use http_body_util::combinators::UnsyncBoxBody;

use super::raw::{Bytes, RawBody};
use crate::Error;

/// The body type used by [`Response`](crate::response::Response) once it has been boxed.
///
/// You'll rarely have to work with `ResponseBody` directly:
/// rely on [`Response::set_typed_body`] to build the body of your responses.
///
/// [`Response::set_typed_body`]: crate::response::Response::set_typed_body
#[derive(Debug)]
pub struct ResponseBody(UnsyncBoxBody<Bytes, Error>);

impl ResponseBody {
    /// Create a new [`ResponseBody`] from a raw body type.
    pub fn new<B>(body: B) -> Self
    where
        B: RawBody<Data = Bytes> + Send + 'static,
        <B as RawBody>::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(body.map_err(Error::new).boxed_unsync())
    }
}

impl RawBody for ResponseBody {
    type Data = Bytes;
    type Error = Error;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        pin!(&mut self.0).as_mut().poll_frame(cx)
    }

    fn is_end_stream(&self) -> bool {
        self.0.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.0.size_hint()
    }
}

impl Default for ResponseBody {
    fn default() -> Self {
        ResponseBody::new(super::raw::Empty::new())
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use crate::response::Response;

    #[tokio::test]
    async fn boxing_preserves_the_payload() {
        let body = Response::ok()
            .set_typed_body("Hello, world!")
            .box_body()
            .into_body();
        let bytes = body.collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Hello, world!");
    }
}
