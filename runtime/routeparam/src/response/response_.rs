use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http_body_util::Empty;

use super::ResponseBody;
use super::body::TypedBody;
use crate::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

/// Represents an HTTP response.
///
/// ```rust
/// use routeparam::response::Response;
/// use routeparam::http::{HeaderValue, header::SERVER};
///
/// // Create a new response with:
/// // - status code `OK`
/// // - the `Server` header set to `routeparam`
/// // - the `Content-Type` header set to `text/plain; charset=utf-8`
/// // - the body set to `Hello, world!`
/// let response = Response::ok()
///     .insert_header(SERVER, HeaderValue::from_static("routeparam"))
///     .set_typed_body("Hello, world!");
/// ```
///
/// Check out [`Response::new`] and the status shorthands (e.g. [`Response::bad_request`])
/// to start building one.
#[derive(Debug)]
pub struct Response<Body = ResponseBody> {
    inner: http::Response<Body>,
}

impl Response<Empty<Bytes>> {
    /// Build a new [`Response`] with the given status code.
    /// The HTTP version is set to HTTP 1.1, there are no headers and
    /// the body is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routeparam::http::StatusCode;
    /// use routeparam::response::Response;
    ///
    /// let response = Response::new(StatusCode::BAD_REQUEST);
    /// assert_eq!(response.status(), Response::bad_request().status());
    /// ```
    pub fn new(status_code: StatusCode) -> Self {
        let inner = http::Response::new(Empty::new());
        Self { inner }.set_status(status_code)
    }
}

impl<Body> Response<Body> {
    /// Change the status code of the [`Response`].
    pub fn set_status(mut self, status: StatusCode) -> Self {
        *self.inner.status_mut() = status;
        self
    }

    /// Insert a header value into the [`Response`].
    ///
    /// If the header key is not present, it is added with the given value.
    /// If the header key is present, its value is replaced with the given value.
    pub fn insert_header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.inner.headers_mut().insert(key, value);
        self
    }

    /// Set the [`Response`] body.
    ///
    /// The provided body must implement the [`TypedBody`] trait.
    /// The `Content-Type` header is automatically set to the value returned
    /// by [`TypedBody::content_type`].
    ///
    /// If a body is already set, it is replaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routeparam::response::Response;
    /// use routeparam::http::header::CONTENT_TYPE;
    ///
    /// let response = Response::ok().set_typed_body("Hello, world!");
    /// assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
    /// ```
    pub fn set_typed_body<NewBody>(self, body: NewBody) -> Response<<NewBody as TypedBody>::Body>
    where
        NewBody: TypedBody,
    {
        let (mut head, _) = self.inner.into_parts();
        head.headers.insert(CONTENT_TYPE, body.content_type());
        http::Response::from_parts(head, body.body()).into()
    }

    /// Box the current [`Response`] body.
    ///
    /// It is necessary whenever different branches of your code return responses
    /// with different body types (e.g. `Full<Bytes>` and `Empty<Bytes>`).
    pub fn box_body(self) -> Response<ResponseBody>
    where
        Body: http_body::Body<Data = Bytes> + Send + 'static,
        Body::Error: Into<Box<dyn std::error::Error + Send + Sync>> + 'static,
    {
        let (head, body) = self.inner.into_parts();
        http::Response::from_parts(head, ResponseBody::new(body)).into()
    }

    /// Get a reference to the [`Response`] status code.
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Get a reference to the [`Response`] headers.
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Consume the [`Response`], returning its body.
    pub fn into_body(self) -> Body {
        self.inner.into_body()
    }
}

impl<Body> From<http::Response<Body>> for Response<Body> {
    fn from(inner: http::Response<Body>) -> Self {
        Self { inner }
    }
}

impl<Body> From<Response<Body>> for http::Response<Body> {
    fn from(res: Response<Body>) -> Self {
        res.inner
    }
}

macro_rules! shorthand {
    ($name:ident) => {
        paste::paste! {
            #[doc = "Start building a new [`Response`] with [`" $name "`](`StatusCode::" $name "`) as status code."]
            pub fn [<$name:lower>]() -> Response<Empty<Bytes>> {
                Response::new(StatusCode::[<$name>])
            }
        }
    };
}

/// Shorthand for building a new [`Response`] using a well-known status code.
impl Response<Empty<Bytes>> {
    // 2xx
    shorthand!(OK);
    shorthand!(NO_CONTENT);

    // 4xx
    shorthand!(BAD_REQUEST);
    shorthand!(NOT_FOUND);
    shorthand!(METHOD_NOT_ALLOWED);
}
