//! Tools for building [`Response`](crate::response::Response) bodies.
//!
//! Check out [`Response::set_typed_body`] for more details.
//!
//! [`Response::set_typed_body`]: crate::response::Response::set_typed_body
pub(crate) mod body_;
mod json;
mod plain_text;
pub mod raw;

pub use json::{Json, JsonSerializationError};
pub use typed_body::TypedBody;

mod typed_body {
    use super::raw::{Bytes, RawBody};
    use crate::http::HeaderValue;

    /// A trait that ties together a [`Response`] body with
    /// its expected `Content-Type` header.
    ///
    /// You need to specify two things:
    ///
    /// 1. The value of the `Content-Type` header
    /// 2. The low-level representation of your body type
    ///
    /// [`Full<Bytes>`](super::raw::Full) is the canonical choice for bodies that are fully
    /// buffered in memory.
    ///
    /// [`Response`]: crate::response::Response
    pub trait TypedBody {
        type Body: RawBody<Data = Bytes> + Send + Sync + 'static;

        /// The header value that should be used as `Content-Type` when
        /// returning this [`Response`](crate::response::Response).
        fn content_type(&self) -> HeaderValue;

        /// The actual body type.
        fn body(self) -> Self::Body;
    }
}
