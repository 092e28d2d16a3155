//! Low-level types for [`Response`](crate::response::Response) bodies.
pub use bytes::Bytes;
/// Trait representing a streaming [`Response`](crate::response::Response) body.
pub use http_body::Body as RawBody;
pub use http_body_util::{Empty, Full};
