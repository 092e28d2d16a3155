//! Types related to the HTTP protocol (status codes, headers, etc).
//!
//! This module re-exports the parts of the [`http`] crate that show up in `routeparam`'s API.
pub use ::http::header;
pub use ::http::method;
pub use ::http::status;
pub use ::http::uri;
pub use ::http::version;

pub use header::HeaderMap;
pub use header::HeaderName;
pub use header::HeaderValue;
pub use method::Method;
pub use status::StatusCode;
pub use uri::Uri;
pub use version::Version;
