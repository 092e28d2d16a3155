//! # routeparam
//!
//! Extract and validate integer path parameters from incoming HTTP requests.
//!
//! The star of the show is [`get_int_param`]: it looks up a path parameter
//! bound by the router, parses it as a base-10 integer and, if that fails,
//! writes a `400 Bad Request` into the [`ResponseSink`] for you.
//! The caller only needs to stop processing when it gets an `Err` back.
//!
//! # Example
//!
//! ```rust
//! use routeparam::middleware::{Pipeline, Processing};
//! use routeparam::request::{path::get_int_param, RoutedRequest};
//! use routeparam::response::{Response, ResponseSink};
//! use routeparam::router::Router;
//!
//! let mut router = Router::new();
//! router
//!     .route(
//!         "/test/{test_id}",
//!         Pipeline::new().stage(|request: &RoutedRequest<'_, '_>, sink: &mut ResponseSink| {
//!             let Ok(test_id) = get_int_param("test_id", sink, request) else {
//!                 // The rejection has already been written.
//!                 return Processing::Halt;
//!             };
//!             let _ = sink.write(Response::ok().set_typed_body(format!("Test #{test_id}")));
//!             Processing::Continue
//!         }),
//!     )
//!     .unwrap();
//!
//! let request = http::Request::get("/test/123").body(()).unwrap();
//! assert_eq!(router.handle(request).status(), http::StatusCode::OK);
//!
//! let request = http::Request::get("/test/abc").body(()).unwrap();
//! assert_eq!(router.handle(request).status(), http::StatusCode::BAD_REQUEST);
//! ```
//!
//! [`get_int_param`]: request::path::get_int_param
//! [`ResponseSink`]: response::ResponseSink
pub use error::Error;
pub use response::Response;

pub mod config;
mod error;
pub mod http;
pub mod middleware;
pub mod request;
pub mod response;
pub mod router;
