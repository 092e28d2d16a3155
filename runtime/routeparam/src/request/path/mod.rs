//! Extract data from the path of incoming requests.
//!
//! # Overview
//!
//! There are three pieces to be aware of:
//!
//! - [`get_int_param`]: extract a path parameter as an integer, rejecting the request
//!   on your behalf if that's not possible
//! - [`RawPathParams`]: the (percent-encoded) path parameters bound by the router
//! - [`MatchedPathPattern`]: the URL template that matched for the incoming request
//!
//! # Example
//!
//! ```rust
//! use routeparam::middleware::Processing;
//! use routeparam::request::{path::get_int_param, RoutedRequest};
//! use routeparam::response::{Response, ResponseSink};
//!
//! // Registered for `/test/{test_id}`.
//! pub fn get_test(request: &RoutedRequest<'_, '_>, sink: &mut ResponseSink) -> Processing {
//!     let test_id = match get_int_param("test_id", sink, request) {
//!         Ok(test_id) => test_id,
//!         // The sink already holds a `400 Bad Request`.
//!         Err(_) => return Processing::Halt,
//!     };
//!     let _ = sink.write(Response::ok().set_typed_body(format!("Test #{test_id}")));
//!     Processing::Continue
//! }
//! ```
pub use int_param::{IntParamExtractor, get_int_param};
pub use matched_path::MatchedPathPattern;
pub use raw_path_params::{EncodedParamValue, RawPathParams, RawPathParamsIter};

pub mod errors;

mod int_param;
mod matched_path;
mod raw_path_params;
