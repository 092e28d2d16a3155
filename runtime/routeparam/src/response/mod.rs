//! Build HTTP responses and hand them over through a [`ResponseSink`].
//!
//! Check out the [`Response`] type for more details.
pub use body::body_::ResponseBody;
pub use into_response::IntoResponse;
pub use response_::Response;
pub use sink::{ResponseAlreadyWritten, ResponseSink};

pub mod body;
mod into_response;
mod response_;
mod sink;
