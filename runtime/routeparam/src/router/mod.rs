//! Dispatch requests to the appropriate [`Pipeline`](crate::middleware::Pipeline).
pub use allowed_methods::AllowedMethods;
pub use fallback::default_fallback;
pub use router_::Router;

mod allowed_methods;
pub mod errors;
mod fallback;
mod router_;
