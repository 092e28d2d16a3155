//! Process and extract data from incoming HTTP requests.
pub use request_head::RequestHead;
pub use routed_request::RoutedRequest;

pub mod path;
mod request_head;
mod routed_request;
