//! Errors that can happen when registering routes.
use http::Method;

/// The error returned by [`Router::route`] and [`Router::route_method`].
///
/// [`Router::route`]: super::Router::route
/// [`Router::route_method`]: super::Router::route_method
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RouteRegistrationError {
    /// The template is malformed or conflicts with a template that was registered earlier.
    #[error("`{template}` can't be registered as a URL template")]
    InvalidTemplate {
        template: String,
        #[source]
        source: matchit::InsertError,
    },
    /// A pipeline has already been registered for the same template and method(s).
    #[error(
        "A pipeline has already been registered for {} on `{template}`",
        method_label(.method)
    )]
    DuplicatePipeline {
        template: String,
        /// `None` if the clash is on the pipeline that handles all methods.
        method: Option<Method>,
    },
}

fn method_label(method: &Option<Method>) -> String {
    match method {
        Some(m) => format!("`{m}` requests"),
        None => "all methods".to_owned(),
    }
}
