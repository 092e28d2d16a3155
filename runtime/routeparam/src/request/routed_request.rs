use super::RequestHead;
use super::path::{MatchedPathPattern, RawPathParams};

/// An incoming request, after the router has matched its path against
/// one of the registered URL templates.
///
/// It is what every [`Stage`](crate::middleware::Stage) receives.
/// The path parameters live as long as the router (`'server`) for their names
/// and as long as the request (`'request`) for their values.
#[derive(Debug, Clone)]
pub struct RoutedRequest<'server, 'request> {
    pub head: &'request RequestHead,
    pub path_params: RawPathParams<'server, 'request>,
    pub matched_path: MatchedPathPattern<'server>,
}

impl<'server, 'request> RoutedRequest<'server, 'request> {
    /// Bundle together the pieces of information produced by a successful route match.
    pub fn new(
        head: &'request RequestHead,
        path_params: RawPathParams<'server, 'request>,
        matched_path: MatchedPathPattern<'server>,
    ) -> Self {
        Self {
            head,
            path_params,
            matched_path,
        }
    }
}
