use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The URL template that matched for the incoming request.
///
/// If you register a pipeline for `/test/{test_id}`, [`MatchedPathPattern`] is set
/// to `/test/{test_id}` for a `GET /test/123` request.
///
/// The primary use case is telemetry: it strips away the dynamic parts of the
/// request path, keeping the cardinality of your log fields low.
#[doc(alias("MatchedPath"))]
#[doc(alias("PathTemplate"))]
pub struct MatchedPathPattern<'server>(&'server str);

impl<'server> MatchedPathPattern<'server> {
    /// Create a new matched path from a URL template.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routeparam::request::path::MatchedPathPattern;
    ///
    /// let matched = MatchedPathPattern::new("/test/{test_id}");
    /// assert_eq!(matched.inner(), "/test/{test_id}");
    /// ```
    pub fn new(template: &'server str) -> Self {
        Self(template)
    }

    /// Get a reference to the underlying URL template.
    pub fn inner(self) -> &'server str {
        self.0
    }
}

impl std::fmt::Display for MatchedPathPattern<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
