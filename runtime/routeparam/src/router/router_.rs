use crate::http::Method;
use crate::middleware::{Pipeline, Processing, Stage};
use crate::request::path::MatchedPathPattern;
use crate::request::{RequestHead, RoutedRequest};
use crate::response::{Response, ResponseSink};

use super::errors::RouteRegistrationError;
use super::{AllowedMethods, default_fallback};

/// Map URL templates to [`Pipeline`]s and dispatch incoming requests.
///
/// Path matching is delegated to [`matchit`]: templates use `{name}` to
/// declare a path parameter (e.g. `/test/{test_id}`) and `{*name}` for a catch-all.
///
/// # Example
///
/// ```rust
/// use routeparam::http::{Method, StatusCode};
/// use routeparam::middleware::{IntParamGuard, Pipeline};
/// use routeparam::router::Router;
///
/// let mut router = Router::new();
/// router
///     .route_method(Method::GET, "/test/{test_id}", Pipeline::new().stage(IntParamGuard::new("test_id")))
///     .unwrap();
///
/// let request = http::Request::get("/test/abc").body(()).unwrap();
/// assert_eq!(router.handle(request).status(), StatusCode::BAD_REQUEST);
///
/// let request = http::Request::post("/test/123").body(()).unwrap();
/// assert_eq!(router.handle(request).status(), StatusCode::METHOD_NOT_ALLOWED);
/// ```
#[derive(Debug, Default)]
pub struct Router {
    matcher: matchit::Router<usize>,
    routes: Vec<Route>,
}

#[derive(Debug)]
struct Route {
    template: String,
    by_method: Vec<(Method, Pipeline)>,
    any_method: Option<Pipeline>,
}

impl Route {
    fn new(template: String) -> Self {
        Self {
            template,
            by_method: Vec::new(),
            any_method: None,
        }
    }

    /// A method-specific pipeline wins over the catch-all one.
    fn pipeline(&self, method: &Method) -> Result<&Pipeline, AllowedMethods> {
        self.by_method
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, pipeline)| pipeline)
            .or(self.any_method.as_ref())
            .ok_or_else(|| self.by_method.iter().map(|(m, _)| m.clone()).collect())
    }
}

impl Router {
    /// Create a router with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `pipeline` for requests whose path matches `template`, whatever their method.
    pub fn route(
        &mut self,
        template: &str,
        pipeline: Pipeline,
    ) -> Result<&mut Self, RouteRegistrationError> {
        self.register(None, template, pipeline)
    }

    /// Register `pipeline` for `method` requests whose path matches `template`.
    pub fn route_method(
        &mut self,
        method: Method,
        template: &str,
        pipeline: Pipeline,
    ) -> Result<&mut Self, RouteRegistrationError> {
        self.register(Some(method), template, pipeline)
    }

    fn register(
        &mut self,
        method: Option<Method>,
        template: &str,
        pipeline: Pipeline,
    ) -> Result<&mut Self, RouteRegistrationError> {
        let index = match self.routes.iter().position(|r| r.template == template) {
            Some(index) => index,
            None => {
                let index = self.routes.len();
                self.matcher.insert(template, index).map_err(|source| {
                    RouteRegistrationError::InvalidTemplate {
                        template: template.to_owned(),
                        source,
                    }
                })?;
                self.routes.push(Route::new(template.to_owned()));
                index
            }
        };
        let route = &mut self.routes[index];
        let duplicate = match &method {
            Some(m) => route.by_method.iter().any(|(existing, _)| existing == m),
            None => route.any_method.is_some(),
        };
        if duplicate {
            return Err(RouteRegistrationError::DuplicatePipeline {
                template: template.to_owned(),
                method,
            });
        }
        tracing::debug!(
            http.route = template,
            http.request.method = method.as_ref().map(Method::as_str).unwrap_or("*"),
            "Registered a new route"
        );
        match method {
            Some(m) => route.by_method.push((m, pipeline)),
            None => route.any_method = Some(pipeline),
        }
        Ok(self)
    }

    /// Route an incoming request to the matching pipeline and return the response it produced.
    ///
    /// - No template matches the request path: `404 Not Found`.
    /// - A template matches, but there's no pipeline for the request method:
    ///   `405 Method Not Allowed`.
    /// - The pipeline completes without writing anything: `200 OK`, with an empty body.
    ///
    /// The request body is never read.
    pub fn handle<B>(&self, request: http::Request<B>) -> Response {
        let (parts, _) = request.into_parts();
        let head = RequestHead::from(parts);
        let span = tracing::info_span!(
            "HTTP request",
            http.request.method = %head.method,
            url.path = %head.target.path(),
            http.route = tracing::field::Empty,
            http.response.status_code = tracing::field::Empty,
        );
        let _guard = span.enter();
        let response = self.dispatch(&head);
        span.record("http.response.status_code", response.status().as_u16());
        response
    }

    fn dispatch(&self, head: &RequestHead) -> Response {
        let Ok(matched) = self.matcher.at(head.target.path()) else {
            return default_fallback(&AllowedMethods::default());
        };
        let route = &self.routes[*matched.value];
        tracing::Span::current().record("http.route", route.template.as_str());
        let pipeline = match route.pipeline(&head.method) {
            Ok(pipeline) => pipeline,
            Err(allowed_methods) => return default_fallback(&allowed_methods),
        };

        let request = RoutedRequest::new(
            head,
            matched.params.into(),
            MatchedPathPattern::new(&route.template),
        );
        let mut sink = ResponseSink::new();
        if pipeline.process(&request, &mut sink) == Processing::Halt {
            tracing::debug!("The pipeline was halted before completion");
        }
        sink.into_response()
            .unwrap_or_else(|| Response::ok().box_body())
    }
}
