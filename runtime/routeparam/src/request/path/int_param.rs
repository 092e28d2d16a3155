use tracing_log_error::log_error;

use crate::config::ExtractorConfig;
use crate::request::RoutedRequest;
use crate::response::ResponseSink;

use super::RawPathParams;
use super::errors::{ExtractIntParamError, IntParamParseError, InvalidIntParam, MissingPathParam};

/// Extract the path parameter called `name` as a base-10 signed integer.
///
/// It behaves like [`IntParamExtractor::extract`] with the default [`ExtractorConfig`]:
/// failures are rejected with a plain-text `400 Bad Request`.
///
/// # Example
///
/// `test_id` will be set to `123` for an incoming `/test/123` request against the
/// `/test/{test_id}` template.
/// Extraction will fail, instead, for a `/test/abc` request: a `400 Bad Request` is
/// written into `sink` and an error is returned.
pub fn get_int_param(
    name: &str,
    sink: &mut ResponseSink,
    request: &RoutedRequest<'_, '_>,
) -> Result<i64, ExtractIntParamError> {
    IntParamExtractor::default().extract(name, sink, request)
}

/// Extract integer path parameters, rejecting the request when that's not possible.
///
/// It carries the [`ExtractorConfig`] that determines what the rejection looks like.
/// Use [`get_int_param`] if you are happy with the defaults.
#[derive(Debug, Clone, Default)]
pub struct IntParamExtractor {
    config: ExtractorConfig,
}

impl IntParamExtractor {
    /// Create a new extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Look up `name` in the path parameters of `request` and parse it as an `i64`.
    ///
    /// The value is percent-decoded before parsing. A leading `+` or `-` sign is accepted,
    /// whitespace is not.
    ///
    /// # Side effects
    ///
    /// `sink` is left untouched on success.
    /// On failure the rejection is written into `sink` before returning: the caller must
    /// not write anything else. If `sink` already holds a response, it is left as is.
    pub fn extract(
        &self,
        name: &str,
        sink: &mut ResponseSink,
        request: &RoutedRequest<'_, '_>,
    ) -> Result<i64, ExtractIntParamError> {
        parse_int_param(name, &request.path_params)
            .inspect_err(|e| self.reject(e, sink, request))
    }

    fn reject(
        &self,
        e: &ExtractIntParamError,
        sink: &mut ResponseSink,
        request: &RoutedRequest<'_, '_>,
    ) {
        log_error!(
            e,
            level: tracing::Level::WARN,
            path_param.name = e.param_name(),
            http.route = %request.matched_path,
            "Rejected the request: the path parameter is not a valid integer"
        );
        if let Err(e) = sink.write(e.into_response(&self.config)) {
            log_error!(
                e,
                level: tracing::Level::WARN,
                "The rejection for an invalid path parameter was not written"
            );
        }
    }
}

fn parse_int_param(
    name: &str,
    params: &RawPathParams<'_, '_>,
) -> Result<i64, ExtractIntParamError> {
    let Some(raw_value) = params.get(name) else {
        return Err(ExtractIntParamError::MissingParameter(MissingPathParam {
            name: name.to_owned(),
        }));
    };
    let invalid = |source| {
        ExtractIntParamError::InvalidInteger(InvalidIntParam {
            name: name.to_owned(),
            raw_value: raw_value.as_str().to_owned(),
            source,
        })
    };
    let decoded = raw_value
        .decode()
        .map_err(|e| invalid(IntParamParseError::Decode(e)))?;
    decoded
        .parse::<i64>()
        .map_err(|e| invalid(IntParamParseError::Parse(e)))
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use matchit::Router;

    use super::*;
    use crate::config::RejectionStatus;
    use crate::request::RequestHead;
    use crate::request::path::MatchedPathPattern;

    const TEMPLATE: &str = "/test/{test_id}";

    fn head(path: &str) -> RequestHead {
        let (parts, _) = http::Request::get(path).body(()).unwrap().into_parts();
        parts.into()
    }

    /// Run `f` against a request for `path`, matched against `template`.
    fn with_request<T>(
        template: &str,
        path: &str,
        f: impl FnOnce(&RoutedRequest<'_, '_>) -> T,
    ) -> T {
        let mut router = Router::new();
        router.insert(template, ()).unwrap();
        let head = head(path);
        let matched = router.at(head.target.path()).unwrap();
        let request = RoutedRequest::new(
            &head,
            matched.params.into(),
            MatchedPathPattern::new(template),
        );
        f(&request)
    }

    fn extract(path: &str) -> (Result<i64, ExtractIntParamError>, ResponseSink) {
        with_request(TEMPLATE, path, |request| {
            let mut sink = ResponseSink::new();
            let outcome = get_int_param("test_id", &mut sink, request);
            (outcome, sink)
        })
    }

    #[test]
    fn valid_integers_are_returned_without_writing() {
        for (path, expected) in [
            ("/test/123", 123),
            ("/test/0", 0),
            ("/test/-42", -42),
            ("/test/+7", 7),
            ("/test/%31%32%33", 123),
            ("/test/9223372036854775807", i64::MAX),
            ("/test/-9223372036854775808", i64::MIN),
        ] {
            let (outcome, sink) = extract(path);
            assert_eq!(outcome.unwrap(), expected, "{path}");
            assert!(!sink.is_written(), "{path}");
        }
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        for path in ["/test/abc", "/test/12abc", "/test/1.5", "/test/%2012", "/test/-"] {
            let (outcome, sink) = extract(path);
            let err = outcome.unwrap_err();
            assert!(
                matches!(err, ExtractIntParamError::InvalidInteger(_)),
                "{path}"
            );
            assert_eq!(sink.status(), Some(StatusCode::BAD_REQUEST), "{path}");
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let (outcome, sink) = extract("/test/9223372036854775808");
        let ExtractIntParamError::InvalidInteger(err) = outcome.unwrap_err() else {
            panic!("Expected an invalid integer error");
        };
        assert_eq!(err.raw_value(), "9223372036854775808");
        assert!(matches!(err.reason(), IntParamParseError::Parse(_)));
        assert_eq!(sink.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn undecodable_values_are_rejected() {
        let (outcome, sink) = extract("/test/dirty%DE~%C7%1FY");
        let ExtractIntParamError::InvalidInteger(err) = outcome.unwrap_err() else {
            panic!("Expected an invalid integer error");
        };
        assert!(matches!(err.reason(), IntParamParseError::Decode(_)));
        assert_eq!(sink.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn missing_parameters_are_rejected() {
        let (outcome, sink) = with_request("/test/{id}", "/test/123", |request| {
            let mut sink = ResponseSink::new();
            let outcome = get_int_param("test_id", &mut sink, request);
            (outcome, sink)
        });
        let err = outcome.unwrap_err();
        assert!(matches!(err, ExtractIntParamError::MissingParameter(_)));
        assert_eq!(err.param_name(), "test_id");
        assert_eq!(sink.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn an_existing_response_is_not_overwritten() {
        let (outcome, sink) = with_request(TEMPLATE, "/test/abc", |request| {
            let mut sink = ResponseSink::new();
            sink.write(StatusCode::IM_A_TEAPOT).unwrap();
            let outcome = get_int_param("test_id", &mut sink, request);
            (outcome, sink)
        });
        assert!(outcome.is_err());
        assert_eq!(sink.status(), Some(StatusCode::IM_A_TEAPOT));
    }

    #[test]
    fn the_configured_status_is_used() {
        let config = ExtractorConfig {
            rejection_status: RejectionStatus::try_from(404).unwrap(),
            ..Default::default()
        };
        let extractor = IntParamExtractor::new(config);
        let sink = with_request(TEMPLATE, "/test/abc", |request| {
            let mut sink = ResponseSink::new();
            assert!(extractor.extract("test_id", &mut sink, request).is_err());
            sink
        });
        assert_eq!(sink.status(), Some(StatusCode::NOT_FOUND));
    }
}
