//! Errors that can happen when extracting path parameters.
use std::num::ParseIntError;
use std::str::Utf8Error;

use tracing_log_error::log_error;

use crate::config::{BodyFormat, ExtractorConfig};
use crate::response::Response;
use crate::response::body::Json;

/// The error returned by [`get_int_param`] when the extraction fails.
///
/// Both variants are equally terminal: by the time you receive this error,
/// a rejection has already been written into the [`ResponseSink`]. Stop processing
/// the request, there is nothing left for you to write.
///
/// [`get_int_param`]: super::get_int_param
/// [`ResponseSink`]: crate::response::ResponseSink
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExtractIntParamError {
    #[error(transparent)]
    /// See [`MissingPathParam`] for details.
    MissingParameter(MissingPathParam),
    #[error(transparent)]
    /// See [`InvalidIntParam`] for details.
    InvalidInteger(InvalidIntParam),
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
/// The request doesn't carry a path parameter with the expected name.
///
/// This usually means that the URL template of the route (e.g. `/test/{id}`) doesn't
/// declare the parameter you asked for (e.g. `test_id`).
#[error("The path parameter `{name}` is missing")]
pub struct MissingPathParam {
    pub(super) name: String,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
/// The path parameter is there, but it can't be interpreted as a base-10 integer.
///
/// # Example
///
/// One of our routes is `/test/{test_id}`.
/// We receive a request with `/test/abc` as path: `test_id` is set to `abc`, which
/// is not a number. This error is then returned.
///
/// The same happens for `/test/99999999999999999999` (it doesn't fit into an `i64`)
/// and for `/test/dirty%DE~%C7%1FY` (not a well-formed UTF8 string when percent-decoded).
#[error("`{name}` is set to `{raw_value}`, which we can't parse as an integer")]
pub struct InvalidIntParam {
    pub(super) name: String,
    pub(super) raw_value: String,
    #[source]
    pub(super) source: IntParamParseError,
}

/// The underlying reason why an [`InvalidIntParam`] was returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum IntParamParseError {
    #[error(transparent)]
    /// The raw value couldn't be percent-decoded.
    Decode(DecodeError),
    #[error(transparent)]
    /// The decoded value is not a valid `i64` literal.
    Parse(ParseIntError),
}

/// The error returned by [`EncodedParamValue::decode`] when the percent-decoded path parameter
/// is not a valid UTF8 string.
///
/// # Example
///
/// You might try to percent-decode `dirty%DE~%C7%1FY`.
/// When decoded, it is a sequence of bytes that cannot be interpreted as a well-formed UTF8 string.
/// This error is then returned.
///
/// [`EncodedParamValue::decode`]: super::EncodedParamValue::decode
#[derive(Debug, thiserror::Error)]
#[error("`{invalid_raw_segment}` is not a well-formed UTF8 string when percent-decoded")]
pub struct DecodeError {
    pub(super) invalid_raw_segment: String,
    #[source]
    pub(super) source: Utf8Error,
}

impl ExtractIntParamError {
    /// The name of the path parameter that we failed to extract.
    pub fn param_name(&self) -> &str {
        match self {
            ExtractIntParamError::MissingParameter(e) => &e.name,
            ExtractIntParamError::InvalidInteger(e) => &e.name,
        }
    }

    /// Convert an [`ExtractIntParamError`] into an HTTP response.
    ///
    /// Both variants map to the same status code, [`ExtractorConfig::rejection_status`]
    /// (`400 Bad Request` unless configured otherwise).
    /// The body is either plain text or JSON, depending on [`ExtractorConfig::body_format`].
    pub fn into_response(&self, config: &ExtractorConfig) -> Response {
        let status = config.rejection_status.status_code();
        match config.body_format {
            BodyFormat::PlainText => Response::new(status)
                .set_typed_body(format!("Invalid URL.\n{self}"))
                .box_body(),
            BodyFormat::Json => {
                let rejection = JsonRejection {
                    error: self.to_string(),
                    parameter: self.param_name(),
                };
                match Json::new(rejection) {
                    Ok(body) => Response::new(status).set_typed_body(body).box_body(),
                    Err(e) => {
                        log_error!(
                            e,
                            level: tracing::Level::WARN,
                            "Failed to serialize the rejection as JSON. Falling back to plain text"
                        );
                        Response::new(status)
                            .set_typed_body(format!("Invalid URL.\n{self}"))
                            .box_body()
                    }
                }
            }
        }
    }
}

impl MissingPathParam {
    /// The name of the path parameter that couldn't be found.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl InvalidIntParam {
    /// The name of the offending path parameter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of the path parameter, as it appeared in the URL (i.e. percent-encoded).
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Why the value couldn't be parsed.
    pub fn reason(&self) -> &IntParamParseError {
        &self.source
    }
}

#[derive(serde::Serialize)]
struct JsonRejection<'a> {
    error: String,
    parameter: &'a str,
}
