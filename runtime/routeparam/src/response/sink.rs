use http::StatusCode;

use super::{IntoResponse, Response};

/// The output channel for a single request.
///
/// A response can be written into the sink **at most once**: the first write wins,
/// every subsequent write is rejected with [`ResponseAlreadyWritten`].
/// This is what allows [`get_int_param`] to send a rejection on your behalf
/// without any risk of a later stage clobbering it.
///
/// [`get_int_param`]: crate::request::path::get_int_param
#[derive(Debug, Default)]
pub struct ResponseSink {
    response: Option<Response>,
}

impl ResponseSink {
    /// Create a new, empty, sink.
    pub fn new() -> Self {
        Self { response: None }
    }

    /// Write a response into the sink.
    ///
    /// It fails if a response has already been written: the new response is discarded
    /// and the one already in the sink is left untouched.
    pub fn write<R: IntoResponse>(&mut self, response: R) -> Result<(), ResponseAlreadyWritten> {
        if let Some(existing) = &self.response {
            return Err(ResponseAlreadyWritten {
                status: existing.status(),
            });
        }
        self.response = Some(response.into_response());
        Ok(())
    }

    /// Returns `true` if a response has been written into the sink.
    pub fn is_written(&self) -> bool {
        self.response.is_some()
    }

    /// The status code of the response in the sink, if there is one.
    pub fn status(&self) -> Option<StatusCode> {
        self.response.as_ref().map(Response::status)
    }

    /// Consume the sink, returning the response that was written into it (if any).
    pub fn into_response(self) -> Option<Response> {
        self.response
    }
}

#[derive(Debug, thiserror::Error)]
#[error("A response (`{status}`) has already been written for this request")]
/// The error returned by [`ResponseSink::write`] when the sink already holds a response.
pub struct ResponseAlreadyWritten {
    status: StatusCode,
}

impl ResponseAlreadyWritten {
    /// The status code of the response that was already in the sink.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}
