//! Middleware types and utilities.
//!
//! A [`Pipeline`] is an ordered list of [`Stage`]s.
//! Each stage gets the [`RoutedRequest`] and the [`ResponseSink`] for the request:
//! it may write a response and it decides, via [`Processing`], whether the next
//! stage should run.
use std::sync::Arc;

use crate::request::RoutedRequest;
use crate::request::path::IntParamExtractor;
use crate::response::ResponseSink;

/// The return type of a [`Stage`].
///
/// It signals whether the request processing should continue or be aborted.
/// A stage that halts is expected to have written a response into the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Processing {
    Continue,
    Halt,
}

/// A step in the request processing pipeline.
///
/// Closures with the right signature are stages:
///
/// ```rust
/// use routeparam::middleware::{Pipeline, Processing};
/// use routeparam::request::RoutedRequest;
/// use routeparam::response::{Response, ResponseSink};
///
/// let pipeline = Pipeline::new().stage(
///     |_request: &RoutedRequest<'_, '_>, sink: &mut ResponseSink| {
///         let _ = sink.write(Response::no_content());
///         Processing::Continue
///     },
/// );
/// ```
pub trait Stage: Send + Sync {
    /// Process the request, optionally writing a response into `sink`.
    fn process(&self, request: &RoutedRequest<'_, '_>, sink: &mut ResponseSink) -> Processing;
}

impl<F> Stage for F
where
    F: Fn(&RoutedRequest<'_, '_>, &mut ResponseSink) -> Processing + Send + Sync,
{
    fn process(&self, request: &RoutedRequest<'_, '_>, sink: &mut ResponseSink) -> Processing {
        (self)(request, sink)
    }
}

/// An ordered sequence of [`Stage`]s.
///
/// Stages are executed in registration order, until one of them returns
/// [`Processing::Halt`] or there are no stages left.
#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the pipeline.
    pub fn stage<S>(mut self, stage: S) -> Self
    where
        S: Stage + 'static,
    {
        self.stages.push(Arc::new(stage));
        self
    }

    /// The number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if there are no stages in the pipeline.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Stage for Pipeline {
    fn process(&self, request: &RoutedRequest<'_, '_>, sink: &mut ResponseSink) -> Processing {
        for (position, stage) in self.stages.iter().enumerate() {
            if stage.process(request, sink) == Processing::Halt {
                if !sink.is_written() {
                    tracing::warn!(
                        pipeline.stage = position,
                        "A stage halted the pipeline without writing a response"
                    );
                }
                return Processing::Halt;
            }
        }
        Processing::Continue
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("n_stages", &self.stages.len())
            .finish()
    }
}

/// A [`Stage`] that halts the pipeline unless the path parameter it guards
/// is a valid integer.
///
/// The rejection is written by the underlying [`IntParamExtractor`].
///
/// # Example
///
/// ```rust
/// use routeparam::middleware::{IntParamGuard, Pipeline, Processing};
/// use routeparam::request::RoutedRequest;
/// use routeparam::response::{Response, ResponseSink};
///
/// let pipeline = Pipeline::new()
///     .stage(IntParamGuard::new("test_id"))
///     .stage(|_request: &RoutedRequest<'_, '_>, sink: &mut ResponseSink| {
///         // Only reached if `test_id` is a valid integer.
///         let _ = sink.write(Response::ok());
///         Processing::Continue
///     });
/// ```
#[derive(Debug, Clone)]
pub struct IntParamGuard {
    name: String,
    extractor: IntParamExtractor,
}

impl IntParamGuard {
    /// Guard the path parameter called `name`, using the default extractor configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_extractor(name, IntParamExtractor::default())
    }

    /// Guard the path parameter called `name`, rejecting requests via `extractor`.
    pub fn with_extractor(name: impl Into<String>, extractor: IntParamExtractor) -> Self {
        Self {
            name: name.into(),
            extractor,
        }
    }
}

impl Stage for IntParamGuard {
    fn process(&self, request: &RoutedRequest<'_, '_>, sink: &mut ResponseSink) -> Processing {
        match self.extractor.extract(&self.name, sink, request) {
            Ok(_) => Processing::Continue,
            Err(_) => Processing::Halt,
        }
    }
}
