//! Host-facing namer with one-time resolution.
//!
//! The first request resolves configuration and the delegate; every later
//! request reuses them. A failed resolution is kept as well, so a broken
//! project setup fails every request the same way until the process
//! restarts.

use std::sync::OnceLock;

use crate::error::NamerResult;
use crate::host::{Namer, NamingRequest};
use crate::pipeline::RewritePipeline;

/// Lazily resolved [`RewritePipeline`].
#[derive(Default)]
pub struct RewriteNamer {
    pipeline: OnceLock<NamerResult<RewritePipeline>>,
}

impl RewriteNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved pipeline, resolving on first use.
    ///
    /// Concurrent first calls block until one of them finishes resolving.
    pub fn pipeline(&self, request: &NamingRequest<'_>) -> NamerResult<&RewritePipeline> {
        self.pipeline
            .get_or_init(|| RewritePipeline::resolve(request.options, request.sink))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Whether resolution has run, successfully or not
    pub fn is_resolved(&self) -> bool {
        self.pipeline.get().is_some()
    }
}

impl Namer for RewriteNamer {
    fn name(&self, request: &NamingRequest<'_>) -> NamerResult<Option<String>> {
        self.pipeline(request)?.name(request)
    }
}
