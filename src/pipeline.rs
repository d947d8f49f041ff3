//! Rewrite pipeline
//!
//! Runs one naming request end to end:
//! - Skip-listed targets go straight to the delegate
//! - The delegate proposes a name (or declines)
//! - The first matching rule rewrites it
//! - The `{hash}` placeholder is filled or dropped

use std::sync::Arc;

use namer_config::{Config, ConfigResolver, HashingMode, LogSink};

use crate::error::{NamerError, NamerResult};
use crate::hash::bundle_hash;
use crate::host::{BuildOptions, Bundle, Namer, NamingRequest};
use crate::placeholder::resolve_hash_placeholder;

/// A resolved configuration paired with its delegate namer.
#[derive(Clone)]
pub struct RewritePipeline {
    config: Arc<Config>,
    delegate: Arc<dyn Namer>,
}

impl RewritePipeline {
    pub fn new(config: Arc<Config>, delegate: Arc<dyn Namer>) -> Self {
        Self { config, delegate }
    }

    /// Resolve configuration for the project and locate the delegate named
    /// by `chain`. The build mode is the default profile.
    pub fn resolve(options: &BuildOptions, sink: &dyn LogSink) -> NamerResult<Self> {
        let default_profiles = [options.mode.clone()];
        let config = ConfigResolver::new(&options.env, &default_profiles, sink)
            .resolve(&options.project_root)?;

        let package = options
            .packages
            .load(&config.chain, &options.project_root)
            .ok_or_else(|| NamerError::DelegateNotFound {
                chain: config.chain.clone(),
            })?;
        let delegate = package.namer.ok_or_else(|| NamerError::NotANamer {
            chain: config.chain.clone(),
        })?;

        tracing::debug!(
            chain = %config.chain,
            rules = config.rules.len(),
            "delegate namer resolved"
        );
        Ok(Self::new(Arc::new(config), delegate))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Name a bundle.
    pub fn name(&self, request: &NamingRequest<'_>) -> NamerResult<Option<String>> {
        if self.config.skips_target(&request.bundle.target().name) {
            return self.delegate.name(request);
        }

        let Some(candidate) = self.delegate.name(request)? else {
            return Ok(None);
        };

        if self.config.disable {
            return Ok(Some(candidate));
        }

        self.rewrite(request.bundle, &candidate, request.sink).map(Some)
    }

    /// Rewrite a delegate-proposed name.
    ///
    /// Rules are matched against `candidate` as proposed, while substitution
    /// runs on the name with the host hash reference segment removed.
    pub fn rewrite(
        &self,
        bundle: &dyn Bundle,
        candidate: &str,
        sink: &dyn LogSink,
    ) -> NamerResult<String> {
        let never_hashing = self.config.hashing == HashingMode::Never;
        let stripped = strip_hash_reference(candidate, bundle.hash_reference());

        let Some(rule) = self.config.select_rule(candidate) else {
            return Ok(if never_hashing {
                stripped
            } else {
                candidate.to_string()
            });
        };

        let hash = bundle_hash(&self.config, bundle)?;
        let rewritten = resolve_hash_placeholder(&rule.apply(&stripped), &hash);

        if !self.config.silent {
            sink.info(&format!("Rewrite {candidate} -> {rewritten}"));
        }

        Ok(rewritten)
    }
}

/// Remove the first `.`-delimited segment equal to `reference` from `name`,
/// together with the `.` in front of it. A leading segment is never removed.
pub fn strip_hash_reference(name: &str, reference: Option<&str>) -> String {
    let Some(reference) = reference.filter(|r| !r.is_empty()) else {
        return name.to_string();
    };

    let mut segments: Vec<&str> = name.split('.').collect();
    match segments.iter().skip(1).position(|s| *s == reference) {
        Some(index) => {
            segments.remove(index + 1);
            segments.join(".")
        }
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hash_reference() {
        assert_eq!(strip_hash_reference("main.abc123.js", Some("abc123")), "main.js");
        assert_eq!(strip_hash_reference("main.js", Some("abc123")), "main.js");
        assert_eq!(strip_hash_reference("main.abc123.js", None), "main.abc123.js");
        assert_eq!(strip_hash_reference("main.xabc123.js", Some("abc123")), "main.xabc123.js");
        assert_eq!(strip_hash_reference("abc123.js", Some("abc123")), "abc123.js");
        assert_eq!(strip_hash_reference("abc123.abc123.js", Some("abc123")), "abc123.js");
    }

    #[test]
    fn test_strip_only_first_segment() {
        assert_eq!(strip_hash_reference("a.h.h.js", Some("h")), "a.h.js");
    }

    #[test]
    fn test_strip_ignores_empty_reference() {
        assert_eq!(strip_hash_reference("main..js", Some("")), "main..js");
    }
}
