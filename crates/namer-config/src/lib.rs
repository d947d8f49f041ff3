//! Layered configuration for the bundle name rewriter.
//!
//! Reads the `parcel-namer-rewrite` section of a project's `package.json`
//! and folds it, together with any selected profile sections, into an
//! immutable [`Config`]:
//! 1. Base section
//! 2. Default profiles (build mode)
//! 3. Profiles named by the environment
//!
//! Scalars set by later sections win; rewrite rules accumulate.

mod config;
mod error;
mod log;
mod resolver;
mod section;

pub use config::{
    Config, ConfigSummary, HashingMode, NamerRule, RuleSummary, SectionOrigin, DEFAULT_CHAIN,
    PROFILE_ENV_KEY, PROFILE_ENV_KEY_DEPRECATED,
};
pub use error::ConfigError;
pub use log::{LogLevel, LogLine, LogSink, MemorySink, TracingSink};
pub use resolver::{ConfigResolver, PACKAGE_JSON_SECTION};
