//! Bundle name rewriting
//!
//! Wraps a delegate namer: the delegate proposes a bundle name, the first
//! configured rule matching it rewrites the name, and a `{hash}` placeholder
//! in the replacement is filled with a content hash or dropped.

pub mod error;
pub mod hash;
pub mod host;
pub mod namer;
pub mod pipeline;
pub mod placeholder;
pub mod report;

pub use error::{NamerError, NamerResult};
pub use host::{Asset, BuildOptions, Bundle, Namer, NamingRequest, Package, PackageResolver, Target};
pub use namer::RewriteNamer;
pub use pipeline::RewritePipeline;

pub use namer_config::{
    Config, ConfigError, ConfigResolver, HashingMode, LogSink, MemorySink, NamerRule, TracingSink,
};
