//! Interfaces the host build system provides.
//!
//! The rewriter never owns bundles, delegate namers or package lookup; it
//! sees them through these traits.

use namer_config::LogSink;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::NamerResult;

/// Build target a bundle is produced for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
}

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An asset reachable from a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Source file backing the asset, if any
    pub file_path: Option<PathBuf>,
}

/// A bundle being named.
pub trait Bundle: Send + Sync {
    fn id(&self) -> &str;

    /// Content hash reference assigned by the host, if any
    fn hash_reference(&self) -> Option<&str>;

    fn target(&self) -> &Target;

    /// Every asset reachable from the bundle, in a stable traversal order.
    fn assets(&self) -> Vec<Asset>;
}

/// A naming strategy: maps a request to a file name, or `None` to decline.
pub trait Namer: Send + Sync {
    fn name(&self, request: &NamingRequest<'_>) -> NamerResult<Option<String>>;
}

/// A package located by the host's package manager
#[derive(Clone)]
pub struct Package {
    pub name: String,
    /// Naming capability exposed by the package, if it is a namer
    pub namer: Option<Arc<dyn Namer>>,
}

impl fmt::Debug for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Package")
            .field("name", &self.name)
            .field("namer", &self.namer.is_some())
            .finish()
    }
}

/// Locates packages by name relative to a project root.
pub trait PackageResolver: Send + Sync {
    fn load(&self, name: &str, from: &std::path::Path) -> Option<Package>;
}

/// Ambient build options
#[derive(Clone)]
pub struct BuildOptions {
    pub project_root: PathBuf,
    pub env: BTreeMap<String, String>,
    /// Build mode, used as the default profile
    pub mode: String,
    pub packages: Arc<dyn PackageResolver>,
}

/// One naming request from the host
pub struct NamingRequest<'a> {
    pub bundle: &'a dyn Bundle,
    pub options: &'a BuildOptions,
    pub sink: &'a dyn LogSink,
}
