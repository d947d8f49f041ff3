//! Shared fakes for the host interfaces and project fixtures.

#![allow(dead_code)]

use namer_rewrite::{
    Asset, BuildOptions, Bundle, Namer, NamerResult, NamingRequest, Package, PackageResolver,
    Target,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Package name the fixtures register their delegate under
pub const DELEGATE: &str = "@pkg/default";

/// Bundle with fixed id, target, hash reference and assets
pub struct FakeBundle {
    pub id: String,
    pub reference: Option<String>,
    pub target: Target,
    pub assets: Vec<Asset>,
}

impl FakeBundle {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            reference: None,
            target: Target::new("default"),
            assets: Vec::new(),
        }
    }

    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Target::new(target);
        self
    }

    pub fn with_files(mut self, paths: &[PathBuf]) -> Self {
        self.assets = paths
            .iter()
            .map(|p| Asset {
                file_path: Some(p.clone()),
            })
            .collect();
        self
    }
}

impl Bundle for FakeBundle {
    fn id(&self) -> &str {
        &self.id
    }
    fn hash_reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
    fn target(&self) -> &Target {
        &self.target
    }
    fn assets(&self) -> Vec<Asset> {
        self.assets.clone()
    }
}

/// Delegate that always proposes the same name and counts its calls
pub struct StaticNamer {
    name: Option<String>,
    calls: AtomicUsize,
}

impl StaticNamer {
    pub fn new(name: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            name: name.map(str::to_string),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Namer for StaticNamer {
    fn name(&self, _request: &NamingRequest<'_>) -> NamerResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.name.clone())
    }
}

/// Package manager backed by a fixed map, counting lookups
#[derive(Default)]
pub struct FakePackages {
    packages: BTreeMap<String, Package>,
    lookups: AtomicUsize,
}

impl FakePackages {
    pub fn with_namer(name: &str, namer: Arc<dyn Namer>) -> Self {
        let mut packages = BTreeMap::new();
        packages.insert(
            name.to_string(),
            Package {
                name: name.to_string(),
                namer: Some(namer),
            },
        );
        Self {
            packages,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_plain_package(name: &str) -> Self {
        let mut packages = BTreeMap::new();
        packages.insert(
            name.to_string(),
            Package {
                name: name.to_string(),
                namer: None,
            },
        );
        Self {
            packages,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl PackageResolver for FakePackages {
    fn load(&self, name: &str, _from: &Path) -> Option<Package> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.packages.get(name).cloned()
    }
}

/// Temporary project with a package.json holding `section`
pub fn project(section: serde_json::Value) -> TempDir {
    let dir = TempDir::new().unwrap();
    let manifest = serde_json::json!({
        "name": "fixture-app",
        "parcel-namer-rewrite": section,
    });
    fs::write(
        dir.path().join("package.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
    dir
}

/// Write an asset file into the project and return its path
pub fn asset(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

pub fn options(root: &Path, packages: Arc<dyn PackageResolver>) -> BuildOptions {
    BuildOptions {
        project_root: root.to_path_buf(),
        env: BTreeMap::new(),
        mode: "production".to_string(),
        packages,
    }
}
