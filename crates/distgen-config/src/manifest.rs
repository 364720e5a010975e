//! Package manifest interface and the process build environment.
//!
//! The manifest is read-only metadata: declared runtime dependencies and an
//! optional version string. `BuildEnv` captures the two process-level inputs
//! (target selector and version fallback) once, so nothing downstream touches
//! ambient state.

use std::env;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Declared package metadata, as found in `package.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// Runtime dependencies in declaration order.
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Create from a `serde_json::Value` (for programmatic use).
    ///
    /// # Example
    ///
    /// ```
    /// use distgen_config::PackageManifest;
    /// use serde_json::json;
    ///
    /// let manifest = PackageManifest::from_value(json!({
    ///     "name": "acme",
    ///     "version": "1.2.0",
    ///     "dependencies": { "left-pad": "1.0.0" }
    /// })).unwrap();
    /// assert_eq!(manifest.version.as_deref(), Some("1.2.0"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidManifest(e.to_string()))
    }

    /// Parse manifest content from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::InvalidManifest(e.to_string()))
    }

    /// Load a manifest file from disk. The only I/O in this crate; library
    /// callers may construct values directly instead.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading package manifest");
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Declared runtime dependency names, in declaration order.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }

    /// Resolve the version string used for the banner and version
    /// substitution: the manifest version, else the environment fallback.
    pub fn resolve_version(&self, env: &BuildEnv) -> Result<String> {
        self.version
            .as_deref()
            .filter(|v| !v.is_empty())
            .or(env.version.as_deref())
            .map(str::to_owned)
            .ok_or(ConfigError::MissingVersion)
    }
}

/// Process-level build inputs, captured once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnv {
    /// Target selector; presence switches the export surface into
    /// single-target mode.
    pub target: Option<String>,

    /// Version string used when the manifest declares none.
    pub version: Option<String>,
}

impl BuildEnv {
    pub fn new(target: Option<String>, version: Option<String>) -> Self {
        Self {
            target: target.filter(|t| !t.is_empty()),
            version: version.filter(|v| !v.is_empty()),
        }
    }

    /// Read `TARGET` and `VERSION` from the process environment.
    ///
    /// Call once at startup and pass the value around; synthesis itself never
    /// reads ambient state.
    pub fn from_process() -> Self {
        Self::new(env::var("TARGET").ok(), env::var("VERSION").ok())
    }
}
