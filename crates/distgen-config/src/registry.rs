//! Static build-target registry.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::generate::TargetOverrides;
use crate::paths::ProjectLayout;

/// One registered distributable artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub entry: PathBuf,
    pub dest: PathBuf,

    /// Overrides baked into the registration, applied on every synthesis of
    /// this target.
    #[serde(default)]
    pub overrides: TargetOverrides,
}

impl TargetSpec {
    pub fn new(entry: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            dest: dest.into(),
            overrides: TargetOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: TargetOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Read-only mapping from target name to [`TargetSpec`], iterated in
/// definition order.
#[derive(Debug, Clone, Default)]
pub struct BuildRegistry {
    targets: IndexMap<String, TargetSpec>,
}

impl BuildRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard artifact set: `core` and `builder`.
    pub fn standard(layout: &ProjectLayout) -> Self {
        Self::new()
            .with_target(
                "core",
                TargetSpec::new(
                    layout.src_dir.join("core/index.js"),
                    layout.dist_dir.join("core.js"),
                ),
            )
            .with_target(
                "builder",
                TargetSpec::new(
                    layout.src_dir.join("builder/index.js"),
                    layout.dist_dir.join("builder.js"),
                ),
            )
    }

    pub fn with_target(mut self, name: impl Into<String>, spec: TargetSpec) -> Self {
        self.targets.insert(name.into(), spec);
        self
    }

    /// Look up a registered target.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTarget`] for names absent from the
    /// registry; an unknown name never flows into synthesis.
    pub fn get(&self, name: &str) -> Result<&TargetSpec> {
        self.targets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownTarget {
                name: name.to_string(),
                known: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Registered target names, in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Registered targets, in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TargetSpec)> {
        self.targets.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn standard_registry_defines_core_then_builder() {
        let layout = ProjectLayout::resolve("/p");
        let registry = BuildRegistry::standard(&layout);

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["core", "builder"]);

        let core = registry.get("core").unwrap();
        assert_eq!(core.entry, PathBuf::from("/p/src/core/index.js"));
        assert_eq!(core.dest, PathBuf::from("/p/dist/core.js"));
    }

    #[test]
    fn unknown_target_is_an_explicit_error() {
        let layout = ProjectLayout::resolve("/p");
        let registry = BuildRegistry::standard(&layout);

        let err = registry.get("nonexistent").unwrap_err();
        match err {
            ConfigError::UnknownTarget { name, known } => {
                assert_eq!(name, "nonexistent");
                assert_eq!(known, "core, builder");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn registration_order_is_iteration_order() {
        let registry = BuildRegistry::new()
            .with_target("z", TargetSpec::new("/z.js", "/out/z.js"))
            .with_target("a", TargetSpec::new("/a.js", "/out/a.js"));

        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
