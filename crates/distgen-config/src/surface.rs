//! Export surface over the build registry.
//!
//! A [`BuildSession`] bundles the immutable inputs one synthesis needs; the
//! [`ExportSurface`] decides once, from the captured selector, whether the
//! process exposes a single configuration or the registry accessors.

use crate::error::Result;
use crate::generate::{BundleConfig, generate_config};
use crate::manifest::{BuildEnv, PackageManifest};
use crate::paths::ProjectLayout;
use crate::registry::BuildRegistry;

/// Immutable inputs shared by every synthesis in a process.
#[derive(Debug, Clone)]
pub struct BuildSession {
    manifest: PackageManifest,
    env: BuildEnv,
    layout: ProjectLayout,
    registry: BuildRegistry,
}

impl BuildSession {
    pub fn new(
        manifest: PackageManifest,
        env: BuildEnv,
        layout: ProjectLayout,
        registry: BuildRegistry,
    ) -> Self {
        Self {
            manifest,
            env,
            layout,
            registry,
        }
    }

    /// Session over the standard registry for a project root.
    pub fn standard(
        manifest: PackageManifest,
        env: BuildEnv,
        root: impl AsRef<std::path::Path>,
    ) -> Self {
        let layout = ProjectLayout::resolve(root);
        let registry = BuildRegistry::standard(&layout);
        Self::new(manifest, env, layout, registry)
    }

    pub fn registry(&self) -> &BuildRegistry {
        &self.registry
    }

    /// Synthesize the configuration for one registered target.
    ///
    /// # Errors
    ///
    /// `UnknownTarget` for unregistered names; `MissingVersion` when no
    /// version string can be resolved.
    pub fn get_build(&self, name: &str) -> Result<BundleConfig> {
        tracing::debug!(target = name, "resolving build target");
        let spec = self.registry.get(name)?;
        generate_config(&self.manifest, &self.env, &self.layout, spec)
    }

    /// Synthesize every registered target, in registry definition order.
    pub fn get_all_builds(&self) -> Result<Vec<BundleConfig>> {
        self.registry
            .iter()
            .map(|(_, spec)| generate_config(&self.manifest, &self.env, &self.layout, spec))
            .collect()
    }
}

/// The process-level export mode, decided once at construction.
#[derive(Debug, Clone)]
pub enum ExportSurface {
    /// Selector present: exactly one synthesized configuration.
    Single(BundleConfig),
    /// Selector absent: accessors over the whole registry.
    Registry(BuildSession),
}

impl ExportSurface {
    /// Decide the export mode from the session's captured selector.
    ///
    /// The decision is one-way; the selector is never re-read.
    pub fn from_session(session: BuildSession) -> Result<Self> {
        match session.env.target.clone() {
            Some(name) => Ok(Self::Single(session.get_build(&name)?)),
            None => Ok(Self::Registry(session)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(target: Option<&str>) -> BuildSession {
        let manifest = PackageManifest::from_value(json!({
            "name": "acme",
            "version": "2.3.0",
            "dependencies": { "left-pad": "1.0.0" }
        }))
        .expect("manifest");
        let env = BuildEnv::new(target.map(str::to_owned), None);
        BuildSession::standard(manifest, env, "/p")
    }

    #[test]
    fn selector_present_yields_single_mode() {
        let surface = ExportSurface::from_session(session(Some("core"))).unwrap();
        match surface {
            ExportSurface::Single(config) => {
                assert_eq!(config.dest, std::path::PathBuf::from("/p/dist/core.js"));
            }
            ExportSurface::Registry(_) => panic!("expected single-target mode"),
        }
    }

    #[test]
    fn selector_absent_yields_registry_mode() {
        let surface = ExportSurface::from_session(session(None)).unwrap();
        assert!(matches!(surface, ExportSurface::Registry(_)));
    }

    #[test]
    fn unknown_selector_fails_at_construction() {
        let err = ExportSurface::from_session(session(Some("nope"))).unwrap_err();
        assert!(matches!(err, crate::ConfigError::UnknownTarget { .. }));
    }
}
