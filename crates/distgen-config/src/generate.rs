//! Config synthesis.
//!
//! `generate_config` merges the fixed baseline, the package manifest, and the
//! target's overrides into one complete [`BundleConfig`]. Every call
//! allocates a fresh output; inputs are never mutated.

use std::path::PathBuf;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::alias::{AliasTable, RESOLVE_EXTENSIONS, build_alias_table};
use crate::error::Result;
use crate::manifest::{BuildEnv, PackageManifest};
use crate::paths::ProjectLayout;
use crate::pipeline::{
    AliasOptions, PipelineBuilder, PluginStage, ReplaceOptions, ResolveOptions, TranspileOptions,
    TranspileOverrides,
};
use crate::registry::TargetSpec;

/// Runtime identifiers that are always externalized.
pub const CORE_EXTERNALS: [&str; 2] = ["fs", "path"];

/// Placeholder token replaced with the resolved version string.
pub const VERSION_TOKEN: &str = "__VERSION__";

/// Runtime environment-check expression replaced when a target environment
/// is set.
pub const ENV_EXPRESSION: &str = "process.env.NODE_ENV";

const DEFAULT_MODULE_NAME: &str = "Bundle";

/// Bundle output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CommonJS (default)
    #[default]
    Cjs,
    /// ECMAScript modules
    Esm,
    /// Universal module definition
    Umd,
    /// Immediately-invoked function expression
    Iife,
}

/// Caller-supplied customizations for one synthesis.
///
/// Every field is optional; an absent field leaves the baseline untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetOverrides {
    /// Extra names added to the externalized-dependency set.
    #[serde(default)]
    pub external: Vec<String>,

    #[serde(default)]
    pub format: Option<OutputFormat>,

    #[serde(default)]
    pub banner: Option<String>,

    #[serde(default)]
    pub module_name: Option<String>,

    /// Merged into the base alias table; these entries win on key collision.
    #[serde(default)]
    pub extra_aliases: AliasTable,

    /// Merged per field into the baseline transpiler options.
    #[serde(default)]
    pub transpile: TranspileOverrides,

    /// Appended after the fixed pipeline, in the order supplied.
    #[serde(default)]
    pub extra_plugins: Vec<PluginStage>,

    /// When set, appends the environment-substitution stage as the final
    /// pipeline element.
    #[serde(default)]
    pub env: Option<String>,
}

/// A complete bundler configuration for one output file.
///
/// Plain serializable data with the field names the bundler driver expects;
/// no references back into the synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfig {
    pub entry: PathBuf,
    pub dest: PathBuf,

    /// Externalized module names: core externals ∪ manifest dependencies ∪
    /// override externals, deduplicated.
    pub external: IndexSet<String>,

    pub format: OutputFormat,
    pub banner: String,
    pub module_name: String,

    /// Always true.
    pub source_map: bool,

    pub plugins: Vec<PluginStage>,
}

/// Synthesize the configuration for one target.
///
/// Merge order is contractual: externals, then format/banner/module name,
/// then the pipeline — alias, commonjs, node-resolve, transpile,
/// version-substitution, any extra plugins, and (only when
/// `overrides.env` is set) the environment-substitution stage last.
///
/// # Errors
///
/// [`ConfigError::MissingVersion`](crate::ConfigError::MissingVersion) when
/// neither the manifest nor the environment supplies a version string.
pub fn generate_config(
    manifest: &PackageManifest,
    env: &BuildEnv,
    layout: &ProjectLayout,
    spec: &TargetSpec,
) -> Result<BundleConfig> {
    let overrides = &spec.overrides;
    let version = manifest.resolve_version(env)?;

    let mut external: IndexSet<String> =
        CORE_EXTERNALS.iter().map(|name| name.to_string()).collect();
    external.extend(manifest.dependency_names().map(str::to_owned));
    external.extend(overrides.external.iter().cloned());

    let format = overrides.format.unwrap_or_default();
    let banner = overrides
        .banner
        .clone()
        .unwrap_or_else(|| default_banner(manifest, &version));
    let module_name = overrides
        .module_name
        .clone()
        .unwrap_or_else(|| default_module_name(manifest));

    let aliases = build_alias_table(&layout.logical_roots(), &overrides.extra_aliases);

    let mut pipeline = PipelineBuilder::new()
        .alias(AliasOptions {
            entries: aliases,
            resolve: RESOLVE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        })
        .commonjs()
        .node_resolve(ResolveOptions::default())
        .transpile(overrides.transpile.merged_into(TranspileOptions::default()))
        .replace_version(ReplaceOptions {
            token: VERSION_TOKEN.to_string(),
            value: version,
        })
        .custom(overrides.extra_plugins.iter().cloned());

    if let Some(env_name) = &overrides.env {
        pipeline = pipeline.replace_env(ReplaceOptions {
            token: ENV_EXPRESSION.to_string(),
            value: Value::String(env_name.clone()).to_string(),
        });
    }

    let config = BundleConfig {
        entry: spec.entry.clone(),
        dest: spec.dest.clone(),
        external,
        format,
        banner,
        module_name,
        source_map: true,
        plugins: pipeline.build(),
    };

    tracing::debug!(
        entry = %config.entry.display(),
        dest = %config.dest.display(),
        stages = config.plugins.len(),
        "synthesized bundle config"
    );

    Ok(config)
}

fn default_banner(manifest: &PackageManifest, version: &str) -> String {
    let product = manifest.name.as_deref().unwrap_or("library");
    format!("/*!\n * {product} v{version}\n * Released under the MIT License.\n */")
}

fn default_module_name(manifest: &PackageManifest) -> String {
    let Some(name) = manifest.name.as_deref().filter(|n| !n.is_empty()) else {
        return DEFAULT_MODULE_NAME.to_string();
    };

    // "@scope/pkg" exposes a global named after the package, not the scope
    let base = name.rsplit('/').next().unwrap_or(name);
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => DEFAULT_MODULE_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest() -> PackageManifest {
        PackageManifest::from_value(json!({
            "name": "acme",
            "version": "2.3.0",
            "dependencies": { "left-pad": "1.0.0" }
        }))
        .expect("manifest")
    }

    fn spec(layout: &ProjectLayout) -> TargetSpec {
        TargetSpec::new(
            layout.src_dir.join("core/index.js"),
            layout.dist_dir.join("core.js"),
        )
    }

    #[test]
    fn banner_embeds_version() {
        let layout = ProjectLayout::resolve("/p");
        let config =
            generate_config(&manifest(), &BuildEnv::default(), &layout, &spec(&layout)).unwrap();
        assert!(config.banner.contains("2.3.0"));
        assert!(config.banner.contains("acme"));
    }

    #[test]
    fn override_banner_wins() {
        let layout = ProjectLayout::resolve("/p");
        let spec = spec(&layout).with_overrides(TargetOverrides {
            banner: Some("/* custom */".into()),
            ..Default::default()
        });
        let config = generate_config(&manifest(), &BuildEnv::default(), &layout, &spec).unwrap();
        assert_eq!(config.banner, "/* custom */");
    }

    #[test]
    fn module_name_derives_from_manifest_name() {
        let layout = ProjectLayout::resolve("/p");
        let config =
            generate_config(&manifest(), &BuildEnv::default(), &layout, &spec(&layout)).unwrap();
        assert_eq!(config.module_name, "Acme");
    }

    #[test]
    fn scoped_package_names_drop_the_scope() {
        let manifest = PackageManifest::from_value(json!({
            "name": "@acme/widgets",
            "version": "1.0.0"
        }))
        .unwrap();
        let layout = ProjectLayout::resolve("/p");
        let config =
            generate_config(&manifest, &BuildEnv::default(), &layout, &spec(&layout)).unwrap();
        assert_eq!(config.module_name, "Widgets");
    }

    #[test]
    fn missing_version_fails_before_any_config_is_produced() {
        let manifest = PackageManifest::from_value(json!({ "name": "acme" })).unwrap();
        let layout = ProjectLayout::resolve("/p");
        let err =
            generate_config(&manifest, &BuildEnv::default(), &layout, &spec(&layout)).unwrap_err();
        assert!(matches!(err, crate::ConfigError::MissingVersion));
    }

    #[test]
    fn env_fallback_feeds_banner_and_version_stage() {
        let manifest = PackageManifest::from_value(json!({ "name": "acme" })).unwrap();
        let env = BuildEnv::new(None, Some("7.7.7".into()));
        let layout = ProjectLayout::resolve("/p");
        let config = generate_config(&manifest, &env, &layout, &spec(&layout)).unwrap();

        assert!(config.banner.contains("7.7.7"));
        let Some(PluginStage::ReplaceVersion(options)) = config.plugins.get(4) else {
            panic!("expected version stage at index 4");
        };
        assert_eq!(options.value, "7.7.7");
    }

    #[test]
    fn serialized_shape_uses_bundler_field_names() {
        let layout = ProjectLayout::resolve("/p");
        let config =
            generate_config(&manifest(), &BuildEnv::default(), &layout, &spec(&layout)).unwrap();
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["format"], json!("cjs"));
        assert_eq!(value["sourceMap"], json!(true));
        assert!(value["moduleName"].is_string());
        assert!(value["plugins"].is_array());
    }
}
