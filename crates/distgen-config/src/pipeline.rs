//! Plugin pipeline stages.
//!
//! Each stage the bundler runs is a tagged variant, so pipeline order and
//! stage identity are statically checkable and serialize to the plugin list
//! the bundler driver consumes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::alias::AliasTable;

/// One stage of the bundler's plugin pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum PluginStage {
    /// Logical-name alias resolution.
    Alias(AliasOptions),
    /// Converts CommonJS module shapes into the bundler's internal shape.
    Commonjs,
    /// Dependency resolution against installed packages.
    NodeResolve(ResolveOptions),
    /// Syntax transpilation.
    Transpile(TranspileOptions),
    /// Replaces the version placeholder token with the resolved version.
    ReplaceVersion(ReplaceOptions),
    /// Caller-supplied plugin, appended after the fixed pipeline.
    Custom(CustomPlugin),
    /// Replaces the runtime environment-check expression with a literal.
    ReplaceEnv(ReplaceOptions),
}

/// Options for the alias-resolution stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasOptions {
    /// Logical name → path mapping, base table merged with caller extras.
    pub entries: AliasTable,

    /// Extensions tried when resolving an alias target.
    pub resolve: Vec<String>,
}

/// Options for the dependency-resolution stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    /// Prefer ECMAScript-module-shaped dependency entry points when a package
    /// ships both.
    pub prefer_esm: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { prefer_esm: true }
    }
}

/// One named syntax-transform rule, with optional rule-specific options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRule {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl TransformRule {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
        }
    }

    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options: Some(options),
        }
    }
}

/// Options for the transpilation stage.
///
/// The default value is the fixed baseline; caller overrides are merged on
/// top per field via [`TranspileOverrides::merged_into`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranspileOptions {
    /// Sources skipped by the transpiler (third-party dependency code).
    pub exclude: String,

    /// Inject shared runtime helpers instead of duplicating them per module.
    pub runtime_helpers: bool,

    pub transforms: Vec<TransformRule>,

    pub presets: Vec<String>,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            exclude: "node_modules/**".to_string(),
            runtime_helpers: true,
            transforms: vec![
                TransformRule::with_options(
                    "transform-runtime",
                    serde_json::json!({ "helpers": false, "polyfill": false }),
                ),
                TransformRule::bare("transform-async-to-generator"),
                TransformRule::bare("array-includes"),
            ],
            presets: vec!["babel-preset-es2015-rollup".to_string()],
        }
    }
}

/// Caller overrides for the transpilation stage.
///
/// Merge order is baseline first, then each present field replaces the
/// baseline field wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranspileOverrides {
    #[serde(default)]
    pub exclude: Option<String>,

    #[serde(default)]
    pub runtime_helpers: Option<bool>,

    #[serde(default)]
    pub transforms: Option<Vec<TransformRule>>,

    #[serde(default)]
    pub presets: Option<Vec<String>>,
}

impl TranspileOverrides {
    /// Apply these overrides on top of `base`, field by field.
    pub fn merged_into(&self, base: TranspileOptions) -> TranspileOptions {
        TranspileOptions {
            exclude: self.exclude.clone().unwrap_or(base.exclude),
            runtime_helpers: self.runtime_helpers.unwrap_or(base.runtime_helpers),
            transforms: self.transforms.clone().unwrap_or(base.transforms),
            presets: self.presets.clone().unwrap_or(base.presets),
        }
    }
}

/// Options for the version- and environment-substitution stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceOptions {
    /// Token or expression replaced in module source.
    pub token: String,

    /// Literal replacement text.
    pub value: String,
}

/// A caller-supplied plugin appended after the fixed pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPlugin {
    pub name: String,

    /// Plugin-specific configuration, forwarded opaquely.
    #[serde(default)]
    pub config: Value,
}

impl CustomPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: Value::Null,
        }
    }

    pub fn with_config(name: impl Into<String>, config: Value) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

/// Ordered pipeline assembly.
///
/// Stages are appended in call order; the synthesizer calls the named methods
/// in the contractual sequence and this type keeps that sequence explicit.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    stages: Vec<PluginStage>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias(mut self, options: AliasOptions) -> Self {
        self.stages.push(PluginStage::Alias(options));
        self
    }

    pub fn commonjs(mut self) -> Self {
        self.stages.push(PluginStage::Commonjs);
        self
    }

    pub fn node_resolve(mut self, options: ResolveOptions) -> Self {
        self.stages.push(PluginStage::NodeResolve(options));
        self
    }

    pub fn transpile(mut self, options: TranspileOptions) -> Self {
        self.stages.push(PluginStage::Transpile(options));
        self
    }

    pub fn replace_version(mut self, options: ReplaceOptions) -> Self {
        self.stages.push(PluginStage::ReplaceVersion(options));
        self
    }

    pub fn custom(mut self, plugins: impl IntoIterator<Item = PluginStage>) -> Self {
        self.stages.extend(plugins);
        self
    }

    pub fn replace_env(mut self, options: ReplaceOptions) -> Self {
        self.stages.push(PluginStage::ReplaceEnv(options));
        self
    }

    pub fn build(self) -> Vec<PluginStage> {
        self.stages
    }
}
