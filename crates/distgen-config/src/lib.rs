pub mod alias;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod paths;
pub mod pipeline;
pub mod registry;
pub mod surface;
pub mod validation;

// Re-export main types
pub use alias::{AliasTable, RESOLVE_EXTENSIONS, build_alias_table};
pub use error::{ConfigError, Result};
pub use generate::{BundleConfig, OutputFormat, TargetOverrides, generate_config};
pub use manifest::{BuildEnv, PackageManifest};
pub use paths::ProjectLayout;
pub use pipeline::{
    AliasOptions, CustomPlugin, PipelineBuilder, PluginStage, ReplaceOptions, ResolveOptions,
    TransformRule, TranspileOptions, TranspileOverrides,
};
pub use registry::{BuildRegistry, TargetSpec};
pub use surface::{BuildSession, ExportSurface};
pub use validation::{ConfigValidator, SchemaValidator, validate_config};
