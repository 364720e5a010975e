//! Schema-level validation of synthesized configs.
//!
//! No filesystem checks happen here; entry files are the bundler's problem.

use crate::error::{ConfigError, Result};
use crate::generate::BundleConfig;
use crate::pipeline::PluginStage;

/// Trait for pluggable config validation strategies.
pub trait ConfigValidator {
    fn validate(&self, config: &BundleConfig) -> Result<()>;
}

/// Structural validation of a synthesized [`BundleConfig`].
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundleConfig) -> Result<()> {
        if config.entry.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig("entry path is empty".into()));
        }

        if config.dest.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig("dest path is empty".into()));
        }

        if config.module_name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("module name is empty".into()));
        }

        for name in &config.external {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "external module names cannot be empty".into(),
                ));
            }
        }

        // The fixed pipeline prefix must be intact regardless of overrides.
        let prefix_ok = matches!(
            config.plugins.as_slice(),
            [
                PluginStage::Alias(_),
                PluginStage::Commonjs,
                PluginStage::NodeResolve(_),
                PluginStage::Transpile(_),
                PluginStage::ReplaceVersion(_),
                ..
            ]
        );
        if !prefix_ok {
            return Err(ConfigError::InvalidConfig(
                "plugin pipeline is missing its fixed stage prefix".into(),
            ));
        }

        Ok(())
    }
}

/// Convenience function for schema validation.
pub fn validate_config(config: &BundleConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_config;
    use crate::manifest::{BuildEnv, PackageManifest};
    use crate::paths::ProjectLayout;
    use crate::registry::BuildRegistry;
    use serde_json::json;

    fn synthesized() -> BundleConfig {
        let manifest = PackageManifest::from_value(json!({
            "name": "acme",
            "version": "1.0.0"
        }))
        .expect("manifest");
        let layout = ProjectLayout::resolve("/p");
        let registry = BuildRegistry::standard(&layout);
        generate_config(
            &manifest,
            &BuildEnv::default(),
            &layout,
            registry.get("core").expect("core target"),
        )
        .expect("config")
    }

    #[test]
    fn synthesized_configs_pass_validation() {
        assert!(validate_config(&synthesized()).is_ok());
    }

    #[test]
    fn empty_external_name_is_rejected() {
        let mut config = synthesized();
        config.external.insert("   ".to_string());
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[test]
    fn broken_pipeline_prefix_is_rejected() {
        let mut config = synthesized();
        config.plugins.remove(1); // drop the commonjs stage
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[test]
    fn empty_module_name_is_rejected() {
        let mut config = synthesized();
        config.module_name = String::new();
        assert!(validate_config(&config).is_err());
    }
}
