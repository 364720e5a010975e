//! Command implementations.

use anyhow::{Context, Result};
use distgen_config::{BuildEnv, BuildSession, ExportSurface, PackageManifest, validate_config};

use crate::cli::{ConfigArgs, TargetsArgs};

/// Print synthesized configuration(s) as JSON for the bundler driver.
pub fn config_execute(args: ConfigArgs) -> Result<()> {
    let manifest_path = args
        .manifest
        .unwrap_or_else(|| args.root.join("package.json"));
    let manifest = PackageManifest::load(&manifest_path)
        .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;

    // --target takes precedence over the TARGET environment variable
    let mut env = BuildEnv::from_process();
    if args.target.is_some() {
        env.target = args.target;
    }

    let session = BuildSession::standard(manifest, env, &args.root);

    let output = match ExportSurface::from_session(session)? {
        ExportSurface::Single(config) => {
            validate_config(&config)?;
            serde_json::to_value(&config)?
        }
        ExportSurface::Registry(session) => {
            let configs = session.get_all_builds()?;
            for config in &configs {
                validate_config(config)?;
            }
            serde_json::to_value(&configs)?
        }
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}

/// List registered build target names, one per line.
pub fn targets_execute(args: TargetsArgs) -> Result<()> {
    let layout = distgen_config::ProjectLayout::resolve(&args.root);
    let registry = distgen_config::BuildRegistry::standard(&layout);

    for name in registry.names() {
        println!("{name}");
    }

    Ok(())
}
