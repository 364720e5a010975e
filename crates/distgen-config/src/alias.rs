//! Alias table construction for the bundler's module-resolution stage.

use std::path::PathBuf;

use indexmap::IndexMap;

/// Mapping from logical module name to filesystem path.
///
/// Insertion order is preserved so synthesized configs serialize
/// deterministically.
pub type AliasTable = IndexMap<String, PathBuf>;

/// File extensions the alias-resolution stage may append when resolving a
/// logical name. Passed through to the bundler verbatim.
pub const RESOLVE_EXTENSIONS: [&str; 4] = [".js", ".json", ".jsx", ".ts"];

/// Merge caller-supplied aliases on top of the base table.
///
/// Base entries come first; an extra entry sharing a key replaces the base
/// entry. Neither input is mutated.
///
/// # Example
///
/// ```
/// use distgen_config::{AliasTable, build_alias_table};
/// use std::path::PathBuf;
///
/// let mut base = AliasTable::new();
/// base.insert("core".into(), PathBuf::from("/src/core/index.js"));
///
/// let mut extras = AliasTable::new();
/// extras.insert("core".into(), PathBuf::from("/src/core/alt.js"));
///
/// let merged = build_alias_table(&base, &extras);
/// assert_eq!(merged["core"], PathBuf::from("/src/core/alt.js"));
/// ```
pub fn build_alias_table(base: &AliasTable, extras: &AliasTable) -> AliasTable {
    let mut table = base.clone();
    for (name, path) in extras {
        table.insert(name.clone(), path.clone());
    }
    table
}
