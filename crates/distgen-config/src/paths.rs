//! Project path layout.
//!
//! Pure path computation for the fixed set of logical source roots. No I/O
//! and no existence checks happen here; the bundler resolves the paths later.

use std::path::{Path, PathBuf};

use crate::alias::AliasTable;

/// Resolved source and output roots for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub src_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl ProjectLayout {
    /// Compute the layout for a project root.
    ///
    /// # Example
    ///
    /// ```
    /// use distgen_config::ProjectLayout;
    /// use std::path::PathBuf;
    ///
    /// let layout = ProjectLayout::resolve("/project");
    /// assert_eq!(layout.src_dir, PathBuf::from("/project/src"));
    /// assert_eq!(layout.dist_dir, PathBuf::from("/project/dist"));
    /// ```
    pub fn resolve(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let src_dir = root.join("src");
        let dist_dir = root.join("dist");
        Self {
            root,
            src_dir,
            dist_dir,
        }
    }

    /// The fixed logical source roots, keyed by logical module name.
    ///
    /// These seed the alias table consumed by the bundler's module-resolution
    /// stage; caller-supplied extras are merged on top by
    /// [`build_alias_table`](crate::alias::build_alias_table).
    pub fn logical_roots(&self) -> AliasTable {
        let mut roots = AliasTable::new();
        roots.insert("core".to_string(), self.src_dir.join("core/index.js"));
        roots.insert("builder".to_string(), self.src_dir.join("builder/index.js"));
        roots.insert("common".to_string(), self.src_dir.join("common/index.js"));
        roots.insert("utils".to_string(), self.src_dir.join("common/utils.js"));
        roots.insert("app".to_string(), self.src_dir.join("app"));
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn resolve_computes_src_and_dist() {
        let layout = ProjectLayout::resolve("/work/lib");
        assert_eq!(layout.root, PathBuf::from("/work/lib"));
        assert_eq!(layout.src_dir, PathBuf::from("/work/lib/src"));
        assert_eq!(layout.dist_dir, PathBuf::from("/work/lib/dist"));
    }

    #[test]
    fn logical_roots_are_fixed_and_ordered() {
        let layout = ProjectLayout::resolve("/p");
        let roots = layout.logical_roots();
        let names: Vec<&str> = roots.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["core", "builder", "common", "utils", "app"]);
        assert_eq!(roots["utils"], PathBuf::from("/p/src/common/utils.js"));
        assert_eq!(roots["app"], PathBuf::from("/p/src/app"));
    }

    #[test]
    fn resolve_is_pure() {
        // same input, same output; no filesystem involvement
        assert_eq!(
            ProjectLayout::resolve("/nonexistent"),
            ProjectLayout::resolve("/nonexistent")
        );
    }
}
