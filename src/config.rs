// refsweep/src/config.rs
//! Immutable sweep configuration: pattern + exclusion set + extension allow-list.
//!
//! The built-in run uses the constants below; tests build their own config so
//! each one can point at its own temp root.

use std::{
    collections::HashSet,
    path::Path
};
use crate::pattern::Pattern;

pub const DEFAULT_TARGET: &str = "3v1";
pub const DEFAULT_REPLACEMENT: &str = "3v2";

/// Directory names whose whole subtree is skipped.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    ".pytest_cache",
    "node_modules",
    ".venv",
    "venv",
    "build",
    "dist",
    ".uv",
];

/// Extensions (without the dot) eligible for scanning. `""` = no extension.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "md", "txt", "py", "vhd", "vhdl", "sh", "bash",
    "json", "yaml", "yml", "toml", "cfg", "ini",
    "rst", "tex", "html", "xml", "csv",
    // README, LICENSE, Makefile, ...
    "",
];

#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub pattern: Pattern,
    excluded_dirs: HashSet<String>,
    extensions: HashSet<String>,
}

impl SweepConfig {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            excluded_dirs: to_set(EXCLUDED_DIRS),
            extensions: to_set(TEXT_EXTENSIONS),
        }
    }

    pub fn with_excluded_dirs(mut self, dirs: &[&str]) -> Self {
        self.excluded_dirs = to_set(dirs);
        self
    }

    pub fn with_extensions(mut self, exts: &[&str]) -> Self {
        self.extensions = to_set(exts);
        self
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    /// Extension check is case-sensitive; `Makefile` and `.bashrc` count as extension-less.
    pub fn allows_extension(&self, path: &Path) -> bool {
        match path.extension() {
            None => self.extensions.contains(""),
            Some(ext) => ext.to_str().is_some_and(|e| self.extensions.contains(e)),
        }
    }
}

fn to_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SweepConfig {
        SweepConfig::new(Pattern::new("foo1", "bar2").unwrap())
    }

    #[test]
    fn default_allow_list() {
        let c = cfg();
        assert!(c.allows_extension(Path::new("docs/a.md")));
        assert!(c.allows_extension(Path::new("README")));
        assert!(c.allows_extension(Path::new(".bashrc")));
        assert!(!c.allows_extension(Path::new("src/main.rs")));
        assert!(!c.allows_extension(Path::new("logo.PNG")));
        // case-sensitive
        assert!(!c.allows_extension(Path::new("NOTES.MD")));
    }

    #[test]
    fn default_exclusions() {
        let c = cfg();
        assert!(c.is_excluded_dir(".git"));
        assert!(c.is_excluded_dir("node_modules"));
        assert!(!c.is_excluded_dir("src"));
    }

    #[test]
    fn overrides_replace_sets() {
        let c = cfg().with_excluded_dirs(&["vendor"]).with_extensions(&["rs"]);
        assert!(c.is_excluded_dir("vendor"));
        assert!(!c.is_excluded_dir(".git"));
        assert!(c.allows_extension(Path::new("lib.rs")));
        assert!(!c.allows_extension(Path::new("README")));
    }
}
