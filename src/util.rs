// refsweep/src/util.rs

use std::path::Path;

/// `path` relative to `root`, forward slashes, lossy on non-UTF-8 names.
/// Falls back to the full path when `path` is not under `root`.
pub fn normalize_rel(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

/// Comma-joined line numbers: `3, 7, 12`.
pub fn join_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
