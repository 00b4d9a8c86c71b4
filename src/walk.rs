// refsweep/src/walk.rs

use std::{
    io::ErrorKind,
    path::{
        Component,
        Path,
        PathBuf
    }
};
use tracing::{
    debug,
    warn
};
use walkdir::{
    DirEntry,
    WalkDir
};
use crate::config::SweepConfig;

/// Lazily yield candidate files under `root`.
///
/// - Excluded directory names prune their whole subtree; a root that is itself
///   excluded, or sits under an excluded directory, yields nothing
/// - Only regular files; symlinks are neither followed nor yielded
/// - Extension must be on the allow-list
/// - File-name order within each directory, so output is stable run to run
pub fn candidate_files<'a>(root: &Path, config: &'a SweepConfig) -> impl Iterator<Item = PathBuf> + 'a {
    let walker = (!root_is_excluded(root, config)).then(|| {
        WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| !is_excluded_dir(e, config))
    });

    walker
        .into_iter()
        .flatten()
        .filter_map(|res| match res {
            Ok(e) => Some(e),
            Err(err) if err.io_error().is_some_and(|io| io.kind() == ErrorKind::PermissionDenied) => {
                debug!(error = %err, "skipping unreadable directory");
                None
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(move |e| config.allows_extension(e.path()))
        .map(DirEntry::into_path)
}

/// True when the root or any of its ancestors carries an excluded name.
fn root_is_excluded(root: &Path, config: &SweepConfig) -> bool {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    root.components().any(|c| match c {
        Component::Normal(name) => name.to_str().is_some_and(|n| config.is_excluded_dir(n)),
        _ => false,
    })
}

fn is_excluded_dir(entry: &DirEntry, config: &SweepConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_excluded_dir(name))
}
