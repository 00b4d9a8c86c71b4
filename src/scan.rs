// refsweep/src/scan.rs

use std::{
    fs,
    io::ErrorKind,
    path::{
        Path,
        PathBuf
    },
};
use memchr::memchr2;
use tracing::{
    debug,
    warn
};
use crate::{
    config::SweepConfig,
    pattern::Pattern,
    walk
};

/// A file and the 1-based line numbers where the target occurs (ascending).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub path: PathBuf,
    pub lines: Vec<usize>,
}

/// Walk `root` and collect every file with at least one matching line.
/// Read-only; safe to call again after a rewrite.
pub fn find_references(root: &Path, config: &SweepConfig) -> Vec<MatchRecord> {
    walk::candidate_files(root, config)
        .filter_map(|path| {
            let lines = matching_lines(&path, &config.pattern)?;
            if lines.is_empty() {
                return None;
            }
            Some(MatchRecord { path, lines })
        })
        .collect()
}

/// `None` when the file can't be read as UTF-8 text.
pub fn matching_lines(path: &Path, pattern: &Pattern) -> Option<Vec<usize>> {
    match fs::read_to_string(path) {
        Ok(content) => Some(lines_matching(&content, pattern)),
        // binary / no permission: skipped without a trace in the report
        Err(e) if matches!(e.kind(), ErrorKind::InvalidData | ErrorKind::PermissionDenied) => {
            debug!(path = %path.display(), error = %e, "not scanning");
            None
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read candidate file");
            None
        }
    }
}

pub fn lines_matching(content: &str, pattern: &Pattern) -> Vec<usize> {
    text_lines(content)
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(i, _)| i + 1)
        .collect()
}

/// Lines split on `\n`, `\r\n` or a lone `\r`; a trailing terminator
/// does not start an extra empty line.
pub fn text_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(i) = memchr2(b'\r', b'\n', rest.as_bytes()) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..i];
        let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[i + skip..];
        Some(line)
    })
}

/// Total matching lines across all records.
pub fn total_lines(records: &[MatchRecord]) -> usize {
    records.iter().map(|r| r.lines.len()).sum()
}
