// refsweep/src/rewrite.rs
//! In-place, case-preserving substitution, one file at a time.
//!
//! Files are overwritten directly (no temp file + rename): an interrupted write
//! can leave a file truncated or half-rewritten.

use std::{
    fs,
    io,
    path::{
        Path,
        PathBuf
    },
};
use thiserror::Error;
use tracing::debug;
use crate::{
    pattern::Pattern,
    scan::MatchRecord
};

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl RewriteError {
    pub fn path(&self) -> &Path {
        match self {
            RewriteError::Read { path, .. } | RewriteError::Write { path, .. } => path,
        }
    }
}

/// Rewrite one file. Returns the case-insensitive occurrence count, which also
/// includes occurrences in casings that are left untouched.
pub fn rewrite_file(path: &Path, pattern: &Pattern) -> Result<usize, RewriteError> {
    let content = fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let count = pattern.count(&content);
    if count == 0 {
        return Ok(0);
    }

    let updated = pattern.replace_all(&content);
    if updated == content {
        debug!(path = %path.display(), count, "only unsupported casings, nothing written");
        return Ok(count);
    }

    fs::write(path, updated).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(count)
}

/// What happened to one matched file.
#[derive(Debug)]
pub enum FileOutcome {
    Rewritten { path: PathBuf, count: usize },
    Failed(RewriteError),
}

/// Outcome of the replacement phase. Files with zero replacements are omitted.
#[derive(Debug, Default)]
pub struct RewriteSummary {
    /// In processing order.
    pub outcomes: Vec<FileOutcome>,
}

impl RewriteSummary {
    pub fn total(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                FileOutcome::Rewritten { count, .. } => *count,
                FileOutcome::Failed(_) => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &RewriteError> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Failed(e) => Some(e),
            FileOutcome::Rewritten { .. } => None,
        })
    }
}

/// Rewrite every matched file; a failure only costs that file.
pub fn rewrite_all(records: &[MatchRecord], pattern: &Pattern) -> RewriteSummary {
    let mut summary = RewriteSummary::default();
    for rec in records {
        match rewrite_file(&rec.path, pattern) {
            Ok(0) => {}
            Ok(count) => summary.outcomes.push(FileOutcome::Rewritten { path: rec.path.clone(), count }),
            Err(e) => summary.outcomes.push(FileOutcome::Failed(e)),
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn clean_file_is_untouched() {
        let tmp = TempDir::new().unwrap();
        let f = tmp.path().join("clean.md");
        fs::write(&f, "nothing to see\n").unwrap();
        let p = Pattern::new("foo1", "bar2").unwrap();

        assert_eq!(rewrite_file(&f, &p).unwrap(), 0);
        assert_eq!(fs::read_to_string(&f).unwrap(), "nothing to see\n");
    }

    #[test]
    fn rewrites_with_case_fidelity() {
        let tmp = TempDir::new().unwrap();
        let f = tmp.path().join("mix.txt");
        fs::write(&f, "XYZ1\nXyz1\nxyz1\nxYZ1\n").unwrap();
        let p = Pattern::new("xyz1", "ABC2").unwrap();

        assert_eq!(rewrite_file(&f, &p).unwrap(), 4);
        assert_eq!(fs::read_to_string(&f).unwrap(), "ABC2\nAbc2\nabc2\nxYZ1\n");
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let f = tmp.path().join("a.md");
        fs::write(&f, "FOO1 test\nfoo1 end\n").unwrap();
        let p = Pattern::new("foo1", "bar2").unwrap();

        assert_eq!(rewrite_file(&f, &p).unwrap(), 2);
        assert_eq!(rewrite_file(&f, &p).unwrap(), 0);
        assert_eq!(fs::read_to_string(&f).unwrap(), "BAR2 test\nbar2 end\n");
    }

    #[test]
    fn failure_is_isolated_per_file() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.md");
        fs::write(&good, "foo1\n").unwrap();
        let gone = tmp.path().join("gone.md");
        let p = Pattern::new("foo1", "bar2").unwrap();

        let records = vec![
            MatchRecord { path: gone.clone(), lines: vec![1] },
            MatchRecord { path: good.clone(), lines: vec![1] },
        ];
        let summary = rewrite_all(&records, &p);

        assert_eq!(summary.total(), 1);
        assert_eq!(summary.outcomes.len(), 2);
        match &summary.outcomes[0] {
            FileOutcome::Failed(e @ RewriteError::Read { .. }) => assert_eq!(e.path(), gone.as_path()),
            other => panic!("expected read failure first, got {other:?}"),
        }
        match &summary.outcomes[1] {
            FileOutcome::Rewritten { path, count } => {
                assert_eq!(path, &good);
                assert_eq!(*count, 1);
            }
            other => panic!("expected rewrite second, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&good).unwrap(), "bar2\n");
    }

    #[test]
    fn write_failure_is_recorded_and_loop_continues() {
        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked.md");
        let next = tmp.path().join("next.md");
        fs::write(&locked, "foo1\n").unwrap();
        fs::write(&next, "FOO1\n").unwrap();

        let mut perms = fs::metadata(&locked).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&locked, perms).unwrap();
        // root ignores the read-only bit
        if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
            return;
        }

        let p = Pattern::new("foo1", "bar2").unwrap();
        let records = vec![
            MatchRecord { path: locked.clone(), lines: vec![1] },
            MatchRecord { path: next.clone(), lines: vec![1] },
        ];
        let summary = rewrite_all(&records, &p);

        let failures: Vec<_> = summary.failures().collect();
        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0], RewriteError::Write { .. }));
        assert_eq!(failures[0].path(), locked.as_path());
        assert_eq!(summary.total(), 1);
        assert_eq!(fs::read_to_string(&locked).unwrap(), "foo1\n");
        assert_eq!(fs::read_to_string(&next).unwrap(), "BAR2\n");
    }
}
