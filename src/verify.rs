// refsweep/src/verify.rs

use std::path::Path;
use crate::{
    config::SweepConfig,
    scan::{
        self,
        MatchRecord
    }
};

/// Post-rewrite state of the tree. `Residual` is a warning only; it never
/// changes the exit status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verification {
    Clean,
    Residual(Vec<MatchRecord>),
}

impl Verification {
    pub fn is_clean(&self) -> bool {
        matches!(self, Verification::Clean)
    }
}

/// Re-scan `root` with the same config used for discovery.
pub fn verify(root: &Path, config: &SweepConfig) -> Verification {
    let remaining = scan::find_references(root, config);
    if remaining.is_empty() {
        Verification::Clean
    } else {
        Verification::Residual(remaining)
    }
}
