// refsweep/src/report.rs
//! Human-readable progress for the three phases.
//!
//! Output shape:
//! ```text
//! ================ (80)
//! PHASE 1: Finding all 'foo1' references...
//! ================
//!
//! Found 'foo1' in 1 file(s):
//!
//!   docs/a.md
//!     Lines: 1, 2
//!
//!   Total: 2 line(s) across 1 file(s)
//! ```

use std::{
    io::{
        self,
        Write
    },
    path::Path
};
use crate::{
    rewrite::{
        FileOutcome,
        RewriteSummary
    },
    scan::{
        self,
        MatchRecord
    },
    util::{
        join_lines,
        normalize_rel
    },
    verify::Verification
};

const RULE_WIDTH: usize = 80;

pub struct Reporter<'a, W: Write> {
    out: W,
    root: &'a Path,
    target: &'a str,
    replacement: &'a str,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(out: W, root: &'a Path, target: &'a str, replacement: &'a str) -> Self {
        Self { out, root, target, replacement }
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{rule}")
    }

    fn rel(&self, path: &Path) -> String {
        normalize_rel(self.root, path)
    }

    pub fn discovery_header(&mut self) -> io::Result<()> {
        let title = format!("PHASE 1: Finding all '{}' references...", self.target);
        self.banner(&title)
    }

    pub fn discovery(&mut self, found: &[MatchRecord]) -> io::Result<()> {
        if found.is_empty() {
            return writeln!(self.out, "\nNo '{}' references found!", self.target);
        }
        writeln!(self.out, "\nFound '{}' in {} file(s):\n", self.target, found.len())?;
        for rec in found {
            writeln!(self.out, "  {}", self.rel(&rec.path))?;
            writeln!(self.out, "    Lines: {}", join_lines(&rec.lines))?;
        }
        writeln!(
            self.out,
            "\n  Total: {} line(s) across {} file(s)",
            scan::total_lines(found),
            found.len()
        )
    }

    pub fn replacement_header(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        let title = format!("PHASE 2: Replacing '{}' -> '{}'...", self.target, self.replacement);
        self.banner(&title)
    }

    pub fn replacement(&mut self, summary: &RewriteSummary) -> io::Result<()> {
        for outcome in &summary.outcomes {
            match outcome {
                FileOutcome::Rewritten { path, count } => {
                    writeln!(self.out, "  {}: {count} replacement(s)", self.rel(path))?;
                }
                FileOutcome::Failed(err) => {
                    writeln!(self.out, "  Error processing {}: {err}", self.rel(err.path()))?;
                }
            }
        }
        writeln!(self.out, "\nTotal replacements: {}", summary.total())
    }

    pub fn verification_header(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.banner("PHASE 3: Verification...")
    }

    pub fn verification(&mut self, outcome: &Verification) -> io::Result<()> {
        match outcome {
            Verification::Clean => writeln!(
                self.out,
                "\nVerification passed: No '{}' references remain!",
                self.target
            ),
            Verification::Residual(remaining) => {
                writeln!(
                    self.out,
                    "\nWARNING: Still found '{}' in {} file(s):",
                    self.target,
                    remaining.len()
                )?;
                for rec in remaining {
                    writeln!(self.out, "  {}: lines {}", self.rel(&rec.path), join_lines(&rec.lines))?;
                }
                Ok(())
            }
        }
    }

    pub fn done(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.banner("Done! Ready to commit changes.")?;
        self.out.flush()
    }
}
