// refsweep/src/pattern.rs
//! Target/replacement pair.
//! - Case-insensitive detection (lowercased needle over lowercased text)
//! - Case-preserving substitution over three exact casings: UPPER, Title, lower
//!
//! Casings outside those three (e.g. `xYz1`) are counted as matches but left
//! untouched by `replace_all`.

use anyhow::{ensure, Result};
use memchr::memmem::Finder;

#[derive(Clone, Debug)]
pub struct Pattern {
    target: String,
    replacement: String,
    needle: Finder<'static>,
    /// (from, to) pairs, applied in order. Duplicate `from`s already removed.
    variants: Vec<(String, String)>,
}

impl Pattern {
    pub fn new(target: &str, replacement: &str) -> Result<Self> {
        ensure!(!target.is_empty(), "target substring must not be empty");

        let lowered = target.to_lowercase();
        let needle = Finder::new(lowered.as_bytes()).into_owned();

        let mut variants: Vec<(String, String)> = Vec::with_capacity(3);
        for (from, to) in [
            (target.to_uppercase(), replacement.to_uppercase()),
            (title_case(target), title_case(replacement)),
            (lowered, replacement.to_lowercase()),
        ] {
            if variants.iter().any(|(seen, _)| *seen == from) {
                continue;
            }
            variants.push((from, to));
        }

        Ok(Self {
            target: target.to_string(),
            replacement: replacement.to_string(),
            needle,
            variants,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// True when `line` contains the target under case-insensitive comparison.
    pub fn is_match(&self, line: &str) -> bool {
        self.needle.find(line.to_lowercase().as_bytes()).is_some()
    }

    /// Non-overlapping case-insensitive occurrences in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.needle.find_iter(text.to_lowercase().as_bytes()).count()
    }

    /// Sequential literal substitution: UPPER, then Title, then lower.
    pub fn replace_all(&self, content: &str) -> String {
        let mut out = content.to_string();
        for (from, to) in &self.variants {
            if out.contains(from.as_str()) {
                out = out.replace(from.as_str(), to);
            }
        }
        out
    }
}

/// First char uppercased, the rest lowercased. `xyz1` -> `Xyz1`.
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
