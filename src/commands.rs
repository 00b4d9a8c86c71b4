// refsweep/src/commands.rs

use anyhow::{
    Context,
    Result
};
use std::{
    env,
    io::{
        self,
        Write
    },
    path::Path
};
use crate::{
    config::{
        SweepConfig,
        DEFAULT_REPLACEMENT,
        DEFAULT_TARGET
    },
    logging,
    pattern::Pattern,
    report::Reporter,
    rewrite::{
        self,
        RewriteSummary
    },
    scan::{
        self,
        MatchRecord
    },
    verify::{
        self,
        Verification
    }
};

/// Zero-argument entry point: sweep the current working directory.
/// Extra arguments are ignored.
pub fn run_cli() -> Result<()> {
    logging::init_logging();

    let root = env::current_dir().context("failed to get current_dir")?;
    let config = SweepConfig::new(Pattern::new(DEFAULT_TARGET, DEFAULT_REPLACEMENT)?);

    let stdout = io::stdout();
    run(&root, &config, stdout.lock())?;
    Ok(())
}

/// What one run saw and did. `rewrite`/`verification` are `None` when
/// discovery found nothing and the run stopped early.
#[derive(Debug)]
pub struct RunSummary {
    pub found: Vec<MatchRecord>,
    pub rewrite: Option<RewriteSummary>,
    pub verification: Option<Verification>,
}

/// Discovery -> replacement -> verification over `root`, reporting to `out`.
///
/// Residual matches and per-file failures are reported, never returned as
/// errors; only a failing `out` makes this return `Err`.
pub fn run<W: Write>(root: &Path, config: &SweepConfig, out: W) -> Result<RunSummary> {
    let pattern = &config.pattern;
    let mut report = Reporter::new(out, root, pattern.target(), pattern.replacement());

    report.discovery_header().context("writing report")?;
    let found = scan::find_references(root, config);
    report.discovery(&found).context("writing report")?;
    if found.is_empty() {
        return Ok(RunSummary { found, rewrite: None, verification: None });
    }

    report.replacement_header().context("writing report")?;
    let rewrite = rewrite::rewrite_all(&found, pattern);
    report.replacement(&rewrite).context("writing report")?;

    report.verification_header().context("writing report")?;
    let verification = verify::verify(root, config);
    report.verification(&verification).context("writing report")?;
    report.done().context("writing report")?;

    Ok(RunSummary {
        found,
        rewrite: Some(rewrite),
        verification: Some(verification),
    })
}
