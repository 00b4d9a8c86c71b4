// src/main.rs

use anyhow::Result;

fn main() -> Result<()> {
    refsweep::commands::run_cli()
}
