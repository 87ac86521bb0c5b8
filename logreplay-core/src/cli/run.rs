use crate::cli::ReplayArgs;
use crate::config::{ReplayConfig, ReplayFileConfig, ReplayOptions};
use crate::replay::{HttpSender, ReplayEngine, RunStatistics};
use crate::sinks::{OutputSinks, open_input};
use anyhow::{Context, Result};
use std::io;

/// Merges command-line flags over the optional config file and validates the result.
pub fn load_config(args: &ReplayArgs) -> Result<ReplayConfig> {
    let mut opts = ReplayOptions::from(args);

    if let Some(path) = &args.config {
        let file = ReplayFileConfig::from_file(path)?;
        opts = opts.merge_file(file);
    }

    Ok(ReplayConfig::try_from(opts)?)
}

pub fn run_replay(args: ReplayArgs) -> Result<RunStatistics> {
    let config = load_config(&args)?;

    let sinks = OutputSinks::open(&config.output_dir)?;
    let input = open_input(&config.log_file_path)?;
    let sender =
        HttpSender::new(config.request_timeout).context("failed to build the HTTP client")?;

    let stdout = io::stdout();
    let mut engine = ReplayEngine::new(&config, sender, sinks, stdout.lock());

    let stats = engine.run(input).context("replay aborted")?;
    engine.report()?;

    Ok(stats)
}
