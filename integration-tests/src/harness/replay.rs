use logreplay_core::config::ReplayConfig;
use logreplay_core::replay::{HttpSender, ReplayEngine, ReplayError, RunStatistics};
use logreplay_core::sinks::{OutputSinks, open_input};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

/// An access log plus an output directory in a fresh temp dir.
pub struct TestRun {
    dir: TempDir,
}

pub struct RunOutput {
    pub stats: RunStatistics,
    pub console: String,
}

impl TestRun {
    pub fn new(lines: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(dir.path().join("access.log"), contents).expect("failed to write access log");
        Self { dir }
    }

    pub fn config(&self, base_url: &str) -> ReplayConfig {
        let mut config = ReplayConfig::new(base_url, self.dir.path().join("access.log"));
        config.output_dir = self.dir.path().to_path_buf();
        config.request_timeout = Some(Duration::from_secs(5));
        config
    }

    /// Runs the engine the way the binary does, with real files and a real HTTP client.
    pub fn run(&self, config: &ReplayConfig) -> Result<RunOutput, ReplayError> {
        let sinks = OutputSinks::open(&config.output_dir)?;
        let input = open_input(&config.log_file_path)?;
        let sender = HttpSender::new(config.request_timeout).expect("failed to build HTTP client");

        let mut console: Vec<u8> = Vec::new();
        let mut engine = ReplayEngine::new(config, sender, sinks, &mut console);
        let stats = engine.run(input)?;
        drop(engine);

        Ok(RunOutput {
            stats,
            console: String::from_utf8(console).expect("console output is not UTF-8"),
        })
    }

    pub fn succeeded_log(&self) -> String {
        self.read("succeeded.log")
    }

    pub fn failed_log(&self) -> String {
        self.read("failed.log")
    }

    pub fn failure_details(&self) -> String {
        self.read("reqs-failed.log")
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap_or_default()
    }
}
