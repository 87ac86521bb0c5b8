mod report;
pub mod run;

pub use report::render_fatal;

use crate::config::ReplayOptions;
use crate::logging::LogFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logreplay",
    version,
    about = "Replay HTTP access-log traffic against another host",
    arg_required_else_help = true
)]
pub struct ReplayArgs {
    /// Host to which requests will be replayed. Eg: https://website.com
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path of the access log to replay. Eg: /var/log/nginx/access.log
    #[arg(long, visible_alias = "file")]
    pub log_file_path: Option<PathBuf>,

    /// Only print the URLs, don't send any request. Accepts `--dry-run=true|false`
    #[arg(
        long,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub dry_run: bool,

    /// Append the original request time as `&timestamp=<epoch-ms>`
    #[arg(
        long,
        visible_alias = "with-timestamp",
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub include_timestamp: bool,

    /// Only replay lines matching this regex. Eg: '/abc/'
    #[arg(long, conflicts_with = "regex_exclude")]
    pub regex_filter: Option<String>,

    /// Skip lines matching this regex. Eg: '/abc/'
    #[arg(long)]
    pub regex_exclude: Option<String>,

    /// Directory for succeeded.log, failed.log and reqs-failed.log
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds (0 = none)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// TOML file with defaults for any of the options above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Diagnostic log format (stderr)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl From<&ReplayArgs> for ReplayOptions {
    fn from(args: &ReplayArgs) -> Self {
        Self {
            base_url: args.base_url.clone(),
            log_file_path: args.log_file_path.clone(),
            dry_run: args.dry_run,
            include_timestamp: args.include_timestamp,
            regex_filter: args.regex_filter.clone(),
            regex_exclude: args.regex_exclude.clone(),
            output_dir: args.output_dir.clone(),
            timeout_secs: args.timeout_secs,
        }
    }
}
