use clap::Parser;
use logreplay_core::cli::ReplayArgs;
use logreplay_core::cli::run::run_replay;
use logreplay_core::cli::render_fatal;
use logreplay_core::logging::{default_log_format, init_logging};

fn main() {
    let args = ReplayArgs::parse();

    init_logging(args.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run_replay(args) {
        tracing::error!("replay failed: {e:#}");
        render_fatal(&e);
        std::process::exit(1);
    }
}
