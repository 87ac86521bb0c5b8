use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};

/// Prints a fatal error and its causes to stderr.
pub fn render_fatal(err: &anyhow::Error) {
    let pretty = io::stderr().is_terminal();

    if pretty {
        eprintln!("{}: {}", "error".red().bold(), err);
    } else {
        eprintln!("error: {err}");
    }

    for cause in err.chain().skip(1) {
        if pretty {
            eprintln!("  {}: {}", "caused by".yellow(), cause);
        } else {
            eprintln!("  caused by: {cause}");
        }
    }
}
