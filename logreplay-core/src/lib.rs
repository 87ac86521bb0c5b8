pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod sinks;
