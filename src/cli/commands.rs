use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "conductor-tui",
    about = concat!("conductor-tui v", env!("CARGO_PKG_VERSION"), " - browse and edit Conductor tracks"),
    disable_version_flag = true
)]
pub struct Cli {
    /// Print the version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Write debug logs to this file
    #[arg(long = "log-file", value_name = "PATH", hide = true)]
    pub log_file: Option<PathBuf>,
}

/// Text printed by `--version`
pub fn version_string() -> String {
    format!("conductor-tui v{}", env!("CARGO_PKG_VERSION"))
}
