use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use conductor_tui::cli::commands::{Cli, version_string};

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_string());
        return;
    }

    if let Some(path) = &cli.log_file
        && let Err(e) = setup_logging(path)
    {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let result = std::env::current_dir()
        .map_err(Into::into)
        .and_then(|cwd| conductor_tui::tui::run(&cwd));
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Send tracing output to `path`. The terminal belongs to the UI.
fn setup_logging(path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let log_file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()?;
    Ok(())
}
