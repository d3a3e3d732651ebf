// Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// A four-function calculator with calculation history
#[derive(Debug, Parser)]
#[command(name = "calctty", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `calctty=trace`. Overrides `RUST_LOG`
    /// and the config file
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Type these keys without opening the UI, then print the display and history
    #[arg(short, long, value_name = "KEYS", allow_hyphen_values = true)]
    pub keys: Option<String>,
}
