use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tassist")]
#[command(about = "Command-driven student contact manager", long_about = None)]
pub struct Cli {
    /// Path to the data file (defaults to the platform data directory)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Run a single command and exit instead of starting the prompt
    #[arg(short = 'c', long = "command")]
    pub command: Option<String>,
}
