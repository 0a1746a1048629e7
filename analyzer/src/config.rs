use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "data/sample_logs.txt";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "log-analyzer")]
#[command(about = "Per-service log counts, error rates and most frequent errors", long_about = None)]
pub struct Config {
    /// Path to the log file
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
