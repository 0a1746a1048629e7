mod analysis;
mod config;
mod console;
mod error;

use crate::config::Config;
use crate::error::AnalyzerError;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "log_analyzer=info,log_parser=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), AnalyzerError> {
    tracing::info!("Analyzing {}", config.input.display());
    let summary = analysis::analyze_file(&config.input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.json {
        console::write_json(&mut out, &summary)?;
    } else {
        console::write_text(&mut out, &summary)?;
    }
    out.flush()?;
    Ok(())
}
