use crate::error::AnalyzerError;
use log_parser::{Aggregator, LineParser, Parser, Summary};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{error, info, instrument};

/// Parse and aggregate a log file into a summary.
///
/// A missing or unreadable file is fatal; bad lines inside it are not.
#[instrument]
pub fn analyze_file(path: &Path) -> Result<Summary, AnalyzerError> {
    let file = File::open(path).map_err(|source| {
        error!("Failed to open {}: {}", path.display(), source);
        AnalyzerError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    analyze_reader(Box::new(file))
}

pub fn analyze_reader(reader: Box<dyn Read>) -> Result<Summary, AnalyzerError> {
    let parser = LineParser;
    let outcome = parser.parse(reader)?;

    let mut aggregator = Aggregator::new();
    aggregator.extend(&outcome.records);
    info!(
        "Aggregated {} records across {} services",
        aggregator.record_count(),
        aggregator.service_count().len()
    );

    Ok(Summary::from_aggregate(&aggregator, outcome.skipped))
}
