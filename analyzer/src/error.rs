use log_parser::ParseError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Cannot open input file {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
