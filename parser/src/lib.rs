// Parser crate for service log files
// Line parsing, per-run aggregation and the summary report model

pub mod types;
pub mod base_parser;
pub mod line_parser;
pub mod count_map;
pub mod aggregator;
pub mod report;


// Re-export main types
pub use types::*;
pub use base_parser::{ParseOutcome, Parser};
pub use line_parser::{parse_line, LineParser};
pub use count_map::CountMap;
pub use aggregator::{aggregate, Aggregator};
pub use report::{error_rate, HourCount, MessageCount, ServiceStats, Summary};
