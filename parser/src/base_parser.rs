use crate::{LogRecord, ParseError};
use std::io::{BufRead, BufReader, Read};
use tracing::{debug, info, warn};

/// Records kept from one input, plus how many lines were dropped on the way.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub records: Vec<LogRecord>,
    pub skipped: usize,
}

/// Line-oriented log parser
///
/// Takes `Box<dyn Read>` so callers can hand over files and in-memory
/// buffers through the same trait object.
pub trait Parser {
    /// Returns the name of this parser (e.g., "space-delimited")
    fn name(&self) -> &'static str;

    /// Parse a single raw line into a record
    fn parse_line(&self, line: &str) -> Result<LogRecord, ParseError>;

    /// Parse every line of a reader.
    ///
    /// Lines that are not UTF-8 or that `parse_line` rejects with a
    /// recoverable error are dropped and counted; read failures abort the
    /// whole parse.
    fn parse(&self, reader: Box<dyn Read>) -> Result<ParseOutcome, ParseError> {
        info!("Starting {} parsing", self.name());
        let mut buf_reader = BufReader::new(reader);
        let mut outcome = ParseOutcome::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if buf_reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let result = decode_line(&buf).and_then(|line| self.parse_line(line));
            match result {
                Ok(record) => outcome.records.push(record),
                Err(e) if e.is_recoverable() => {
                    debug!("Skipping line {}: {}", line_no, e);
                    outcome.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        if outcome.skipped > 0 {
            warn!("Skipped {} unparsable lines", outcome.skipped);
        }
        info!(
            "{} parsing complete: {} records parsed",
            self.name(),
            outcome.records.len()
        );

        Ok(outcome)
    }
}

/// Strip the line terminator and check the encoding.
fn decode_line(raw: &[u8]) -> Result<&str, ParseError> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map_err(|e| ParseError::InvalidEncoding {
        valid_up_to: e.valid_up_to(),
    })
}
