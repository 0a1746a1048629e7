use crate::{base_parser::Parser, LogRecord, ParseError};
use chrono::NaiveDateTime;

/// Timestamp layout of the first field, always UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const MIN_FIELDS: usize = 4;

/// Space-delimited parser for `<timestamp> <LEVEL> <service> <message...>` lines
pub struct LineParser;

impl Parser for LineParser {
    fn name(&self) -> &'static str {
        "space-delimited"
    }

    fn parse_line(&self, line: &str) -> Result<LogRecord, ParseError> {
        parse_line(line)
    }
}

/// Parse one raw line.
///
/// The line is split on ASCII whitespace; the message is rebuilt from the
/// fourth token onwards with single spaces, so runs of blanks collapse.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
    if tokens.len() < MIN_FIELDS {
        return Err(ParseError::MalformedLine {
            tokens: tokens.len(),
        });
    }

    let timestamp = NaiveDateTime::parse_from_str(tokens[0], TIMESTAMP_FORMAT)
        .map_err(|_| ParseError::InvalidTimestamp(tokens[0].to_string()))?
        .and_utc();

    Ok(LogRecord {
        timestamp,
        level: tokens[1].to_string(),
        service: tokens[2].to_string(),
        message: tokens[3..].join(" "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    #[test]
    fn test_parse_basic_line() {
        let record = parse_line(
            "2024-01-17T10:30:15Z INFO payment_service Payment processed successfully for user_id=12345",
        )
        .unwrap();

        assert_eq!(
            record.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 17, 10, 30, 15).unwrap()
        );
        assert_eq!(record.level, "INFO");
        assert_eq!(record.service, "payment_service");
        assert_eq!(
            record.message,
            "Payment processed successfully for user_id=12345"
        );
    }

    #[test]
    fn test_message_whitespace_collapses() {
        let record =
            parse_line("2024-01-17T10:31:00Z  ERROR\tauth_service   Invalid    token  ").unwrap();
        assert_eq!(record.level, "ERROR");
        assert_eq!(record.service, "auth_service");
        assert_eq!(record.message, "Invalid token");
    }

    #[test]
    fn test_single_word_message() {
        let record = parse_line("2024-01-17T10:31:00Z WARN cache evicted").unwrap();
        assert_eq!(record.message, "evicted");
    }

    #[test]
    fn test_level_kept_verbatim() {
        let record = parse_line("2024-01-17T10:31:00Z error cache lowercase level").unwrap();
        assert_eq!(record.level, "error");
        assert!(!record.is_error());
    }

    #[test]
    fn test_too_few_fields() {
        for line in [
            "",
            "   ",
            "2024-01-17T10:31:00Z",
            "2024-01-17T10:31:00Z ERROR",
            "2024-01-17T10:31:00Z ERROR auth_service",
        ] {
            match parse_line(line) {
                Err(ParseError::MalformedLine { tokens }) => assert!(tokens < 4),
                other => panic!("expected MalformedLine for {:?}, got {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_invalid_timestamps() {
        for ts in [
            "2024-13-01T10:00:00Z",
            "2024-02-30T10:00:00Z",
            "2024-01-17T25:00:00Z",
            "2024-01-17T10:00:00",
            "2024-01-17T10:00:00+00:00",
            "yesterday",
        ] {
            let line = format!("{} ERROR svc something broke", ts);
            match parse_line(&line) {
                Err(ParseError::InvalidTimestamp(token)) => assert_eq!(token, ts),
                other => panic!("expected InvalidTimestamp for {:?}, got {:?}", ts, other),
            }
        }
    }

    #[test]
    fn test_leap_day_accepted() {
        assert!(parse_line("2024-02-29T00:00:00Z INFO svc leap day").is_ok());
    }

    #[test]
    fn test_parse_reader_drops_bad_lines() {
        let data = "2024-01-17T10:30:15Z INFO payment_service Payment processed\n\
                    garbage\n\
                    \n\
                    2024-99-17T10:30:15Z ERROR payment_service bad date\n\
                    2024-01-17T10:33:00Z ERROR auth_service Invalid token\n";

        let outcome = LineParser.parse(Box::new(Cursor::new(data))).unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped, 3);
        assert_eq!(outcome.records[0].service, "payment_service");
        assert_eq!(outcome.records[1].service, "auth_service");
    }

    #[test]
    fn test_parse_reader_handles_crlf() {
        let data = "2024-01-17T10:30:15Z INFO svc first\r\n2024-01-17T10:30:16Z INFO svc second\r\n";
        let outcome = LineParser.parse(Box::new(Cursor::new(data))).unwrap();

        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.records[0].message, "first");
        assert_eq!(outcome.records[1].message, "second");
    }

    #[test]
    fn test_parse_reader_skips_invalid_utf8_line() {
        let mut data = b"2024-01-17T10:30:15Z INFO payment_service Payment processed\n".to_vec();
        data.extend_from_slice(b"2024-01-17T10:31:00Z ERROR payment_service bad \xff byte\n");
        data.extend_from_slice(b"2024-01-17T10:33:00Z ERROR auth_service Invalid token");

        let outcome = LineParser.parse(Box::new(Cursor::new(data))).unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.records[0].service, "payment_service");
        assert_eq!(outcome.records[1].message, "Invalid token");
    }
}
