use log_parser::Summary;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// Human-readable report
pub fn write_text<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "Log Analysis Summary")?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "Records: {} parsed, {} skipped",
        summary.total_records, summary.skipped_lines
    )?;
    if let (Some(first), Some(last)) = (summary.first_seen, summary.last_seen) {
        writeln!(out, "Time span: {} .. {}", first.to_rfc3339(), last.to_rfc3339())?;
    }

    writeln!(out)?;
    for stats in &summary.services {
        writeln!(
            out,
            "Service: {}, Total: {}, Errors: {}, Error Rate: {:.2}%",
            stats.service, stats.total, stats.errors, stats.error_rate
        )?;
    }

    if !summary.error_messages.is_empty() {
        writeln!(out)?;
        for entry in &summary.error_messages {
            writeln!(
                out,
                "Error Message: '{}' occurred {} times",
                entry.message, entry.count
            )?;
        }
    }

    if !summary.error_hours.is_empty() {
        writeln!(out)?;
        for bucket in &summary.error_hours {
            writeln!(
                out,
                "Errors in hour {}: {}",
                bucket.hour.format("%Y-%m-%d %H:00Z"),
                bucket.count
            )?;
        }
    }

    writeln!(out, "{}", rule)?;
    match &summary.most_frequent_error {
        Some(top) => writeln!(
            out,
            "Most Frequent Error Message: '{}' occurred {} times",
            top.message, top.count
        )?,
        None => writeln!(out, "No error messages recorded")?,
    }

    Ok(())
}

/// Pretty-printed JSON summary followed by a newline
pub fn write_json<W: Write>(out: &mut W, summary: &Summary) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out).map_err(serde_json::Error::io)
}
