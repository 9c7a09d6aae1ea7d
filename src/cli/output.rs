//! Output formatting for the run summary.

use std::io::{self, Write};

use crate::cli::args::{IndexerArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::RunSummary;

/// Print the run summary in the selected format.
pub fn output_summary(summary: &RunSummary, args: &IndexerArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, summary, args.output_format, args.pretty)?;
    Ok(())
}

/// Write the run summary to `out`.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &RunSummary,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_human(out, summary)?,
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, summary)?;
            } else {
                serde_json::to_writer(&mut *out, summary)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_human<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    let heading = if summary.cancelled {
        "Indexing cancelled"
    } else if summary.success {
        "Indexing completed"
    } else {
        "Indexing completed with failures"
    };

    writeln!(out, "{heading}")?;
    writeln!(out, "{}", "═".repeat(heading.chars().count()))?;
    writeln!(out, "Index: {}", summary.index)?;
    writeln!(
        out,
        "Started: {}",
        summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(
        out,
        "Files: {} scanned, {} skipped",
        format_count(summary.files_scanned),
        format_count(summary.files_skipped)
    )?;
    writeln!(
        out,
        "Documents: {} indexed, {} failed, {} submitted",
        format_count(summary.documents_indexed),
        format_count(summary.documents_failed),
        format_count(summary.documents_submitted)
    )?;
    writeln!(
        out,
        "Bulk requests: {} ({})",
        format_count(summary.batches),
        format_bytes(summary.bytes_sent)
    )?;
    writeln!(out, "Duration: {}", format_duration(summary.duration_ms))?;
    writeln!(out, "Throughput: {:.1} docs/s", summary.docs_per_second)?;
    Ok(())
}

/// Group the digits of a count by thousands.
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format milliseconds for display.
fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let minutes = ms / 60_000;
        let seconds = (ms % 60_000) as f64 / 1000.0;
        format!("{minutes}m {seconds:.1}s")
    }
}

/// Format bytes into human-readable format.
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let unit = UNITS[unit_index];
    if unit_index == 0 {
        format!("{bytes} {unit}")
    } else {
        format!("{size:.1} {unit}")
    }
}
