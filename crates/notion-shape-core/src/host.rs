//! Host: drives a newline-delimited JSON record stream through a pipeline.
//!
//! Records are read, transformed and written one at a time; nothing is
//! buffered beyond the current line.

use std::io::{BufRead, Write};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::pipeline::Pipeline;
use crate::transform::TransformContext;

/// Options for [`process_lines`].
#[derive(Debug, Clone, Copy)]
pub struct HostOptions {
    /// Skip malformed lines with a warning instead of failing the run.
    pub skip_invalid: bool,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self { skip_invalid: true }
    }
}

impl From<&crate::config::HostConfig> for HostOptions {
    fn from(cfg: &crate::config::HostConfig) -> Self {
        Self {
            skip_invalid: cfg.skip_invalid,
        }
    }
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-blank lines read.
    pub read: usize,
    pub written: usize,
    pub skipped: usize,
}

/// Read JSON records from `reader`, apply `pipeline`, write them to `writer`.
///
/// Blank lines are ignored. Each output record is one compact JSON line.
pub fn process_lines<R, W>(
    mut reader: R,
    mut writer: W,
    pipeline: &Pipeline,
    ctx: &TransformContext,
    options: HostOptions,
) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        summary.read += 1;

        let mut record = match parse_record(&buf, line_no) {
            Ok(record) => record,
            Err(e) if options.skip_invalid => {
                tracing::warn!(error = %e, "skipping record");
                summary.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        pipeline.apply(&mut record, ctx);

        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
        summary.written += 1;
    }

    writer.flush()?;
    tracing::info!(
        read = summary.read,
        written = summary.written,
        skipped = summary.skipped,
        "record stream finished"
    );
    Ok(summary)
}

/// Decode one raw line. Bytes that are not UTF-8 fail here like any other
/// malformed JSON.
fn parse_record(line: &[u8], line_no: usize) -> Result<crate::types::Record> {
    let value: Value = serde_json::from_slice(line).map_err(|source| Error::InvalidRecord {
        line: line_no,
        source,
    })?;
    match value {
        Value::Object(record) => Ok(record),
        other => Err(Error::NotAnObject {
            line: line_no,
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
