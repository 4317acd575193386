//! JSON report generation

use crate::report::{AnalysisRecord, Summary};
use chrono::Local;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonReport<'a> {
    generated: String,
    summary: Summary,
    results: &'a [AnalysisRecord],
}

/// Write the full batch as a pretty-printed JSON document:
/// `{ generated, summary, results }`.
pub fn write<W: Write>(writer: &mut W, records: &[AnalysisRecord]) -> io::Result<()> {
    let report = JsonReport {
        generated: Local::now().to_rfc3339(),
        summary: Summary::from_records(records),
        results: records,
    };

    serde_json::to_writer_pretty(&mut *writer, &report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(writer)
}
