//! CSV report generation

use crate::classification::EmotionLabel;
use crate::report::AnalysisRecord;
use std::io::{self, Write};

/// Write one row per record: file, confidence, rank labels, then one score
/// column per emotion in canonical order.
pub fn write<W: Write>(writer: &mut W, records: &[AnalysisRecord]) -> io::Result<()> {
    write!(
        writer,
        "file,confidence_percent,confidence_level,primary,secondary,tertiary"
    )?;
    for label in EmotionLabel::ALL {
        write!(writer, ",{}", label)?;
    }
    writeln!(writer, ",error")?;

    for r in records {
        write!(
            writer,
            "{},{:.2},{},{},{},{}",
            quote(&r.file_path),
            r.analytics.confidence_percent,
            quote(&r.analytics.confidence_level),
            r.analytics.primary,
            r.analytics.secondary,
            r.analytics.tertiary,
        )?;
        for label in EmotionLabel::ALL {
            let score = r
                .analytics
                .ranked
                .iter()
                .find(|e| e.label == label)
                .map(|e| e.score)
                .unwrap_or(0.0);
            write!(writer, ",{:.2}", score)?;
        }
        writeln!(writer, ",{}", quote(r.error.as_deref().unwrap_or("")))?;
    }

    Ok(())
}

/// Quote a field if it contains a comma, quote, or newline.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
