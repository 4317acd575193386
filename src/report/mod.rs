//! Report generation for derived analytics
//!
//! Output formatters for batches of derived analytics in multiple formats:
//!
//! - **HTML**: self-contained dashboard page (confidence gauges, bar charts,
//!   donuts, narrative summaries)
//! - **JSON**: machine-readable format for programmatic consumption
//! - **CSV**: spreadsheet-compatible format for bulk runs
//!
//! # Usage
//!
//! ```ignore
//! use emoscope::report;
//!
//! // Automatically picks format based on extension
//! report::generate("report.html", &records)?;  // HTML
//! report::generate("report.json", &records)?;  // JSON
//! report::generate("report.csv", &records)?;   // CSV
//! ```

pub mod csv;
pub mod html;
pub mod json;

use crate::analytics::{AnalyticsDeriver, DerivedAnalytics};
use crate::classification::{ClassificationResult, EmotionLabel};
use serde::Serialize;
use std::io;
use std::path::Path;

/// One batch input paired with its derived analytics.
///
/// A file that fails to read or parse still produces a record: fallback
/// analytics plus the error string, so a batch report renders every input
/// instead of aborting the run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub file_path: String,
    pub file_name: String,
    pub analytics: DerivedAnalytics,
    pub error: Option<String>,
}

impl AnalysisRecord {
    /// Read a classifier result file and derive its analytics.
    pub fn analyze_file<P: AsRef<Path>>(deriver: &AnalyticsDeriver, path: P) -> Self {
        let path = path.as_ref();
        let file_path = path.display().to_string();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&file_path)
            .to_string();

        match ClassificationResult::from_json_file(path) {
            Ok(result) => Self {
                file_path,
                file_name,
                analytics: deriver.derive(Some(&result)),
                error: None,
            },
            Err(e) => Self {
                file_path,
                file_name,
                analytics: deriver.derive(None),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Generate a report in the appropriate format based on file extension
pub fn generate<P: AsRef<Path>>(path: P, records: &[AnalysisRecord]) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = std::fs::File::create(path)?;

    match ext.as_str() {
        "html" | "htm" => html::write(&mut file, records),
        "json" => json::write(&mut file, records),
        _ => csv::write(&mut file, records),
    }
}

/// Summary statistics for a batch of records: how many results each emotion
/// dominated, plus how many inputs failed to load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub total: usize,
    pub angry: usize,
    pub calm: usize,
    pub disgust: usize,
    pub fearful: usize,
    pub happy: usize,
    pub neutral: usize,
    pub sad: usize,
    pub errors: usize,
}

impl Summary {
    pub fn from_records(records: &[AnalysisRecord]) -> Self {
        let mut summary = Self::default();
        summary.total = records.len();

        for r in records {
            if r.error.is_some() {
                summary.errors += 1;
                continue;
            }
            match r.analytics.primary {
                EmotionLabel::Angry => summary.angry += 1,
                EmotionLabel::Calm => summary.calm += 1,
                EmotionLabel::Disgust => summary.disgust += 1,
                EmotionLabel::Fearful => summary.fearful += 1,
                EmotionLabel::Happy => summary.happy += 1,
                EmotionLabel::Neutral => summary.neutral += 1,
                EmotionLabel::Sad => summary.sad += 1,
            }
        }

        summary
    }

    /// Count of records whose primary emotion is `label`.
    pub fn dominant(&self, label: EmotionLabel) -> usize {
        match label {
            EmotionLabel::Angry => self.angry,
            EmotionLabel::Calm => self.calm,
            EmotionLabel::Disgust => self.disgust,
            EmotionLabel::Fearful => self.fearful,
            EmotionLabel::Happy => self.happy,
            EmotionLabel::Neutral => self.neutral,
            EmotionLabel::Sad => self.sad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::EmotionScores;

    // ==========================================================================
    // SUMMARY STATISTICS TESTS
    // ==========================================================================
    //
    // The Summary struct aggregates dominant-emotion counts for a batch.
    // This is displayed at the top of reports to give an overview.
    // ==========================================================================

    pub(crate) fn record_with_primary(label: EmotionLabel, name: &str) -> AnalysisRecord {
        let mut emotions = EmotionScores::default();
        match label {
            EmotionLabel::Angry => emotions.angry = 90.0,
            EmotionLabel::Calm => emotions.calm = 90.0,
            EmotionLabel::Disgust => emotions.disgust = 90.0,
            EmotionLabel::Fearful => emotions.fearful = 90.0,
            EmotionLabel::Happy => emotions.happy = 90.0,
            EmotionLabel::Neutral => emotions.neutral = 90.0,
            EmotionLabel::Sad => emotions.sad = 90.0,
        }

        let result = ClassificationResult {
            confidence_level: "High".to_string(),
            confidence_score: 74.5,
            emotions,
        };

        AnalysisRecord {
            file_path: format!("/clips/{}", name),
            file_name: name.to_string(),
            analytics: AnalyticsDeriver::new().derive(Some(&result)),
            error: None,
        }
    }

    pub(crate) fn error_record(name: &str) -> AnalysisRecord {
        AnalysisRecord {
            file_path: format!("/clips/{}", name),
            file_name: name.to_string(),
            analytics: AnalyticsDeriver::new().derive(None),
            error: Some("expected value at line 1 column 1".to_string()),
        }
    }

    #[test]
    fn test_summary_empty() {
        let records: Vec<AnalysisRecord> = vec![];
        let summary = Summary::from_records(&records);

        assert_eq!(summary.total, 0);
        assert_eq!(summary.errors, 0);
        for label in EmotionLabel::ALL {
            assert_eq!(summary.dominant(label), 0);
        }
    }

    #[test]
    fn test_summary_counts_dominant_emotions() {
        let records = vec![
            record_with_primary(EmotionLabel::Happy, "a.json"),
            record_with_primary(EmotionLabel::Happy, "b.json"),
            record_with_primary(EmotionLabel::Angry, "c.json"),
            record_with_primary(EmotionLabel::Sad, "d.json"),
        ];
        let summary = Summary::from_records(&records);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.happy, 2);
        assert_eq!(summary.angry, 1);
        assert_eq!(summary.sad, 1);
        assert_eq!(summary.calm, 0);
        assert_eq!(summary.errors, 0);
    }

    #[test]
    fn test_summary_errors_not_double_counted() {
        // An errored record holds fallback analytics (primary=angry); it must
        // count as an error, not as an angry-dominant result
        let records = vec![
            record_with_primary(EmotionLabel::Angry, "a.json"),
            error_record("broken.json"),
        ];
        let summary = Summary::from_records(&records);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.angry, 1);
        assert_eq!(summary.errors, 1);
    }

    // ==========================================================================
    // RECORD CONSTRUCTION TESTS
    // ==========================================================================

    #[test]
    fn test_analyze_file_missing_path_yields_error_record() {
        let deriver = AnalyticsDeriver::new();
        let record = AnalysisRecord::analyze_file(&deriver, "/nonexistent/clip.json");

        assert!(record.error.is_some());
        // Fallback analytics still render
        assert_eq!(record.analytics.confidence_level, "N/A");
        assert_eq!(record.analytics.ranked.len(), 7);
    }

    #[test]
    fn test_analyze_file_reads_classifier_json() {
        let dir = std::env::temp_dir().join("emoscope_report_tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("clip.json");
        std::fs::write(
            &path,
            r#"{
                "confidence_level": "Low",
                "confidence_score": 3.0,
                "emotions": {
                    "angry": 87.91, "calm": 0.0, "disgust": 12.07, "fearful": 0.0,
                    "happy": 0.0, "neutral": 0.03, "sad": 0.0
                }
            }"#,
        )
        .unwrap();

        let deriver = AnalyticsDeriver::new();
        let record = AnalysisRecord::analyze_file(&deriver, &path);

        assert!(record.error.is_none());
        assert_eq!(record.file_name, "clip.json");
        assert_eq!(record.analytics.primary, EmotionLabel::Angry);
        assert_eq!(record.analytics.confidence_percent, 3.0);

        std::fs::remove_file(&path).ok();
    }
}
