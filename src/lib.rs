//! Emoscope - Speech emotion dashboard analytics
//!
//! Emoscope derives everything a speech-emotion dashboard displays from the
//! raw output of an upstream classifier: a confidence score plus per-emotion
//! intensity values for the seven categories `angry, calm, disgust, fearful,
//! happy, neutral, sad`.
//!
//! # Overview
//!
//! The classifier is an external producer; this crate owns only the
//! derivation. One pure transformation turns a classification result (or its
//! absence) into ranked emotions, primary/secondary/tertiary labels, a
//! narrative summary sentence, and chart-ready series for a vertical bar
//! chart, a donut, and a horizontal bar chart. Derivation is total: missing
//! input falls back to a default result, out-of-range confidence is clamped,
//! and nothing here can fail or panic.
//!
//! # Quick Start
//!
//! ```
//! use emoscope::{AnalyticsDeriver, ClassificationResult};
//!
//! let json = r#"{
//!     "confidence_level": "Low",
//!     "confidence_score": 3.0,
//!     "emotions": {
//!         "angry": 87.91, "calm": 0.0, "disgust": 12.07, "fearful": 0.0,
//!         "happy": 0.0, "neutral": 0.03, "sad": 0.0
//!     }
//! }"#;
//!
//! let result = ClassificationResult::from_json_str(json)?;
//! let analytics = AnalyticsDeriver::new().derive(Some(&result));
//!
//! assert_eq!(analytics.primary.as_str(), "angry");
//! assert_eq!(analytics.confidence_percent, 3.0);
//! println!("{}", analytics.summary_sentence);
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! # Chart Colors
//!
//! Each label carries a fixed fill color into every series:
//!
//! | Label | Color |
//! |---------|-----------|
//! | angry | `#EF4444` |
//! | calm | `#10B981` |
//! | disgust | `#F59E0B` |
//! | fearful | `#8B5CF6` |
//! | happy | `#3B82F6` |
//! | neutral | `#6B7280` |
//! | sad | `#0EA5E9` |
//!
//! Unknown labels (which chart building itself never produces) resolve to
//! [`analytics::DEFAULT_COLOR`].
//!
//! # Modules
//!
//! - [`classification`]: classifier input model and JSON parsing
//! - [`analytics`]: the derivation core (ranking, summary, chart series)
//! - [`report`]: output formatters (HTML dashboard, JSON, CSV) — `report`
//!   feature

pub mod analytics;
pub mod classification;
#[cfg(feature = "report")]
pub mod report;

pub use analytics::{
    AnalyticsDeriver, ChartSeries, DerivedAnalytics, PieSlice, RankedEmotion, SeriesEntry,
};
pub use classification::{ClassificationResult, EmotionLabel, EmotionScores};
#[cfg(feature = "report")]
pub use report::{AnalysisRecord, Summary};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PUBLIC API TESTS
    // ==========================================================================
    //
    // These tests verify the public API surface is correct and documented.
    // ==========================================================================

    #[test]
    fn test_public_exports() {
        // Verify core types are re-exported from crate root
        let _: EmotionLabel = EmotionLabel::Happy;
        let _fallback = ClassificationResult::fallback();
        let _deriver = AnalyticsDeriver::new();
    }

    #[test]
    fn test_deriver_accessible() {
        // Deriver should be constructible from crate root and total over input
        let deriver = AnalyticsDeriver::default();
        let analytics = deriver.derive(None);
        assert_eq!(analytics.ranked.len(), 7);
    }

    #[test]
    fn test_label_variants() {
        // All seven labels should be accessible
        assert_eq!(EmotionLabel::ALL.len(), 7);
    }
}
