//! Analytics derivation
//!
//! The core of the crate: a pure, total transformation from one classifier
//! result (or its absence) to everything the dashboard displays.
//!
//! # How Derivation Works
//!
//! ```text
//! ClassificationResult ──► clamp confidence ──► rank emotions ──► DerivedAnalytics
//!        (or absent:            [0,100]          desc by score,      ├─ primary/secondary/tertiary
//!         fallback)                              canonical ties      ├─ summary sentence
//!                                                                    └─ bar / pie / hbar series
//! ```
//!
//! `derive` never fails. Missing input is replaced by the deriver's fallback
//! result, out-of-range confidence is clamped, and non-finite confidence
//! normalizes to 0 — all local recoveries, never surfaced as errors. The only
//! unguarded precondition is the closed seven-label domain itself, which the
//! input types enforce at the deserialization boundary.
//!
//! The output is a value, not an entity: computed fresh per call, owning no
//! state, safe to call from anywhere without synchronization.

pub mod charts;
pub mod summary;

use crate::classification::{ClassificationResult, EmotionLabel, EmotionScores};
use serde::Serialize;

pub use charts::{build_series, color_for, ChartSeries, PieSlice, SeriesEntry, DEFAULT_COLOR};

/// One emotion with its score, as an entry of the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedEmotion {
    pub label: EmotionLabel,
    pub score: f64,
}

/// Everything the dashboard displays, derived from one classification result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedAnalytics {
    /// Confidence clamped into 0-100 for the gauge.
    pub confidence_percent: f64,
    /// Classifier's confidence label, passed through untouched.
    pub confidence_level: String,
    /// All seven emotions sorted descending by score; equal scores keep
    /// canonical label order.
    pub ranked: Vec<RankedEmotion>,
    /// Label of `ranked[0]`. Also the donut's center label.
    pub primary: EmotionLabel,
    /// Label of `ranked[1]`.
    pub secondary: EmotionLabel,
    /// Label of `ranked[2]`.
    pub tertiary: EmotionLabel,
    /// Narrative sentence for the summary card.
    pub summary_sentence: String,
    pub bar_series: Vec<SeriesEntry>,
    pub pie_series: Vec<PieSlice>,
    pub horizontal_bar_series: Vec<SeriesEntry>,
}

/// Derives dashboard analytics from classifier results.
///
/// Holds the fallback result substituted when input is absent; beyond that it
/// is stateless and callable from any thread.
///
/// ```
/// use emoscope::{AnalyticsDeriver, ClassificationResult};
///
/// let deriver = AnalyticsDeriver::new();
///
/// // Absent input still renders: the fallback result is substituted
/// let analytics = deriver.derive(None);
/// assert_eq!(analytics.confidence_level, "N/A");
/// assert_eq!(analytics.ranked.len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticsDeriver {
    fallback: ClassificationResult,
}

impl AnalyticsDeriver {
    pub fn new() -> Self {
        Self {
            fallback: ClassificationResult::fallback(),
        }
    }

    /// Replace the fallback substituted for absent input.
    pub fn with_fallback(mut self, fallback: ClassificationResult) -> Self {
        self.fallback = fallback;
        self
    }

    /// Derive all dashboard values from a classifier result.
    ///
    /// Total: any input, including `None`, yields a fully-populated
    /// `DerivedAnalytics`.
    pub fn derive(&self, result: Option<&ClassificationResult>) -> DerivedAnalytics {
        let result = result.unwrap_or(&self.fallback);

        let ranked = rank_emotions(&result.emotions);
        let summary_sentence = summary::sentence(&ranked);
        let ChartSeries { bar, pie, horizontal_bar } = charts::build_series(&ranked);

        DerivedAnalytics {
            confidence_percent: clamp_confidence(result.confidence_score),
            confidence_level: result.confidence_level.clone(),
            primary: ranked[0].label,
            secondary: ranked[1].label,
            tertiary: ranked[2].label,
            summary_sentence,
            bar_series: bar,
            pie_series: pie,
            horizontal_bar_series: horizontal_bar,
            ranked,
        }
    }
}

impl Default for AnalyticsDeriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort the emotion set descending by score.
///
/// Equal scores order by canonical label order (`EmotionLabel::ALL`). The
/// tie-break is explicit in the comparator rather than relying on sort
/// stability, and `total_cmp` keeps the ordering well-defined for any `f64`.
pub fn rank_emotions(scores: &EmotionScores) -> Vec<RankedEmotion> {
    let mut ranked: Vec<RankedEmotion> = scores
        .iter()
        .map(|(label, score)| RankedEmotion { label, score })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.label.cmp(&b.label)));
    ranked
}

/// Clamp a confidence score into 0-100 for display.
///
/// The producer documents 0-100 but does not guarantee it; non-finite values
/// normalize to 0 so the gauge invariant holds for literally any `f64`.
fn clamp_confidence(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}
