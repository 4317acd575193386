//! Chart series construction
//!
//! Turns the ranked emotion list into the three series shapes the dashboard
//! renders: vertical bar, pie/donut, and horizontal bar. Every entry carries
//! its fill color from a fixed label→color table, so presentation code never
//! picks colors itself.
//!
//! The donut follows a "percent of 100" circumference convention: slice `i`
//! spans `value` units out of a 100-unit circumference, starting at a
//! rotational offset equal to the negated sum of all preceding slices. Scores
//! are NOT renormalized — if they sum to something other than 100 the slices
//! will not close the full circle. That matches the upstream producer's
//! contract (independent class scores, not a distribution) and is accepted
//! behavior, not corrected here.

use crate::analytics::RankedEmotion;
use serde::Serialize;

/// Fill color for labels outside the known seven. Chart building only ever
/// sees known labels; this exists so a color lookup can never fail.
pub const DEFAULT_COLOR: &str = "#9CA3AF";

/// Fixed fill color for an emotion label name.
///
/// The table covers exactly the seven known labels; anything else gets
/// [`DEFAULT_COLOR`].
pub fn color_for(label: &str) -> &'static str {
    match label {
        "angry" => "#EF4444",
        "calm" => "#10B981",
        "disgust" => "#F59E0B",
        "fearful" => "#8B5CF6",
        "happy" => "#3B82F6",
        "neutral" => "#6B7280",
        "sad" => "#0EA5E9",
        _ => DEFAULT_COLOR,
    }
}

/// One bar in a bar or horizontal-bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesEntry {
    pub name: &'static str,
    pub value: f64,
    pub fill: &'static str,
}

/// One donut slice.
///
/// `offset` is the slice's rotational start: the negated cumulative sum of
/// all preceding slices' values (`offset[0]` is always 0). Raw scores are
/// used as-is, so a total other than 100 leaves a gap or overlap in the ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: f64,
    pub fill: &'static str,
    pub offset: f64,
}

/// The three chart-ready series derived from one ranked emotion list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub bar: Vec<SeriesEntry>,
    pub pie: Vec<PieSlice>,
    pub horizontal_bar: Vec<SeriesEntry>,
}

/// Build all three series from a ranked emotion list.
///
/// Entries keep ranked order, so the horizontal bar chart reads
/// most-intense-first and the donut's first slice is the primary emotion
/// (whose label is also what the donut shows at its center).
pub fn build_series(ranked: &[RankedEmotion]) -> ChartSeries {
    let bars: Vec<SeriesEntry> = ranked
        .iter()
        .map(|r| SeriesEntry {
            name: r.label.as_str(),
            value: r.score,
            fill: color_for(r.label.as_str()),
        })
        .collect();

    let mut pie = Vec::with_capacity(ranked.len());
    let mut preceding = 0.0;
    for r in ranked {
        pie.push(PieSlice {
            name: r.label.as_str(),
            value: r.score,
            fill: color_for(r.label.as_str()),
            offset: -preceding,
        });
        preceding += r.score;
    }

    ChartSeries {
        horizontal_bar: bars.clone(),
        bar: bars,
        pie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::rank_emotions;
    use crate::classification::{EmotionLabel, EmotionScores};

    fn ranked_fixture() -> Vec<RankedEmotion> {
        rank_emotions(&EmotionScores {
            angry: 87.91,
            calm: 0.0,
            disgust: 12.07,
            fearful: 0.0,
            happy: 0.0,
            neutral: 0.03,
            sad: 0.0,
        })
    }

    // ==========================================================================
    // COLOR TABLE TESTS
    // ==========================================================================

    #[test]
    fn test_color_table_covers_all_labels() {
        for label in EmotionLabel::ALL {
            assert_ne!(
                color_for(label.as_str()),
                DEFAULT_COLOR,
                "{} should have its own color",
                label
            );
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        let mut colors: Vec<&str> = EmotionLabel::ALL.iter().map(|l| color_for(l.as_str())).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 7, "each label should have a distinct color");
    }

    #[test]
    fn test_unknown_label_gets_default_color() {
        assert_eq!(color_for("boredom"), DEFAULT_COLOR);
        assert_eq!(color_for(""), DEFAULT_COLOR);
    }

    // ==========================================================================
    // SERIES SHAPE TESTS
    // ==========================================================================
    //
    // All three series carry one entry per known label, in ranked order, with
    // the input scores unchanged.
    // ==========================================================================

    #[test]
    fn test_series_have_seven_entries() {
        let series = build_series(&ranked_fixture());

        assert_eq!(series.bar.len(), 7);
        assert_eq!(series.pie.len(), 7);
        assert_eq!(series.horizontal_bar.len(), 7);
    }

    #[test]
    fn test_series_preserve_ranked_order_and_scores() {
        let ranked = ranked_fixture();
        let series = build_series(&ranked);

        for (i, r) in ranked.iter().enumerate() {
            assert_eq!(series.bar[i].name, r.label.as_str());
            assert_eq!(series.bar[i].value, r.score);
            assert_eq!(series.horizontal_bar[i].name, r.label.as_str());
            assert_eq!(series.pie[i].value, r.score);
        }

        // Ranked order puts the most intense emotion first
        assert_eq!(series.horizontal_bar[0].name, "angry");
    }

    #[test]
    fn test_series_carry_table_colors() {
        let series = build_series(&ranked_fixture());

        for entry in &series.bar {
            assert_eq!(entry.fill, color_for(entry.name));
        }
    }

    // ==========================================================================
    // PIE OFFSET TESTS
    // ==========================================================================

    #[test]
    fn test_first_slice_offset_is_zero() {
        let series = build_series(&ranked_fixture());
        assert_eq!(series.pie[0].offset, 0.0);
    }

    #[test]
    fn test_offsets_are_negated_prefix_sums() {
        let ranked = ranked_fixture();
        let series = build_series(&ranked);

        for i in 0..series.pie.len() {
            let expected: f64 = ranked[..i].iter().map(|r| r.score).sum();
            assert!(
                (series.pie[i].offset + expected).abs() < 1e-9,
                "offset[{}] should be {}, got {}",
                i,
                -expected,
                series.pie[i].offset
            );
        }
    }

    #[test]
    fn test_consecutive_offsets_differ_by_previous_score() {
        let series = build_series(&ranked_fixture());

        for i in 1..series.pie.len() {
            let diff = series.pie[i].offset - series.pie[i - 1].offset;
            assert!(
                (diff + series.pie[i - 1].value).abs() < 1e-9,
                "offset[{}] - offset[{}] should be -{}",
                i,
                i - 1,
                series.pie[i - 1].value
            );
        }
    }

    #[test]
    fn test_non_normalized_totals_are_preserved() {
        // SCENARIO: scores sum to 120, not 100. The ring will not close; the
        // builder must pass the raw values through rather than rescale them.
        let ranked = rank_emotions(&EmotionScores {
            angry: 60.0,
            calm: 30.0,
            disgust: 30.0,
            fearful: 0.0,
            happy: 0.0,
            neutral: 0.0,
            sad: 0.0,
        });
        let series = build_series(&ranked);

        let total: f64 = series.pie.iter().map(|s| s.value).sum();
        assert_eq!(total, 120.0);
        // Last slice starts at -(sum of the first six)
        assert_eq!(series.pie[6].offset, -120.0);
    }

    #[test]
    fn test_all_zero_scores() {
        let ranked = rank_emotions(&EmotionScores::default());
        let series = build_series(&ranked);

        assert!(series.pie.iter().all(|s| s.offset == 0.0));
        assert!(series.bar.iter().all(|s| s.value == 0.0));
    }
}
