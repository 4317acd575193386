//! Narrative summary sentence
//!
//! Fills a fixed template with the top three ranked emotions. The text is
//! entirely data-driven: no branch ever inspects which emotion a rank holds,
//! so the copy can never disagree with the ranking it describes.

use crate::analytics::RankedEmotion;

/// Render the dashboard's narrative sentence from a ranked emotion list.
///
/// Scores are formatted to exactly two decimal places. Expects at least three
/// entries — guaranteed by the fixed seven-label domain; fewer is an upstream
/// contract violation.
pub fn sentence(ranked: &[RankedEmotion]) -> String {
    let primary = &ranked[0];
    let secondary = &ranked[1];
    let tertiary = &ranked[2];

    format!(
        "The speaker is primarily expressing {} ({:.2}%), with underlying tones of {} ({:.2}%). \
         There are minimal traces of {} ({:.2}%) expression.",
        primary.label, primary.score, secondary.label, secondary.score, tertiary.label, tertiary.score,
    )
}
