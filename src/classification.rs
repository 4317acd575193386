//! Classifier input model
//!
//! The upstream speech-emotion classifier hands results across as JSON:
//!
//! ```json
//! {
//!   "confidence_level": "Low",
//!   "confidence_score": 3.0,
//!   "emotions": {
//!     "angry": 87.91,
//!     "calm": 0.0,
//!     "disgust": 12.07,
//!     "fearful": 0.0,
//!     "happy": 0.0,
//!     "neutral": 0.03,
//!     "sad": 0.0
//!   }
//! }
//! ```
//!
//! The emotion set is closed: exactly these seven labels, always present.
//! Scores are independent per-class intensities in 0-100 — they are NOT a
//! probability distribution and are not guaranteed to sum to 100.
//!
//! A payload missing one of the seven labels is rejected at deserialization
//! time; that is a contract violation by the classifier, not something the
//! derivation layer recovers from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The seven emotion categories the classifier can produce.
///
/// Declaration order is the canonical order (the classifier payload's key
/// order) and doubles as the tie-break order when two emotions score equally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Angry,
    Calm,
    Disgust,
    Fearful,
    Happy,
    Neutral,
    Sad,
}

impl EmotionLabel {
    /// All seven labels in canonical order.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Angry,
        EmotionLabel::Calm,
        EmotionLabel::Disgust,
        EmotionLabel::Fearful,
        EmotionLabel::Happy,
        EmotionLabel::Neutral,
        EmotionLabel::Sad,
    ];

    /// Lowercase name, matching the classifier's JSON keys.
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionLabel::Angry => "angry",
            EmotionLabel::Calm => "calm",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fearful => "fearful",
            EmotionLabel::Happy => "happy",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Sad => "sad",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-emotion intensity scores, one field per label.
///
/// Mirrors the classifier's `emotions` JSON object field-for-field so serde
/// enforces the closed seven-label domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub angry: f64,
    pub calm: f64,
    pub disgust: f64,
    pub fearful: f64,
    pub happy: f64,
    pub neutral: f64,
    pub sad: f64,
}

impl EmotionScores {
    /// Score for a single label.
    pub fn get(&self, label: EmotionLabel) -> f64 {
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

    /// `(label, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        EmotionLabel::ALL.iter().map(move |&label| (label, self.get(label)))
    }

    /// Raw total across all seven labels. Not guaranteed to be 100.
    pub fn total(&self) -> f64 {
        EmotionLabel::ALL.iter().map(|&label| self.get(label)).sum()
    }
}

/// One classification result from the upstream classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Classifier's own confidence label, e.g. "High", "Low", "N/A".
    pub confidence_level: String,
    /// Confidence in the top prediction as a percentage. Expected in 0-100
    /// but not guaranteed bounded by the producer.
    pub confidence_score: f64,
    pub emotions: EmotionScores,
}

impl ClassificationResult {
    /// The substitute result used when no classifier output is available:
    /// all-zero emotions, confidence "N/A" at 0.
    ///
    /// The dashboard must always render something, so a missing result is
    /// recovered locally with this value rather than surfaced as an error.
    pub fn fallback() -> Self {
        Self {
            confidence_level: "N/A".to_string(),
            confidence_score: 0.0,
            emotions: EmotionScores::default(),
        }
    }

    /// Parse a classifier result from a JSON string.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read and parse a classifier result from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
