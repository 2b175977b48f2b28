use serde::{Deserialize, Serialize};

/// A single line of text reported by the OCR collaborator.
/// Candidates are facts about an image and are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCandidate {
    /// Raw recognized text (may carry surrounding whitespace)
    pub text: String,

    /// Recognizer confidence (0.0 to 1.0)
    pub confidence: f64,

    /// Where the text sits in the image
    #[serde(default)]
    pub bounding_box: BoundingBox,

    /// Which recognition pass produced this candidate
    #[serde(default)]
    pub recognition_level: RecognitionLevel,
}

/// Normalized rectangle, origin top-left, all components in 0..1
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// OCR pass: fast favours latency, accurate favours quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionLevel {
    #[default]
    Fast,
    Accurate,
}

impl TextCandidate {
    pub fn new(
        text: impl Into<String>,
        confidence: f64,
        bounding_box: BoundingBox,
        recognition_level: RecognitionLevel,
    ) -> Self {
        Self {
            text: text.into(),
            confidence: Self::normalize_confidence(confidence),
            bounding_box,
            recognition_level,
        }
    }

    /// Candidate without position information
    pub fn fast(text: impl Into<String>, confidence: f64) -> Self {
        Self::new(text, confidence, BoundingBox::default(), RecognitionLevel::Fast)
    }

    pub fn accurate(text: impl Into<String>, confidence: f64) -> Self {
        Self::new(text, confidence, BoundingBox::default(), RecognitionLevel::Accurate)
    }

    /// Clamps into 0..=1; NaN and infinities count as no confidence
    pub fn normalize_confidence(value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Text with surrounding whitespace and newlines removed
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn is_accurate(&self) -> bool {
        self.recognition_level == RecognitionLevel::Accurate
    }
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

impl std::fmt::Display for RecognitionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognitionLevel::Fast => write!(f, "fast"),
            RecognitionLevel::Accurate => write!(f, "accurate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(TextCandidate::fast("a", 1.7).confidence, 1.0);
        assert_eq!(TextCandidate::fast("a", -0.2).confidence, 0.0);
        assert_eq!(TextCandidate::fast("a", 0.42).confidence, 0.42);
    }

    #[test]
    fn test_non_finite_confidence_is_zero() {
        assert_eq!(TextCandidate::fast("a", f64::NAN).confidence, 0.0);
        assert_eq!(TextCandidate::accurate("a", f64::INFINITY).confidence, 0.0);
        assert_eq!(TextCandidate::accurate("a", f64::NEG_INFINITY).confidence, 0.0);
    }
}
