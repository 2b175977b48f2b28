use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::entity::RecognitionLevel;

/// Parameters handed to the OCR collaborator for one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionRequest {
    pub level: RecognitionLevel,

    /// BCP-47 style tags, e.g. `en-US`, `zh-Hans`
    pub languages: Vec<String>,

    /// Smallest text height to report, as a fraction of the image height
    pub minimum_text_height: f64,

    /// Alternatives to report per detected text region
    pub max_candidates: usize,

    pub uses_language_correction: bool,
}

impl RecognitionRequest {
    /// Low-latency profile, used for color keyword fallback
    pub fn fast() -> Self {
        Self {
            level: RecognitionLevel::Fast,
            languages: default_languages(),
            minimum_text_height: 0.02,
            max_candidates: 3,
            uses_language_correction: false,
        }
    }

    /// High-accuracy profile, used for code extraction and label detection
    pub fn accurate() -> Self {
        Self {
            level: RecognitionLevel::Accurate,
            languages: default_languages(),
            minimum_text_height: 0.01,
            max_candidates: 5,
            uses_language_correction: true,
        }
    }
}

impl Default for RecognitionRequest {
    fn default() -> Self {
        Self::fast()
    }
}

/// Partial profile read from configuration.
///
/// Missing fields keep the value of the profile it is applied to, so a file
/// overriding only `languages` of the accurate pass still gets the accurate
/// defaults for everything else.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecognitionOverrides {
    pub level: Option<RecognitionLevel>,
    pub languages: Option<Vec<String>>,
    pub minimum_text_height: Option<f64>,
    pub max_candidates: Option<usize>,
    pub uses_language_correction: Option<bool>,
}

impl RecognitionOverrides {
    pub fn apply(self, base: RecognitionRequest) -> RecognitionRequest {
        RecognitionRequest {
            level: self.level.unwrap_or(base.level),
            languages: self.languages.unwrap_or(base.languages),
            minimum_text_height: self.minimum_text_height.unwrap_or(base.minimum_text_height),
            max_candidates: self.max_candidates.unwrap_or(base.max_candidates),
            uses_language_correction: self
                .uses_language_correction
                .unwrap_or(base.uses_language_correction),
        }
    }
}

fn default_languages() -> Vec<String> {
    vec!["en-US".to_string(), "zh-Hans".to_string()]
}

/// A decodable image, as reported by the image loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ImageHandle {
    pub fn new(path: PathBuf, width: u32, height: u32) -> Self {
        Self { path, width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_keep_base() {
        let applied = RecognitionOverrides::default().apply(RecognitionRequest::accurate());
        assert_eq!(applied, RecognitionRequest::accurate());
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = RecognitionOverrides {
            max_candidates: Some(1),
            ..RecognitionOverrides::default()
        };

        let applied = overrides.apply(RecognitionRequest::accurate());

        assert_eq!(applied.max_candidates, 1);
        assert_eq!(applied.level, RecognitionLevel::Accurate);
        assert!((applied.minimum_text_height - 0.01).abs() < f64::EPSILON);
        assert!(applied.uses_language_correction);
    }
}
