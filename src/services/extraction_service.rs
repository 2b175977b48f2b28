// src/services/extraction_service.rs
//
// Extraction Service - reads product codes from images
//
// Per image: load → fast pass → accurate pass → merge → pattern scoring.
//
// CRITICAL RULES:
// - Collaborator failures never abort: a failed load or recognition means
//   "no candidates" for that image, reported as CollaboratorFailed
// - Scoring is deterministic: same candidates → same code
// - No code found is a normal outcome (None), not an error
// - Does NOT touch the filesystem beyond what the loader reads

use std::path::Path;
use std::sync::Arc;

use crate::domain::{
    default_patterns, merge_candidates, CodePattern, ColorMarker, ExtractedCode, ImageHandle,
    ProductInfo, RecognitionRequest, TextCandidate,
};
use crate::events::{CodeExtracted, CollaboratorFailed, EventBus};
use crate::integrations::{ImageLoader, TextRecognizer};

// ============================================================================
// EXTRACTION SERVICE
// ============================================================================

pub struct ExtractionService {
    image_loader: Arc<dyn ImageLoader>,
    recognizer: Arc<dyn TextRecognizer>,
    event_bus: Arc<EventBus>,
    fast_profile: RecognitionRequest,
    accurate_profile: RecognitionRequest,
    rules: ExtractionRules,
}

impl ExtractionService {
    pub fn new(
        image_loader: Arc<dyn ImageLoader>,
        recognizer: Arc<dyn TextRecognizer>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            image_loader,
            recognizer,
            event_bus,
            fast_profile: RecognitionRequest::fast(),
            accurate_profile: RecognitionRequest::accurate(),
            rules: ExtractionRules::default(),
        }
    }

    /// Replaces the recognition profiles (from configuration)
    pub fn with_profiles(mut self, fast: RecognitionRequest, accurate: RecognitionRequest) -> Self {
        self.fast_profile = fast;
        self.accurate_profile = accurate;
        self
    }

    pub fn rules(&self) -> &ExtractionRules {
        &self.rules
    }

    /// Full analysis of one image. None when the image yields no code.
    pub fn analyze(&self, path: &Path) -> Option<ProductInfo> {
        let image = self.load(path)?;

        let fast = self.recognize(&image, &self.fast_profile);
        let accurate = self.recognize(&image, &self.accurate_profile);
        let candidates = merge_candidates(&fast, &accurate);

        log::debug!(
            "{}: {} fast, {} accurate, {} merged candidates",
            path.display(),
            fast.len(),
            accurate.len(),
            candidates.len()
        );

        let extracted = self.rules.extract(&candidates)?;
        let marker = ColorMarker::detect(
            &candidates.iter().map(|c| c.trimmed()).collect::<Vec<_>>(),
        );

        self.event_bus.emit(CodeExtracted::new(
            path.to_path_buf(),
            extracted.code.clone(),
            extracted.confidence,
            extracted.method.clone(),
            candidates.len(),
        ));

        Some(ProductInfo::new(extracted, marker, path.to_path_buf(), candidates))
    }

    /// Code found by the accurate pass alone (label image detection)
    pub fn accurate_code(&self, path: &Path) -> Option<ExtractedCode> {
        let image = self.load(path)?;
        let candidates = self.recognize(&image, &self.accurate_profile);
        self.rules.extract(&candidates)
    }

    /// Texts of the fast pass (color keyword fallback)
    pub fn fast_texts(&self, path: &Path) -> Vec<String> {
        match self.load(path) {
            Some(image) => self
                .recognize(&image, &self.fast_profile)
                .into_iter()
                .map(|c| c.trimmed().to_string())
                .collect(),
            None => Vec::new(),
        }
    }

    fn load(&self, path: &Path) -> Option<ImageHandle> {
        match self.image_loader.load(path) {
            Ok(image) => Some(image),
            Err(e) => {
                self.event_bus.emit(CollaboratorFailed::new(
                    path.to_path_buf(),
                    "image_loader",
                    e.to_string(),
                ));
                None
            }
        }
    }

    fn recognize(&self, image: &ImageHandle, request: &RecognitionRequest) -> Vec<TextCandidate> {
        match self.recognizer.recognize(image, request) {
            Ok(candidates) => candidates,
            Err(e) => {
                self.event_bus.emit(CollaboratorFailed::new(
                    image.path.clone(),
                    "text_recognizer",
                    format!("{} pass: {}", request.level, e),
                ));
                Vec::new()
            }
        }
    }
}

// ============================================================================
// EXTRACTION RULES
// ============================================================================

/// Pattern table plus the scoring formula.
///
/// ```text
/// score = confidence      * 0.35
///       + priority score  * 0.35   ((8 - priority) / 7)
///       + length score    * 0.20   (min(chars / 20, 1))
///       + 0.10 if the candidate came from the accurate pass
///       + 0.15 if the full code pattern matched
/// ```
pub struct ExtractionRules {
    patterns: Vec<CodePattern>,
}

const CONFIDENCE_WEIGHT: f64 = 0.35;
const PRIORITY_WEIGHT: f64 = 0.35;
const LENGTH_WEIGHT: f64 = 0.20;
const ACCURATE_BONUS: f64 = 0.10;
const FULL_CODE_BONUS: f64 = 0.15;
const FULL_LENGTH: f64 = 20.0;

impl Default for ExtractionRules {
    fn default() -> Self {
        Self::with_patterns(default_patterns())
    }
}

impl ExtractionRules {
    pub fn with_patterns(mut patterns: Vec<CodePattern>) -> Self {
        patterns.sort_by_key(|p| p.priority);
        Self { patterns }
    }

    pub fn patterns(&self) -> &[CodePattern] {
        &self.patterns
    }

    /// Score of a (candidate, pattern) pair, whether or not the pattern matches
    pub fn score(&self, candidate: &TextCandidate, pattern: &CodePattern) -> f64 {
        let length = candidate.trimmed().chars().count() as f64;
        let length_score = (length / FULL_LENGTH).min(1.0);
        let priority_score = (8.0 - pattern.priority as f64) / 7.0;
        let method_bonus = if candidate.is_accurate() { ACCURATE_BONUS } else { 0.0 };
        let format_bonus = if pattern.is_full_code() { FULL_CODE_BONUS } else { 0.0 };
        let confidence = TextCandidate::normalize_confidence(candidate.confidence);

        confidence * CONFIDENCE_WEIGHT
            + priority_score * PRIORITY_WEIGHT
            + length_score * LENGTH_WEIGHT
            + method_bonus
            + format_bonus
    }

    /// Best scoring matching pair; ties keep the first pair found
    pub fn extract(&self, candidates: &[TextCandidate]) -> Option<ExtractedCode> {
        let mut best: Option<ExtractedCode> = None;

        for candidate in candidates {
            let text = candidate.trimmed();
            if text.is_empty() {
                continue;
            }

            for pattern in &self.patterns {
                if !pattern.matches(text) {
                    continue;
                }

                let score = self.score(candidate, pattern);
                let better = best.as_ref().map_or(true, |current| score > current.score);
                if better {
                    best = Some(ExtractedCode {
                        code: text.to_string(),
                        confidence: TextCandidate::normalize_confidence(candidate.confidence),
                        method: pattern.name().to_string(),
                        score,
                    });
                }
            }
        }

        best
    }
}
