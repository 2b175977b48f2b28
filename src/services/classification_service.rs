// src/services/classification_service.rs
//
// Classification Service - color marker per image
//
// Primary source: the color label attached to the file.
// Fallback: color keywords in the fast OCR pass, consulted only when the
// label is absent or unreadable.
//
// CRITICAL RULES:
// - Never fails: an unreadable label and a failed OCR pass mean "none"
// - Deterministic and idempotent for an unchanged file

use std::path::Path;
use std::sync::Arc;

use crate::domain::ColorMarker;
use crate::events::{CollaboratorFailed, EventBus, ImageClassified};
use crate::integrations::ColorLabelReader;
use crate::services::extraction_service::ExtractionService;

/// Where a marker came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSource {
    ColorLabel,
    OcrKeyword,
    Unmarked,
}

impl std::fmt::Display for MarkerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerSource::ColorLabel => write!(f, "color_label"),
            MarkerSource::OcrKeyword => write!(f, "ocr_keyword"),
            MarkerSource::Unmarked => write!(f, "none"),
        }
    }
}

pub struct ClassificationService {
    label_reader: Arc<dyn ColorLabelReader>,
    extraction: Arc<ExtractionService>,
    event_bus: Arc<EventBus>,
}

impl ClassificationService {
    pub fn new(
        label_reader: Arc<dyn ColorLabelReader>,
        extraction: Arc<ExtractionService>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            label_reader,
            extraction,
            event_bus,
        }
    }

    /// Marker used for segmentation
    pub fn classify(&self, path: &Path) -> ColorMarker {
        let (marker, source) = self.classify_with_source(path);
        self.event_bus.emit(ImageClassified::new(
            path.to_path_buf(),
            marker.to_string(),
            source.to_string(),
        ));
        marker
    }

    pub fn classify_with_source(&self, path: &Path) -> (ColorMarker, MarkerSource) {
        let labeled = self.label_marker(path);
        if labeled.is_present() {
            return (labeled, MarkerSource::ColorLabel);
        }

        let texts = self.extraction.fast_texts(path);
        let detected = ColorMarker::detect(&texts);
        if detected.is_present() {
            (detected, MarkerSource::OcrKeyword)
        } else {
            (ColorMarker::None, MarkerSource::Unmarked)
        }
    }

    /// Marker from the file's color label only; failures read as none
    pub fn label_marker(&self, path: &Path) -> ColorMarker {
        match self.label_reader.color_label(path) {
            Ok(value) => ColorMarker::from_label_value(value),
            Err(e) => {
                self.event_bus.emit(CollaboratorFailed::new(
                    path.to_path_buf(),
                    "color_label",
                    e.to_string(),
                ));
                ColorMarker::None
            }
        }
    }
}
