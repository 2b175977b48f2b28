// src/services/test_support.rs
//
// Scripted collaborator doubles shared by the service test suites.
// Images are addressed by file name; every path lives under /shots.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{BoundingBox, ImageHandle, RecognitionLevel, RecognitionRequest, TextCandidate};
use crate::error::AppError;
use crate::events::EventBus;
use crate::integrations::{MockColorLabelReader, MockImageLoader, MockTextRecognizer};
use crate::services::classification_service::ClassificationService;
use crate::services::extraction_service::ExtractionService;

pub type Lines = &'static [(&'static str, f64)];

/// OCR output of one image: (file name, fast pass, accurate pass)
pub type ScriptLine = (&'static str, Lines, Lines);

pub fn shot(name: &str) -> PathBuf {
    PathBuf::from("/shots").join(name)
}

pub fn shots(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| shot(n)).collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Loads every image except the named ones
pub fn loader_failing_on(broken: &[&'static str]) -> MockImageLoader {
    let broken: Vec<String> = broken.iter().map(|n| n.to_string()).collect();
    let mut loader = MockImageLoader::new();
    loader.expect_load().returning(move |path| {
        if broken.contains(&file_name(path)) {
            Err(AppError::Other(format!("cannot decode {}", path.display())))
        } else {
            Ok(ImageHandle::new(path.to_path_buf(), 1000, 1000))
        }
    });
    loader
}

pub fn loader() -> MockImageLoader {
    loader_failing_on(&[])
}

/// Answers each pass from the script; unknown images have no text
pub fn recognizer(script: &[ScriptLine]) -> MockTextRecognizer {
    let table: HashMap<String, (Lines, Lines)> = script
        .iter()
        .map(|(name, fast, accurate)| (name.to_string(), (*fast, *accurate)))
        .collect();

    let mut recognizer = MockTextRecognizer::new();
    recognizer
        .expect_recognize()
        .returning(move |image: &ImageHandle, request: &RecognitionRequest| {
            let lines: Lines = match (table.get(&file_name(&image.path)), request.level) {
                (Some((fast, _)), RecognitionLevel::Fast) => *fast,
                (Some((_, accurate)), RecognitionLevel::Accurate) => *accurate,
                (None, _) => &[],
            };
            Ok(lines
                .iter()
                .map(|(text, confidence)| {
                    TextCandidate::new(*text, *confidence, BoundingBox::default(), request.level)
                })
                .collect())
        });
    recognizer
}

/// Every recognition call fails
pub fn broken_recognizer() -> MockTextRecognizer {
    let mut recognizer = MockTextRecognizer::new();
    recognizer
        .expect_recognize()
        .returning(|_, _| Err(AppError::Recognition("engine offline".to_string())));
    recognizer
}

/// Color label values by file name; unknown files are unlabeled
pub fn labels(values: &[(&'static str, u8)]) -> MockColorLabelReader {
    let table: HashMap<String, u8> = values.iter().map(|(n, v)| (n.to_string(), *v)).collect();
    let mut reader = MockColorLabelReader::new();
    reader
        .expect_color_label()
        .returning(move |path| Ok(table.get(&file_name(path)).copied().unwrap_or(0)));
    reader
}

pub fn extraction(
    loader: MockImageLoader,
    recognizer: MockTextRecognizer,
    bus: &Arc<EventBus>,
) -> Arc<ExtractionService> {
    Arc::new(ExtractionService::new(
        Arc::new(loader),
        Arc::new(recognizer),
        Arc::clone(bus),
    ))
}

pub fn classification(
    reader: MockColorLabelReader,
    extraction: &Arc<ExtractionService>,
    bus: &Arc<EventBus>,
) -> Arc<ClassificationService> {
    Arc::new(ClassificationService::new(
        Arc::new(reader),
        Arc::clone(extraction),
        Arc::clone(bus),
    ))
}
