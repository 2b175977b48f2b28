// src/integrations/manifest/client.rs
//
// Manifest backend
//
// Serves canned OCR candidates and color labels from a JSON file keyed by
// file name:
//
// {
//   "IMG_0001.jpg": {
//     "label": 6,
//     "fast":     [{"text": "红标", "confidence": 0.8}],
//     "accurate": [{"text": "A3422300021Y00R14.5", "confidence": 0.9}]
//   }
// }
//
// Files absent from the manifest have label 0 and no candidates. Used for
// offline runs and for driving the whole workflow in tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::{ImageHandle, RecognitionLevel, RecognitionRequest, TextCandidate};
use crate::error::{AppError, AppResult};
use crate::integrations::ports::{ColorLabelReader, TextRecognizer};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub label: u8,

    #[serde(default)]
    pub fast: Vec<TextCandidate>,

    #[serde(default)]
    pub accurate: Vec<TextCandidate>,
}

pub struct ManifestBackend {
    entries: HashMap<String, ManifestEntry>,
}

impl ManifestBackend {
    pub fn new(entries: HashMap<String, ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read manifest {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let entries: HashMap<String, ManifestEntry> = serde_json::from_str(raw)?;
        log::debug!("Manifest loaded with {} entries", entries.len());
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_for(&self, path: &Path) -> Option<&ManifestEntry> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.entries.get(name))
    }
}

impl TextRecognizer for ManifestBackend {
    fn recognize(
        &self,
        image: &ImageHandle,
        request: &RecognitionRequest,
    ) -> AppResult<Vec<TextCandidate>> {
        let Some(entry) = self.entry_for(&image.path) else {
            return Ok(Vec::new());
        };

        let source = match request.level {
            RecognitionLevel::Fast => &entry.fast,
            RecognitionLevel::Accurate => &entry.accurate,
        };

        // The pass that produced a candidate is a fact of the request, not of the file
        Ok(source
            .iter()
            .map(|candidate| {
                TextCandidate::new(
                    candidate.text.clone(),
                    candidate.confidence,
                    candidate.bounding_box,
                    request.level,
                )
            })
            .collect())
    }
}

impl ColorLabelReader for ManifestBackend {
    fn color_label(&self, path: &Path) -> AppResult<u8> {
        Ok(self.entry_for(path).map(|entry| entry.label).unwrap_or(0))
    }
}
