// src/integrations/ports.rs
//
// Collaborator ports consumed by the services.
//
// Every call here may fail; services downgrade a failure to "no data" for
// the image concerned and keep going.

use std::path::Path;

use crate::domain::{ImageHandle, RecognitionRequest, TextCandidate};
use crate::error::AppResult;

/// Decodes just enough of an image to hand it to the recognizer
#[cfg_attr(test, mockall::automock)]
pub trait ImageLoader: Send + Sync {
    fn load(&self, path: &Path) -> AppResult<ImageHandle>;
}

/// OCR collaborator. Returns candidates in reading order.
#[cfg_attr(test, mockall::automock)]
pub trait TextRecognizer: Send + Sync {
    fn recognize(
        &self,
        image: &ImageHandle,
        request: &RecognitionRequest,
    ) -> AppResult<Vec<TextCandidate>>;
}

/// Reads the raw color label value (0..=7) attached to a file
#[cfg_attr(test, mockall::automock)]
pub trait ColorLabelReader: Send + Sync {
    fn color_label(&self, path: &Path) -> AppResult<u8>;
}
