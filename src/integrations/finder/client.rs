// src/integrations/finder/client.rs
//
// Finder color label reader
//
// macOS keeps the label in the 32-byte `com.apple.FinderInfo` extended
// attribute: bits 1..=3 of byte 9 hold the label number (0 none, 1 gray,
// 2 green, 3 purple, 4 blue, 5 yellow, 6 red, 7 orange).
//
// On Linux, copies made by tools that preserve macOS metadata store the same
// bytes under the `user.` namespace, so that name is tried second.
//
// A missing attribute is label 0, not an error.

use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::integrations::ports::ColorLabelReader;

const FINDER_INFO_ATTRIBUTES: [&str; 2] = ["com.apple.FinderInfo", "user.com.apple.FinderInfo"];
const FINDER_FLAGS_BYTE: usize = 9;

pub struct FinderLabelReader;

impl FinderLabelReader {
    pub fn new() -> Self {
        Self
    }

    /// Label number stored in a raw FinderInfo blob
    pub fn label_from_finder_info(bytes: &[u8]) -> u8 {
        bytes
            .get(FINDER_FLAGS_BYTE)
            .map(|flags| (flags >> 1) & 0x07)
            .unwrap_or(0)
    }
}

impl Default for FinderLabelReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorLabelReader for FinderLabelReader {
    fn color_label(&self, path: &Path) -> AppResult<u8> {
        if !path.exists() {
            return Err(AppError::ColorLabel(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let mut last_error = None;
        for attribute in FINDER_INFO_ATTRIBUTES {
            match xattr::get(path, attribute) {
                Ok(Some(bytes)) => return Ok(Self::label_from_finder_info(&bytes)),
                Ok(None) => continue,
                // Unsupported namespace on this platform; try the next name
                Err(e) => last_error = Some(e),
            }
        }

        match last_error {
            Some(e) if !xattr::SUPPORTED_PLATFORM => Err(AppError::ColorLabel(format!(
                "Extended attributes unavailable: {}",
                e
            ))),
            _ => Ok(0),
        }
    }
}
