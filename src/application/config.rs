// src/application/config.rs
//
// Run configuration
//
// Loaded from a JSON file (every field optional) or taken from defaults.
// Command line flags are applied on top by the binary.

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{RecognitionLevel, RecognitionOverrides, RecognitionRequest};
use crate::error::{AppError, AppResult};

pub use crate::domain::DEFAULT_LABEL_SUFFIX;
pub const DEFAULT_MANIFEST_FILE_NAME: &str = "ocr-manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamerConfig {
    /// Extensions treated as images, without the dot, compared case-insensitively
    pub image_extensions: Vec<String>,

    /// Suffix of the label image name: `<code>-<label_suffix>.<ext>`
    pub label_suffix: String,

    /// Profile of the fast pass (color keyword fallback)
    #[serde(deserialize_with = "fast_profile")]
    pub fast: RecognitionRequest,

    /// Profile of the accurate pass (code extraction, label detection)
    #[serde(deserialize_with = "accurate_profile")]
    pub accurate: RecognitionRequest,

    /// Suffix a code already used by an earlier group with the group name
    pub disambiguate_collisions: bool,

    /// Manifest looked up in the target directory when none is given
    pub manifest_file_name: String,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            image_extensions: ["jpg", "jpeg", "png", "heic"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            label_suffix: DEFAULT_LABEL_SUFFIX.to_string(),
            fast: RecognitionRequest::fast(),
            accurate: RecognitionRequest::accurate(),
            disambiguate_collisions: true,
            manifest_file_name: DEFAULT_MANIFEST_FILE_NAME.to_string(),
        }
    }
}

// Profile fields missing from the file keep that pass's own defaults
fn fast_profile<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RecognitionRequest, D::Error> {
    RecognitionOverrides::deserialize(deserializer).map(|o| o.apply(RecognitionRequest::fast()))
}

fn accurate_profile<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<RecognitionRequest, D::Error> {
    RecognitionOverrides::deserialize(deserializer).map(|o| o.apply(RecognitionRequest::accurate()))
}

impl RenamerConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read config {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would produce broken names or mislabeled passes
    pub fn validate(&self) -> AppResult<()> {
        if self.label_suffix.trim().is_empty() {
            return Err(AppError::Config("label_suffix must not be empty".to_string()));
        }
        if self
            .label_suffix
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control())
        {
            return Err(AppError::Config(format!(
                "label_suffix {:?} is not usable in a file name",
                self.label_suffix
            )));
        }
        if self.image_extensions.is_empty() {
            return Err(AppError::Config("image_extensions must not be empty".to_string()));
        }
        if self.fast.level != RecognitionLevel::Fast {
            return Err(AppError::Config("fast profile must use the fast level".to_string()));
        }
        if self.accurate.level != RecognitionLevel::Accurate {
            return Err(AppError::Config(
                "accurate profile must use the accurate level".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the file name carries one of the configured image extensions
    pub fn is_image_file(&self, file_name: &str) -> bool {
        let Some(extension) = Path::new(file_name).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.image_extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}
