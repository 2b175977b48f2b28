// src/application/state.rs
//
// Wiring of collaborators and services for one run.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::config::RenamerConfig;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{
    ColorLabelReader, FinderLabelReader, ImageCrateLoader, ManifestBackend, TesseractRecognizer,
    TextRecognizer,
};
use crate::repositories::{ImageRepository, LocalImageRepository};
use crate::services::{
    ClassificationService, ExtractionService, GroupingService, ProcessingService, RenameService,
    ResolutionService,
};

/// Where OCR text and color labels come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// tesseract for OCR, Finder metadata for color labels
    Tesseract,

    /// Everything from a JSON manifest
    Manifest(PathBuf),
}

/// All fields are Arc-wrapped; services share their collaborators.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub extraction_service: Arc<ExtractionService>,
    pub classification_service: Arc<ClassificationService>,
    pub grouping_service: Arc<GroupingService>,
    pub resolution_service: Arc<ResolutionService>,
    pub rename_service: Arc<RenameService>,
    pub processing_service: Arc<ProcessingService>,
}

impl AppState {
    pub fn build(
        config: &RenamerConfig,
        backend: &Backend,
        dry_run: bool,
        event_bus: Arc<EventBus>,
    ) -> AppResult<Self> {
        config.validate()?;

        let recognizer: Arc<dyn TextRecognizer>;
        let label_reader: Arc<dyn ColorLabelReader>;
        match backend {
            Backend::Tesseract => {
                recognizer = Arc::new(TesseractRecognizer::new());
                label_reader = Arc::new(FinderLabelReader::new());
            }
            Backend::Manifest(path) => {
                let manifest = Arc::new(ManifestBackend::from_file(path)?);
                log::info!(
                    "Using manifest {} ({} entries)",
                    path.display(),
                    manifest.len()
                );
                recognizer = manifest.clone();
                label_reader = manifest;
            }
        }

        let repository: Arc<dyn ImageRepository> = Arc::new(LocalImageRepository::new());

        let extraction_service = Arc::new(
            ExtractionService::new(Arc::new(ImageCrateLoader::new()), recognizer, Arc::clone(&event_bus))
                .with_profiles(config.fast.clone(), config.accurate.clone()),
        );

        let classification_service = Arc::new(ClassificationService::new(
            label_reader,
            Arc::clone(&extraction_service),
            Arc::clone(&event_bus),
        ));

        let grouping_service = Arc::new(GroupingService::new(
            Arc::clone(&classification_service),
            Arc::clone(&event_bus),
        ));

        let resolution_service = Arc::new(
            ResolutionService::new(Arc::clone(&extraction_service), Arc::clone(&event_bus))
                .with_disambiguation(config.disambiguate_collisions),
        );

        let rename_service = Arc::new(
            RenameService::new(
                Arc::clone(&repository),
                Arc::clone(&classification_service),
                Arc::clone(&extraction_service),
                Arc::clone(&event_bus),
            )
            .with_label_suffix(config.label_suffix.clone())
            .with_dry_run(dry_run),
        );

        let processing_service = Arc::new(ProcessingService::new(
            repository,
            Arc::clone(&grouping_service),
            Arc::clone(&resolution_service),
            Arc::clone(&rename_service),
            Arc::clone(&event_bus),
            config.clone(),
        ));

        Ok(Self {
            event_bus,
            extraction_service,
            classification_service,
            grouping_service,
            resolution_service,
            rename_service,
            processing_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_build_with_tesseract_backend() {
        let state = AppState::build(
            &RenamerConfig::default(),
            &Backend::Tesseract,
            true,
            Arc::new(EventBus::new()),
        );
        assert!(state.is_ok());
    }

    #[test]
    fn test_dry_run_flag_reaches_rename_service() {
        let state = AppState::build(
            &RenamerConfig::default(),
            &Backend::Tesseract,
            true,
            Arc::new(EventBus::new()),
        )
        .unwrap();
        assert!(state.rename_service.is_dry_run());
    }

    #[test]
    fn test_build_fails_on_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppState::build(
            &RenamerConfig::default(),
            &Backend::Manifest(dir.path().join("ocr-manifest.json")),
            false,
            Arc::new(EventBus::new()),
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = RenamerConfig {
            label_suffix: "  ".to_string(),
            ..RenamerConfig::default()
        };
        let result = AppState::build(&config, &Backend::Tesseract, false, Arc::new(EventBus::new()));
        assert!(result.is_err());
    }
}
