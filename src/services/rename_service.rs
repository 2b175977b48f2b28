// src/services/rename_service.rs
//
// Rename Service - plans and applies the new names of one group
//
// Planning: the first member that carries a color label, or whose accurate
// OCR pass yields a code, becomes the label image; the rest are numbered.
//
// Applying:
// - old == new: nothing to do, reported as unchanged
// - an existing file at the destination is removed first (last writer wins)
// - a failed move is reported and the next entry is processed anyway
// - dry run: nothing touches the filesystem, entries are reported as planned

use std::path::Path;
use std::sync::Arc;

use crate::domain::{
    plan_group, validate_group_plan, ProductGroup, RenameOutcome, RenamePlanEntry, RenameRecord,
    DEFAULT_LABEL_SUFFIX,
};
use crate::error::AppResult;
use crate::events::{EventBus, FileRenamed, RenameFailed, RenameSkipped};
use crate::repositories::ImageRepository;
use crate::services::classification_service::ClassificationService;
use crate::services::extraction_service::ExtractionService;

pub struct RenameService {
    repository: Arc<dyn ImageRepository>,
    classification: Arc<ClassificationService>,
    extraction: Arc<ExtractionService>,
    event_bus: Arc<EventBus>,
    label_suffix: String,
    dry_run: bool,
}

impl RenameService {
    pub fn new(
        repository: Arc<dyn ImageRepository>,
        classification: Arc<ClassificationService>,
        extraction: Arc<ExtractionService>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            repository,
            classification,
            extraction,
            event_bus,
            label_suffix: DEFAULT_LABEL_SUFFIX.to_string(),
            dry_run: false,
        }
    }

    pub fn with_label_suffix(mut self, label_suffix: impl Into<String>) -> Self {
        self.label_suffix = label_suffix.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn is_label_image(&self, path: &Path) -> bool {
        if self.classification.label_marker(path).is_present() {
            return true;
        }
        self.extraction.accurate_code(path).is_some()
    }

    pub fn plan(&self, group: &ProductGroup, code: &str) -> AppResult<Vec<RenamePlanEntry>> {
        let entries = plan_group(&group.members, code, &self.label_suffix, |path| {
            self.is_label_image(path)
        });
        validate_group_plan(&entries)?;
        Ok(entries)
    }

    /// Applies a plan entry by entry
    pub fn execute(&self, plan: Vec<RenamePlanEntry>) -> Vec<RenameRecord> {
        plan.into_iter()
            .map(|entry| {
                let outcome = self.apply(&entry);
                RenameRecord { entry, outcome }
            })
            .collect()
    }

    fn apply(&self, entry: &RenamePlanEntry) -> RenameOutcome {
        if entry.is_noop() {
            self.event_bus.emit(RenameSkipped::new(
                entry.old_path.clone(),
                entry.new_path.clone(),
                "already_named",
            ));
            return RenameOutcome::Unchanged;
        }

        if self.dry_run {
            self.event_bus.emit(RenameSkipped::new(
                entry.old_path.clone(),
                entry.new_path.clone(),
                "dry_run",
            ));
            return RenameOutcome::Planned;
        }

        match self.move_entry(entry) {
            Ok(replaced_existing) => {
                self.event_bus.emit(FileRenamed::new(
                    entry.old_path.clone(),
                    entry.new_path.clone(),
                    entry.role.to_string(),
                    replaced_existing,
                ));
                RenameOutcome::Renamed
            }
            Err(e) => {
                let reason = e.to_string();
                self.event_bus.emit(RenameFailed::new(
                    entry.old_path.clone(),
                    entry.new_path.clone(),
                    reason.clone(),
                ));
                RenameOutcome::Failed { reason }
            }
        }
    }

    /// Returns whether an existing destination was replaced
    fn move_entry(&self, entry: &RenamePlanEntry) -> AppResult<bool> {
        // On case-insensitive volumes a case-only rename "finds" the source itself
        let replaced_existing = self.repository.exists(&entry.new_path)
            && !differs_only_in_case(&entry.old_path, &entry.new_path);
        if replaced_existing {
            self.repository.remove_file(&entry.new_path)?;
        }
        self.repository.move_file(&entry.old_path, &entry.new_path)?;
        Ok(replaced_existing)
    }
}

fn differs_only_in_case(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}
