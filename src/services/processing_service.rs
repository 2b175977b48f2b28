// src/services/processing_service.rs
//
// Processing Service - one run over one directory
//
// 1. List the directory, keep image files, sort by file name
// 2. Segment the sorted list into product groups
// 3. Resolve each group's code, then plan and apply its renames, in group order
//
// CRITICAL RULES:
// - A missing directory or a directory without images is reported before
//   anything is modified
// - Per-image and per-rename failures never abort the run
// - Stateless: nothing is kept between runs

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::application::config::RenamerConfig;
use crate::domain::{ColorMarker, RenameOutcome, RenameRecord, ResolvedGroupCode};
use crate::error::{AppError, AppResult};
use crate::events::{DirectoryScanned, EventBus, RunCompleted};
use crate::repositories::ImageRepository;
use crate::services::grouping_service::GroupingService;
use crate::services::rename_service::RenameService;
use crate::services::resolution_service::ResolutionService;

/// Outcome of one group
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub name: String,
    pub marker: ColorMarker,
    pub code: ResolvedGroupCode,
    pub renames: Vec<RenameRecord>,
}

/// Outcome of a whole run, written as the JSON report
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub images: usize,
    pub codes_extracted: usize,
    pub fallbacks: usize,
    pub renamed: usize,
    pub unchanged: usize,
    pub planned: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub groups: Vec<GroupReport>,
}

impl RunSummary {
    fn tally(&mut self, report: &GroupReport) {
        if report.code.is_fallback() {
            self.fallbacks += 1;
        } else {
            self.codes_extracted += 1;
        }

        for record in &report.renames {
            match record.outcome {
                RenameOutcome::Renamed => self.renamed += 1,
                RenameOutcome::Unchanged => self.unchanged += 1,
                RenameOutcome::Planned => self.planned += 1,
                RenameOutcome::Failed { .. } => self.failed += 1,
            }
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

pub struct ProcessingService {
    repository: Arc<dyn ImageRepository>,
    grouping: Arc<GroupingService>,
    resolution: Arc<ResolutionService>,
    renaming: Arc<RenameService>,
    event_bus: Arc<EventBus>,
    config: RenamerConfig,
}

impl ProcessingService {
    pub fn new(
        repository: Arc<dyn ImageRepository>,
        grouping: Arc<GroupingService>,
        resolution: Arc<ResolutionService>,
        renaming: Arc<RenameService>,
        event_bus: Arc<EventBus>,
        config: RenamerConfig,
    ) -> Self {
        Self {
            repository,
            grouping,
            resolution,
            renaming,
            event_bus,
            config,
        }
    }

    /// Sorted image paths of a directory
    pub fn scan(&self, directory: &Path) -> AppResult<Vec<PathBuf>> {
        if !self.repository.is_directory(directory) {
            return Err(AppError::DirectoryNotFound(directory.to_path_buf()));
        }

        let mut names: Vec<String> = self
            .repository
            .list_directory(directory)?
            .into_iter()
            .filter(|name| self.config.is_image_file(name))
            .collect();
        names.sort();

        if names.is_empty() {
            return Err(AppError::NoImages(directory.to_path_buf()));
        }

        let images: Vec<PathBuf> = names.iter().map(|name| directory.join(name)).collect();
        self.event_bus
            .emit(DirectoryScanned::new(directory.to_path_buf(), images.len()));
        Ok(images)
    }

    pub fn process_directory(&self, directory: &Path) -> AppResult<RunSummary> {
        let start_time = Instant::now();

        let images = self.scan(directory)?;
        let groups = self.grouping.segment(&images)?;
        let codes = self.resolution.resolve_all(&groups);

        let mut summary = RunSummary {
            directory: directory.to_path_buf(),
            dry_run: self.renaming.is_dry_run(),
            images: images.len(),
            ..RunSummary::default()
        };

        for (group, code) in groups.iter().zip(codes) {
            let plan = self.renaming.plan(group, &code.code)?;
            let renames = self.renaming.execute(plan);

            let report = GroupReport {
                name: group.name.clone(),
                marker: group.marker,
                code,
                renames,
            };
            summary.tally(&report);
            summary.groups.push(report);
        }

        summary.duration_ms = start_time.elapsed().as_millis() as u64;

        self.event_bus.emit(RunCompleted::new(
            summary.directory.clone(),
            summary.groups.len(),
            summary.images,
            summary.codes_extracted,
            summary.renamed,
            summary.unchanged + summary.planned,
            summary.failed,
            summary.duration_ms,
        ));

        Ok(summary)
    }
}
