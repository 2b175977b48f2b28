// src/events/handlers/logging_handler.rs
//
// Logging Event Handlers
//
// Forwards pipeline events to the `log` facade. Contains no business logic;
// the pipeline itself never logs its results, it only emits events.

use crate::events::types::{
    CodeExtracted, CollaboratorFailed, DirectoryScanned, FileRenamed, GroupCodeResolved,
    GroupSealed, ImageClassified, RenameFailed, RenameSkipped, RunCompleted,
};
use crate::events::EventBus;

/// Registers one logging handler per pipeline event type.
pub fn register_logging_handlers(bus: &EventBus) {
    bus.subscribe::<DirectoryScanned, _>(|event| {
        log::info!(
            "Found {} image(s) in {}",
            event.images_found,
            event.directory_path.display()
        );
    });

    bus.subscribe::<CollaboratorFailed, _>(|event| {
        log::warn!(
            "{} failed for {}: {}",
            event.collaborator,
            event.image_path.display(),
            event.reason
        );
    });

    bus.subscribe::<ImageClassified, _>(|event| {
        log::debug!(
            "{} -> {} ({})",
            event.image_path.display(),
            event.marker,
            event.source
        );
    });

    bus.subscribe::<GroupSealed, _>(|event| {
        log::info!("Group {} ({} image(s))", event.group_name, event.members.len());
        for (index, member) in event.members.iter().enumerate() {
            log::debug!("   {}. {}", index + 1, member.display());
        }
    });

    bus.subscribe::<CodeExtracted, _>(|event| {
        log::debug!(
            "{}: code {} (confidence {:.2}, {}, {} candidates)",
            event.image_path.display(),
            event.code,
            event.confidence,
            event.method,
            event.candidate_count
        );
    });

    bus.subscribe::<GroupCodeResolved, _>(|event| {
        log::info!(
            "Group {} code: {} (confidence {:.2}, {})",
            event.group_name,
            event.code,
            event.confidence,
            event.source
        );
    });

    bus.subscribe::<FileRenamed, _>(|event| {
        log::info!(
            "{} {} -> {}{}",
            event.role,
            event.old_path.display(),
            event.new_path.display(),
            if event.replaced_existing { " (replaced existing)" } else { "" }
        );
    });

    bus.subscribe::<RenameSkipped, _>(|event| {
        log::info!(
            "Skipped {} -> {} ({})",
            event.old_path.display(),
            event.new_path.display(),
            event.reason
        );
    });

    bus.subscribe::<RenameFailed, _>(|event| {
        log::warn!(
            "Rename failed {} -> {}: {}",
            event.old_path.display(),
            event.new_path.display(),
            event.reason
        );
    });

    bus.subscribe::<RunCompleted, _>(|event| {
        log::info!(
            "Done: {} group(s), {} image(s), {} code(s) read, {} renamed, {} unchanged, {} failed in {} ms",
            event.groups,
            event.images,
            event.codes_extracted,
            event.renamed,
            event.unchanged,
            event.failed,
            event.duration_ms
        );
    });
}
