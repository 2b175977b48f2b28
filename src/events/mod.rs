// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod handlers;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Scan
    CollaboratorFailed,
    DirectoryScanned,
    // Grouping
    GroupSealed,
    ImageClassified,
    // Codes
    CodeExtracted,
    GroupCodeResolved,
    // Renames
    FileRenamed,
    RenameFailed,
    RenameSkipped,
    // Run
    RunCompleted,
};

pub use bus::{EventBus, EventLogEntry};

pub use handlers::register_logging_handlers;
