// src/lib.rs
// product-renamer - groups product photos by color label and renames them
//
// Architecture:
// - Domain-centric: grouping, code scoring and name assignment are pure domain logic
// - Event-driven: services report what they did through the EventBus
// - Explicit: collaborators (OCR, color labels, image loading, filesystem) are ports
// - Stateless: nothing is kept between runs
// - Application Layer: command line boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    merge_candidates,
    plan_group,
    segment,
    validate_group_plan,
    validate_partition,
    // Candidates
    BoundingBox,
    // Codes
    CodePattern,
    CodeSource,
    // Markers
    ColorMarker,
    DomainError,
    ExtractedCode,
    ImageHandle,
    PatternKind,
    // Groups
    ProductGroup,
    ProductInfo,
    RecognitionLevel,
    RecognitionRequest,
    // Renames
    RenameOutcome,
    RenamePlanEntry,
    RenameRecord,
    RenameRole,
    ResolvedGroupCode,
    SegmenterState,
    TextCandidate,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    register_logging_handlers,
    CodeExtracted,
    CollaboratorFailed,
    DirectoryScanned,
    DomainEvent,
    EventBus,
    EventLogEntry,
    FileRenamed,
    GroupCodeResolved,
    GroupSealed,
    ImageClassified,
    RenameFailed,
    RenameSkipped,
    RunCompleted,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{ImageRepository, LocalImageRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    ClassificationService,
    ExtractionRules,
    ExtractionService,
    GroupReport,
    GroupingService,
    MarkerSource,
    ProcessingService,
    RenameService,
    ResolutionService,
    RunSummary,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, Backend, ErrorResponse, ErrorType, RenamerConfig};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{
    ColorLabelReader, FinderLabelReader, ImageCrateLoader, ImageLoader, ManifestBackend,
    ManifestEntry, TesseractRecognizer, TextRecognizer,
};
