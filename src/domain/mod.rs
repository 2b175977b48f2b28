// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod candidate;
pub mod code;
pub mod group;
pub mod marker;
pub mod rename;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// OCR candidates
pub use candidate::{
    merge_candidates, BoundingBox, ImageHandle, RecognitionLevel, RecognitionOverrides,
    RecognitionRequest, TextCandidate,
};

// Product codes
pub use code::{
    default_patterns, CodePattern, CodeSource, ExtractedCode, PatternKind, ProductInfo,
    ResolvedGroupCode,
};

// Color markers
pub use marker::ColorMarker;

// Product groups
pub use group::{segment, validate_partition, ProductGroup, SegmenterState};

// Rename plan
pub use rename::{
    plan_group, validate_group_plan, RenameOutcome, RenamePlanEntry, RenameRecord, RenameRole,
    DEFAULT_LABEL_SUFFIX,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
