// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ty, $name:literal) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { $name }
        }
    };
}

// ============================================================================
// SCAN EVENTS
// ============================================================================

/// Emitted once the image list of a directory is known
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryScanned {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub directory_path: PathBuf,
    pub images_found: usize,
}

impl DirectoryScanned {
    pub fn new(directory_path: PathBuf, images_found: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            directory_path,
            images_found,
        }
    }
}

impl_domain_event!(DirectoryScanned, "DirectoryScanned");

/// Emitted when a collaborator call fails and its result is downgraded to "no data"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub image_path: PathBuf,
    pub collaborator: String, // "image_loader", "text_recognizer", "color_label"
    pub reason: String,
}

impl CollaboratorFailed {
    pub fn new(image_path: PathBuf, collaborator: &str, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            image_path,
            collaborator: collaborator.to_string(),
            reason,
        }
    }
}

impl_domain_event!(CollaboratorFailed, "CollaboratorFailed");

// ============================================================================
// GROUPING EVENTS
// ============================================================================

/// Emitted for every image the classifier looked at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageClassified {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub image_path: PathBuf,
    pub marker: String,
    pub source: String, // "color_label", "ocr_keyword", "none"
}

impl ImageClassified {
    pub fn new(image_path: PathBuf, marker: String, source: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            image_path,
            marker,
            source,
        }
    }
}

impl_domain_event!(ImageClassified, "ImageClassified");

/// Emitted when the segmenter closes a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSealed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub group_name: String,
    pub members: Vec<PathBuf>,
}

impl GroupSealed {
    pub fn new(group_name: String, members: Vec<PathBuf>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            group_name,
            members,
        }
    }
}

impl_domain_event!(GroupSealed, "GroupSealed");

// ============================================================================
// CODE EVENTS
// ============================================================================

/// Emitted when a code is read from a single image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeExtracted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub image_path: PathBuf,
    pub code: String,
    pub confidence: f64,
    pub method: String,
    pub candidate_count: usize,
}

impl CodeExtracted {
    pub fn new(
        image_path: PathBuf,
        code: String,
        confidence: f64,
        method: String,
        candidate_count: usize,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            image_path,
            code,
            confidence,
            method,
            candidate_count,
        }
    }
}

impl_domain_event!(CodeExtracted, "CodeExtracted");

/// Emitted when a group's final code is decided
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCodeResolved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub group_name: String,
    pub code: String,
    pub confidence: f64,
    pub source: String, // "extracted", "fallback", "disambiguated"
}

impl GroupCodeResolved {
    pub fn new(group_name: String, code: String, confidence: f64, source: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            group_name,
            code,
            confidence,
            source,
        }
    }
}

impl_domain_event!(GroupCodeResolved, "GroupCodeResolved");

// ============================================================================
// RENAME EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRenamed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub role: String,
    pub replaced_existing: bool,
}

impl FileRenamed {
    pub fn new(old_path: PathBuf, new_path: PathBuf, role: String, replaced_existing: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            old_path,
            new_path,
            role,
            replaced_existing,
        }
    }
}

impl_domain_event!(FileRenamed, "FileRenamed");

/// Emitted for no-op entries and dry-run entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameSkipped {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub reason: String, // "already_named", "dry_run"
}

impl RenameSkipped {
    pub fn new(old_path: PathBuf, new_path: PathBuf, reason: &str) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            old_path,
            new_path,
            reason: reason.to_string(),
        }
    }
}

impl_domain_event!(RenameSkipped, "RenameSkipped");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub reason: String,
}

impl RenameFailed {
    pub fn new(old_path: PathBuf, new_path: PathBuf, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            old_path,
            new_path,
            reason,
        }
    }
}

impl_domain_event!(RenameFailed, "RenameFailed");

// ============================================================================
// RUN EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub directory_path: PathBuf,
    pub groups: usize,
    pub images: usize,
    pub codes_extracted: usize,
    pub renamed: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub duration_ms: u64,
}

impl RunCompleted {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        directory_path: PathBuf,
        groups: usize,
        images: usize,
        codes_extracted: usize,
        renamed: usize,
        unchanged: usize,
        failed: usize,
        duration_ms: u64,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            directory_path,
            groups,
            images,
            codes_extracted,
            renamed,
            unchanged,
            failed,
            duration_ms,
        }
    }
}

impl_domain_event!(RunCompleted, "RunCompleted");
