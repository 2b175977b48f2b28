// src/domain/rename/value_objects.rs
//
// Rename plan values.
//
// INVARIANTS (checked by invariants.rs):
// - at most one Label entry per group
// - Product indices are 1..=N in member order, no gaps

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Suffix of the label image name when none is configured
pub const DEFAULT_LABEL_SUFFIX: &str = "标签";

/// Role of an image inside its group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameRole {
    /// The image carrying the product code
    Label,

    /// A product angle shot
    Product,
}

impl std::fmt::Display for RenameRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenameRole::Label => write!(f, "label"),
            RenameRole::Product => write!(f, "product"),
        }
    }
}

/// One old → new mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlanEntry {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub role: RenameRole,

    /// 1-based product index; 0 for the label entry
    pub index: usize,
}

impl RenamePlanEntry {
    pub fn label(old_path: PathBuf, code: &str, label_suffix: &str) -> Self {
        let new_path = sibling_path(&old_path, &format!("{}-{}", code, label_suffix));
        Self {
            old_path,
            new_path,
            role: RenameRole::Label,
            index: 0,
        }
    }

    pub fn product(old_path: PathBuf, code: &str, index: usize) -> Self {
        let new_path = sibling_path(&old_path, &format!("{}-{}", code, index));
        Self {
            old_path,
            new_path,
            role: RenameRole::Product,
            index,
        }
    }

    /// The file already carries its target name
    pub fn is_noop(&self) -> bool {
        self.old_path == self.new_path
    }
}

/// Same directory, new stem, original extension kept
fn sibling_path(old_path: &Path, stem: &str) -> PathBuf {
    let file_name = match old_path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    };
    old_path.with_file_name(file_name)
}

/// What happened to a plan entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    /// Moved to the new path
    Renamed,

    /// Already correctly named, nothing done
    Unchanged,

    /// Dry run, nothing done
    Planned,

    /// The move failed; later entries were still processed
    Failed { reason: String },
}

impl RenameOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RenameOutcome::Failed { .. })
    }
}

/// A plan entry together with its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    #[serde(flatten)]
    pub entry: RenamePlanEntry,
    pub outcome: RenameOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_name_keeps_extension() {
        let entry = RenamePlanEntry::label(PathBuf::from("/shots/IMG_01.JPG"), "AB123456", "标签");
        assert_eq!(entry.new_path, PathBuf::from("/shots/AB123456-标签.JPG"));
        assert_eq!(entry.role, RenameRole::Label);
    }

    #[test]
    fn test_product_name_uses_index() {
        let entry = RenamePlanEntry::product(PathBuf::from("/shots/IMG_02.png"), "AB123456", 3);
        assert_eq!(entry.new_path, PathBuf::from("/shots/AB123456-3.png"));
        assert_eq!(entry.index, 3);
    }

    #[test]
    fn test_missing_extension_adds_no_dot() {
        let entry = RenamePlanEntry::product(PathBuf::from("/shots/raw"), "X9", 1);
        assert_eq!(entry.new_path, PathBuf::from("/shots/X9-1"));
    }

    #[test]
    fn test_noop_detection() {
        let entry = RenamePlanEntry::product(PathBuf::from("/shots/X9-1.jpg"), "X9", 1);
        assert!(entry.is_noop());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&RenameOutcome::Failed {
            reason: "permission denied".to_string(),
        })
        .unwrap();
        assert!(json.contains("\"status\":\"failed\""));
        assert!(json.contains("permission denied"));
    }
}
