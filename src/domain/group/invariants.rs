use std::path::PathBuf;

use super::entity::ProductGroup;
use crate::domain::{DomainError, DomainResult};

/// Validates that `groups` partition `images`: concatenating the members of
/// every group, in group order, must reproduce the input list exactly.
pub fn validate_partition(images: &[PathBuf], groups: &[ProductGroup]) -> DomainResult<()> {
    if let Some(empty) = groups.iter().find(|g| g.is_empty()) {
        return Err(DomainError::InvariantViolation(format!(
            "Group {} has no members",
            empty.name
        )));
    }

    let flattened: Vec<&PathBuf> = groups.iter().flat_map(|g| g.members.iter()).collect();
    if flattened.len() != images.len() {
        return Err(DomainError::InvariantViolation(format!(
            "Groups hold {} images but the input has {}",
            flattened.len(),
            images.len()
        )));
    }

    for (position, (grouped, input)) in flattened.iter().zip(images.iter()).enumerate() {
        if *grouped != input {
            return Err(DomainError::InvariantViolation(format!(
                "Image {} at position {} is out of order (expected {})",
                grouped.display(),
                position,
                input.display()
            )));
        }
    }

    Ok(())
}
