use super::value_objects::{RenamePlanEntry, RenameRole};
use crate::domain::{DomainError, DomainResult};

/// Validates the plan of one group
pub fn validate_group_plan(entries: &[RenamePlanEntry]) -> DomainResult<()> {
    validate_single_label(entries)?;
    validate_product_indices(entries)?;
    Ok(())
}

fn validate_single_label(entries: &[RenamePlanEntry]) -> DomainResult<()> {
    let labels = entries
        .iter()
        .filter(|e| e.role == RenameRole::Label)
        .count();

    if labels > 1 {
        return Err(DomainError::InvariantViolation(format!(
            "Group plan has {} label entries",
            labels
        )));
    }

    Ok(())
}

/// Product indices must read 1, 2, ..., N in entry order
fn validate_product_indices(entries: &[RenamePlanEntry]) -> DomainResult<()> {
    let products = entries.iter().filter(|e| e.role == RenameRole::Product);

    for (expected, entry) in (1..).zip(products) {
        if entry.index != expected {
            return Err(DomainError::InvariantViolation(format!(
                "Product index {} found where {} was expected",
                entry.index, expected
            )));
        }
    }

    Ok(())
}
