// src/domain/rename/planner.rs
//
// Name assignment within one group.
//
// RULES:
// - Members are visited in group order
// - The first member the predicate accepts becomes the label image:
//   `<code>-<label_suffix>.<ext>`
// - Every other member is a product image: `<code>-<index>.<ext>`, index
//   starting at 1 and counting only product images
// - The predicate is not consulted again once a label is found

use std::path::{Path, PathBuf};

use super::value_objects::RenamePlanEntry;

pub fn plan_group<F>(
    members: &[PathBuf],
    code: &str,
    label_suffix: &str,
    mut is_label_image: F,
) -> Vec<RenamePlanEntry>
where
    F: FnMut(&Path) -> bool,
{
    let mut entries = Vec::with_capacity(members.len());
    let mut has_label = false;
    let mut product_index = 1;

    for member in members {
        if !has_label && is_label_image(member) {
            has_label = true;
            entries.push(RenamePlanEntry::label(member.clone(), code, label_suffix));
        } else {
            entries.push(RenamePlanEntry::product(member.clone(), code, product_index));
            product_index += 1;
        }
    }

    entries
}
