use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::marker::ColorMarker;

/// A contiguous run of images showing one product.
/// The first member carries the marker that opened the group (unless the
/// group is the default group opened by an unmarked first image).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductGroup {
    /// `group<counter>-<color>`
    pub name: String,

    /// Marker that opened the group
    pub marker: ColorMarker,

    /// Member image paths, in sorted input order
    pub members: Vec<PathBuf>,
}

impl ProductGroup {
    /// Opens a group with its first member
    pub fn open(counter: usize, marker: ColorMarker, first: PathBuf) -> Self {
        Self {
            name: Self::group_name(counter, marker),
            marker,
            members: vec![first],
        }
    }

    pub fn group_name(counter: usize, marker: ColorMarker) -> String {
        format!("group{}-{}", counter, marker)
    }

    pub fn push(&mut self, image: PathBuf) {
        self.members.push(image);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_naming() {
        let group = ProductGroup::open(3, ColorMarker::Blue, PathBuf::from("a.jpg"));
        assert_eq!(group.name, "group3-blue");
        assert_eq!(ProductGroup::group_name(1, ColorMarker::None), "group1-none");
        assert_eq!(group.len(), 1);
    }
}
