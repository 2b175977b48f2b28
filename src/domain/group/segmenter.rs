// src/domain/group/segmenter.rs
//
// Group segmentation as an explicit fold.
//
// RULES:
// - A colored marker seals the open group (if any) and opens a new one
//   named after the running counter and the color
// - An unmarked image joins the open group, or opens `group<n>-none` when
//   nothing is open yet
// - The counter only advances when a group is opened
// - Input order is preserved; every image ends up in exactly one group

use std::path::PathBuf;

use super::entity::ProductGroup;
use crate::domain::marker::ColorMarker;

/// State threaded through the fold over the sorted image list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterState {
    current: Option<ProductGroup>,
    sealed: Vec<ProductGroup>,
    counter: usize,
}

impl SegmenterState {
    pub fn new() -> Self {
        Self {
            current: None,
            sealed: Vec::new(),
            counter: 1,
        }
    }

    /// Feeds one image with its marker
    pub fn step(mut self, image: PathBuf, marker: ColorMarker) -> Self {
        if !marker.is_present() {
            if let Some(open) = self.current.as_mut() {
                open.push(image);
                return self;
            }
        }

        self.seal();
        self.current = Some(ProductGroup::open(self.counter, marker, image));
        self.counter += 1;
        self
    }

    /// Seals the open group and returns every group in order
    pub fn finish(mut self) -> Vec<ProductGroup> {
        self.seal();
        self.sealed
    }

    /// Number the next opened group will get
    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn open_group(&self) -> Option<&ProductGroup> {
        self.current.as_ref()
    }

    fn seal(&mut self) {
        if let Some(group) = self.current.take() {
            if !group.is_empty() {
                self.sealed.push(group);
            }
        }
    }
}

impl Default for SegmenterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the whole fold over already classified images
pub fn segment<I>(classified: I) -> Vec<ProductGroup>
where
    I: IntoIterator<Item = (PathBuf, ColorMarker)>,
{
    classified
        .into_iter()
        .fold(SegmenterState::new(), |state, (image, marker)| state.step(image, marker))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::group::validate_partition;

    fn images(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| PathBuf::from(format!("/p/{}", n))).collect()
    }

    fn run(markers: &[(&str, ColorMarker)]) -> Vec<ProductGroup> {
        segment(markers.iter().map(|(n, m)| (PathBuf::from(format!("/p/{}", n)), *m)))
    }

    #[test]
    fn test_marked_image_starts_group() {
        let groups = run(&[
            ("IMG1.jpg", ColorMarker::Red),
            ("IMG2.jpg", ColorMarker::None),
            ("IMG3.jpg", ColorMarker::Blue),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "group1-red");
        assert_eq!(groups[0].members, images(&["IMG1.jpg", "IMG2.jpg"]));
        assert_eq!(groups[1].name, "group2-blue");
        assert_eq!(groups[1].members, images(&["IMG3.jpg"]));
    }

    #[test]
    fn test_same_color_twice_gives_two_groups() {
        let groups = run(&[("a.jpg", ColorMarker::Red), ("b.jpg", ColorMarker::Red)]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "group1-red");
        assert_eq!(groups[1].name, "group2-red");
    }

    #[test]
    fn test_unmarked_prefix_opens_default_group() {
        let groups = run(&[
            ("a.jpg", ColorMarker::None),
            ("b.jpg", ColorMarker::None),
            ("c.jpg", ColorMarker::Green),
            ("d.jpg", ColorMarker::None),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "group1-none");
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].name, "group2-green");
        assert_eq!(groups[1].len(), 2);
    }

    #[test]
    fn test_no_markers_single_group() {
        let groups = run(&[("a.jpg", ColorMarker::None), ("b.jpg", ColorMarker::None)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "group1-none");
    }

    #[test]
    fn test_empty_input() {
        assert!(run(&[]).is_empty());
    }

    #[test]
    fn test_state_is_explicit() {
        let state = SegmenterState::new()
            .step(PathBuf::from("/p/a.jpg"), ColorMarker::Purple)
            .step(PathBuf::from("/p/b.jpg"), ColorMarker::None);

        assert_eq!(state.counter(), 2);
        assert_eq!(state.open_group().map(|g| g.len()), Some(2));
    }

    #[test]
    fn test_partition_holds() {
        let markers = [
            ColorMarker::None,
            ColorMarker::Red,
            ColorMarker::None,
            ColorMarker::Orange,
            ColorMarker::Orange,
            ColorMarker::None,
            ColorMarker::Gray,
        ];
        let input: Vec<PathBuf> = (0..markers.len())
            .map(|i| PathBuf::from(format!("/p/IMG_{:02}.jpg", i)))
            .collect();

        let groups = segment(input.iter().cloned().zip(markers.iter().copied()));

        validate_partition(&input, &groups).unwrap();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[4].name, "group5-gray");
    }
}
