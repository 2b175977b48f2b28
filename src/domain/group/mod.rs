pub mod entity;
pub mod invariants;
pub mod segmenter;

pub use entity::ProductGroup;
pub use invariants::validate_partition;
pub use segmenter::{segment, SegmenterState};
