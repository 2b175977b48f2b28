pub mod entity;
pub mod merge;
pub mod request;

pub use entity::{BoundingBox, RecognitionLevel, TextCandidate};
pub use merge::merge_candidates;
pub use request::{ImageHandle, RecognitionOverrides, RecognitionRequest};
