pub mod entity;

pub use entity::ColorMarker;
