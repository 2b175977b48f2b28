// src/domain/code/mod.rs
//
// Product Code Domain
//
// Pattern table and the value objects produced by code extraction and
// group code resolution. No I/O, no event emission.

pub mod patterns;
pub mod value_objects;

pub use patterns::{default_patterns, CodePattern, PatternKind};
pub use value_objects::{CodeSource, ExtractedCode, ProductInfo, ResolvedGroupCode};
