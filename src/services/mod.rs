// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod classification_service;
pub mod extraction_service;
pub mod grouping_service;
pub mod processing_service;
pub mod rename_service;
pub mod resolution_service;

#[cfg(test)]
mod resolution_service_tests;
#[cfg(test)]
mod test_support;

// Re-export all services and their types
pub use classification_service::{ClassificationService, MarkerSource};

pub use extraction_service::{ExtractionRules, ExtractionService};

pub use grouping_service::GroupingService;

pub use processing_service::{GroupReport, ProcessingService, RunSummary};

pub use rename_service::RenameService;

pub use resolution_service::ResolutionService;
