// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO event emission
// - NO cross-repository calls

pub mod image_repository;

pub use image_repository::{ImageRepository, LocalImageRepository};

#[cfg(test)]
pub use image_repository::MockImageRepository;
