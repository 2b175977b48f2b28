// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Text recognition failed: {0}")]
    Recognition(String),

    #[error("Color label unavailable: {0}")]
    ColorLabel(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("No image files found in {}", .0.display())]
    NoImages(PathBuf),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Conditions that end a run before anything is touched, reported as
    /// information rather than failure.
    pub fn is_informational(&self) -> bool {
        matches!(self, AppError::DirectoryNotFound(_) | AppError::NoImages(_))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
