// src/application/error_handling.rs
//
// Error Handling at the command line boundary
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides a consistent error format for the terminal and the JSON report
// - Decides the process exit code
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Nothing to do (missing directory, no images)
    Informational,

    /// Invalid configuration or manifest
    Validation,

    /// Domain invariant violation
    DomainError,

    /// OCR, color label or image decoding collaborator
    ExternalService,

    /// File system error
    FileSystem,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::DirectoryNotFound(_) | AppError::NoImages(_) => Self {
                success: false,
                error_type: ErrorType::Informational,
                message: error.to_string(),
                details: None,
            },

            AppError::Config(message) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Invalid configuration".to_string(),
                details: Some(message),
            },

            AppError::Serialization(serde_error) => {
                log::debug!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Validation,
                    message: "Malformed JSON input".to_string(),
                    details: Some(serde_error.to_string()),
                }
            }

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Recognition(message) | AppError::ColorLabel(message) => Self {
                success: false,
                error_type: ErrorType::ExternalService,
                message: "External collaborator failed".to_string(),
                details: Some(message),
            },

            AppError::Image(image_error) => Self {
                success: false,
                error_type: ErrorType::ExternalService,
                message: "Image could not be decoded".to_string(),
                details: Some(image_error.to_string()),
            },

            AppError::Io(io_error) => {
                log::debug!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => Self {
                success: false,
                error_type: ErrorType::Internal,
                message,
                details: None,
            },
        }
    }

    /// Process exit code: informational outcomes are not failures
    pub fn exit_code(&self) -> u8 {
        match self.error_type {
            ErrorType::Informational => 0,
            _ => 1,
        }
    }

    /// One line for the terminal
    pub fn render(&self) -> String {
        match &self.details {
            Some(details) => format!("{}: {}", self.message, details),
            None => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::path::PathBuf;

    #[test]
    fn test_missing_directory_is_informational() {
        let response = ErrorResponse::from_app_error(AppError::DirectoryNotFound(PathBuf::from("/nope")));
        assert_eq!(response.error_type, ErrorType::Informational);
        assert_eq!(response.exit_code(), 0);
        assert!(response.render().contains("/nope"));
    }

    #[test]
    fn test_no_images_is_informational() {
        let response = ErrorResponse::from_app_error(AppError::NoImages(PathBuf::from("/empty")));
        assert_eq!(response.exit_code(), 0);
    }

    #[test]
    fn test_config_error() {
        let response = ErrorResponse::from_app_error(AppError::Config("label_suffix must not be empty".to_string()));
        assert_eq!(response.error_type, ErrorType::Validation);
        assert_eq!(response.exit_code(), 1);
        assert_eq!(
            response.render(),
            "Invalid configuration: label_suffix must not be empty"
        );
    }

    #[test]
    fn test_domain_error() {
        let response = ErrorResponse::from_app_error(AppError::Domain(
            DomainError::InvariantViolation("Group plan has 2 label entries".to_string()),
        ));
        assert_eq!(response.error_type, ErrorType::DomainError);
        assert_eq!(response.exit_code(), 1);
    }

    #[test]
    fn test_serializes_snake_case() {
        let response = ErrorResponse::from_app_error(AppError::Recognition("offline".to_string()));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error_type"], "external_service");
        assert_eq!(json["success"], false);
    }
}
