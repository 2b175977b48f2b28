// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the services
// - It provides the boundary between the command line and the services
// - It owns configuration, wiring and the error → exit code mapping

pub mod config;
pub mod error_handling;
pub mod state;

pub use config::RenamerConfig;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::{AppState, Backend};
