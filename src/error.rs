//! Error types for pattern recognition

use std::fmt;

/// Errors that can occur during pattern recognition
#[derive(Debug, Clone)]
pub enum PatternError {
    /// Invalid input passed to a comparison (mismatched snapshot lengths,
    /// empty snapshots, or a tolerance outside (0, 1])
    InvalidInput(String),

    /// Invalid recognizer configuration
    InvalidConfig(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PatternError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for PatternError {}
