//! Configuration parameters for pattern recognition

use serde::{Deserialize, Serialize};

use crate::error::PatternError;

/// Default number of snapshots kept in the sliding history buffer.
///
/// Thirty frames is roughly half a second of history at a typical 60 fps
/// render loop.
pub const DEFAULT_BUFFER_SIZE: usize = 30;

/// Default similarity tolerance.
///
/// At 0.85, two bins count as equal when they differ by fewer than
/// 255 * (1 - 0.85) = 38.25 magnitude steps, and at least 85% of bins
/// must agree for two snapshots to count as a repeat.
pub const DEFAULT_TOLERANCE: f32 = 0.85;

/// Recognizer configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Maximum number of snapshots retained in the history buffer
    /// (default: 30). Must be at least 2: detection always compares the
    /// newest snapshot against the one before it.
    pub buffer_size: usize,

    /// Similarity tolerance in (0, 1] (default: 0.85). Controls both the
    /// per-bin magnitude threshold and the required fraction of matching
    /// bins; see [`crate::similarity`] for the exact semantics.
    pub tolerance: f32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl RecognizerConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `PatternError::InvalidConfig` if `buffer_size` is below 2
    /// or `tolerance` is not a finite value in (0, 1].
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.buffer_size < 2 {
            return Err(PatternError::InvalidConfig(format!(
                "buffer_size must be at least 2, got {}",
                self.buffer_size
            )));
        }

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 || self.tolerance > 1.0 {
            return Err(PatternError::InvalidConfig(format!(
                "tolerance must be a finite value in (0, 1], got {}",
                self.tolerance
            )));
        }

        Ok(())
    }
}
