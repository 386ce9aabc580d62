//! # Spectral Pattern
//!
//! Frequency-domain pattern recognition for audio-reactive visualizers.
//!
//! The crate keeps a bounded sliding history of byte frequency snapshots
//! pulled from an external analyser and flags a repeating pattern whenever
//! the two most recent snapshots are similar within a tolerance. It does
//! no audio analysis of its own and draws nothing; it sits between an
//! analyser and a renderer and answers one question per frame: "is the
//! spectrum holding steady?"
//!
//! ## Quick Start
//!
//! ```
//! use spectral_pattern::{FrequencySource, PatternRecognizer};
//!
//! // Stand-in for a real analyser (FFT thread, Web Audio bridge, ...).
//! struct Steady;
//!
//! impl FrequencySource for Steady {
//!     fn frequency_bin_count(&self) -> usize {
//!         8
//!     }
//!
//!     fn fill_frequency_data(&mut self, buffer: &mut [u8]) {
//!         buffer.fill(180);
//!     }
//! }
//!
//! let mut recognizer = PatternRecognizer::new(Steady);
//!
//! // Once per render frame:
//! for _ in 0..30 {
//!     recognizer.update_buffer();
//! }
//! if let Some(snapshot) = recognizer.detect_pattern() {
//!     println!("spectrum is repeating across {} bins", snapshot.len());
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Analyser (external) → update_buffer() → FIFO history → detect_pattern()
//! ```
//!
//! One recognizer serves one analysis session; it is single-threaded and
//! meant to be driven from the render loop that also consumes the result.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod provider;
pub mod recognizer;
pub mod similarity;

// Re-export main types
pub use config::{RecognizerConfig, DEFAULT_BUFFER_SIZE, DEFAULT_TOLERANCE};
pub use error::PatternError;
pub use provider::FrequencySource;
pub use recognizer::PatternRecognizer;
pub use similarity::{compare_patterns, match_ratio};
