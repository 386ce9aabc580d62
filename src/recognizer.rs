//! Sliding-window pattern recognizer
//!
//! Maintains a bounded FIFO history of frequency snapshots pulled from a
//! [`FrequencySource`] and flags a repeating pattern when the two most
//! recent snapshots are similar within the configured tolerance.
//!
//! The recognizer is built for a single render loop: call
//! [`PatternRecognizer::update_buffer`] once per frame, then
//! [`PatternRecognizer::detect_pattern`] to learn whether the newest
//! snapshot repeats the one before it. Detection stays silent until the
//! history buffer has filled once, so the first `buffer_size - 1` frames
//! of a session never report a match.

use std::collections::VecDeque;

use crate::config::RecognizerConfig;
use crate::error::PatternError;
use crate::provider::FrequencySource;
use crate::similarity;

/// Pattern recognizer over a bounded history of frequency snapshots
///
/// # Example
///
/// ```
/// use spectral_pattern::{FrequencySource, PatternRecognizer};
///
/// struct Steady;
///
/// impl FrequencySource for Steady {
///     fn frequency_bin_count(&self) -> usize {
///         4
///     }
///
///     fn fill_frequency_data(&mut self, buffer: &mut [u8]) {
///         buffer.fill(128);
///     }
/// }
///
/// let mut recognizer = PatternRecognizer::new(Steady);
/// for _ in 0..30 {
///     recognizer.update_buffer();
/// }
/// assert_eq!(recognizer.detect_pattern(), Some(&[128u8, 128, 128, 128][..]));
/// ```
#[derive(Debug)]
pub struct PatternRecognizer<S> {
    source: S,
    config: RecognizerConfig,
    bin_count: usize,
    /// Reusable pull target; overwritten by the source on every update
    /// and never handed out.
    scratch: Vec<u8>,
    /// Snapshot history, oldest first.
    buffer: VecDeque<Vec<u8>>,
}

impl<S: FrequencySource> PatternRecognizer<S> {
    /// Create a recognizer with the default configuration
    ///
    /// The source's bin count is queried once here and assumed stable for
    /// the rest of the session.
    pub fn new(source: S) -> Self {
        Self::build(source, RecognizerConfig::default())
    }

    /// Create a recognizer with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `PatternError::InvalidConfig` if the configuration fails
    /// [`RecognizerConfig::validate`]
    pub fn with_config(source: S, config: RecognizerConfig) -> Result<Self, PatternError> {
        config.validate()?;
        Ok(Self::build(source, config))
    }

    fn build(source: S, config: RecognizerConfig) -> Self {
        let bin_count = source.frequency_bin_count();

        log::debug!(
            "Pattern recognizer ready: {} bins, history of {}, tolerance {:.2}",
            bin_count,
            config.buffer_size,
            config.tolerance
        );

        Self {
            // One slot of slack so the transient overshoot before
            // eviction never reallocates.
            buffer: VecDeque::with_capacity(config.buffer_size + 1),
            scratch: vec![0u8; bin_count],
            source,
            config,
            bin_count,
        }
    }

    /// Pull one snapshot from the source and append it to the history
    ///
    /// The source writes into an internal scratch buffer that is reused
    /// on every call; the snapshot stored in the history is an
    /// independent copy, so later pulls cannot rewrite buffered history.
    /// When the append overflows `buffer_size`, the oldest snapshot is
    /// evicted. Each call adds exactly one snapshot and evicts at most
    /// one, so the history length never exceeds `buffer_size` between
    /// calls.
    pub fn update_buffer(&mut self) {
        self.source.fill_frequency_data(&mut self.scratch);
        self.buffer.push_back(self.scratch.clone());

        if self.buffer.len() > self.config.buffer_size {
            self.buffer.pop_front();
            log::trace!("evicted oldest snapshot, history at {}", self.buffer.len());
        }
    }

    /// Report whether the newest snapshot repeats the previous one
    ///
    /// Returns the newest snapshot when it is similar to the snapshot
    /// immediately before it, judged by the configured tolerance. Returns
    /// `None` both during warm-up (history not yet full) and when no
    /// similarity was found; only the last two snapshots are ever
    /// compared, the rest of the history is not scanned.
    pub fn detect_pattern(&self) -> Option<&[u8]> {
        if self.buffer.len() < self.config.buffer_size {
            return None;
        }

        let newest = self.buffer.back()?;
        let previous = self.buffer.get(self.buffer.len() - 2)?;

        let ratio = similarity::matching_fraction(newest, previous, self.config.tolerance);
        if ratio >= self.config.tolerance {
            log::debug!("repeating pattern: {:.3} of bins within threshold", ratio);
            Some(newest)
        } else {
            None
        }
    }

    /// Drop all buffered history, keeping source and configuration
    ///
    /// After a reset the recognizer is back in its warm-up state:
    /// [`PatternRecognizer::detect_pattern`] returns `None` until the
    /// buffer has filled again.
    pub fn clear(&mut self) {
        self.buffer.clear();
        log::debug!("snapshot history cleared");
    }

    /// Number of snapshots currently buffered
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the history buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether the history has filled once and detection is live
    pub fn is_warmed_up(&self) -> bool {
        self.buffer.len() >= self.config.buffer_size
    }

    /// Number of frequency bins in every snapshot
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// The active configuration
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Buffered snapshots, oldest first
    pub fn snapshots(&self) -> impl Iterator<Item = &[u8]> {
        self.buffer.iter().map(Vec::as_slice)
    }
}
