//! Frequency data source abstraction
//!
//! The recognizer does not run its own FFT; it pulls byte frequency data
//! from whatever analyser the host application already drives (a
//! `getByteFrequencyData`-style analyser, an FFT thread, a test script).
//! Implementations sit outside this crate behind the [`FrequencySource`]
//! trait.

/// Source of frequency-domain magnitude snapshots
///
/// # Contract
///
/// * `frequency_bin_count` returns a nonzero value and never changes over
///   the lifetime of the source; it is queried once when a recognizer is
///   constructed.
/// * `fill_frequency_data` overwrites the whole slice with the current
///   per-bin magnitudes, one byte in [0, 255] per bin. The slice handed
///   in always has exactly `frequency_bin_count()` elements.
///
/// Pulling data is infallible: a source that cannot produce magnitudes is
/// in breach of its contract rather than an error the recognizer handles.
pub trait FrequencySource {
    /// Number of frequency bins in every snapshot this source produces
    fn frequency_bin_count(&self) -> usize;

    /// Overwrite `buffer` with the current frequency-domain magnitudes
    fn fill_frequency_data(&mut self, buffer: &mut [u8]);
}

/// A recognizer can borrow a source that the rest of the application
/// keeps using, the same way `std::io::Read` works through `&mut R`.
impl<S: FrequencySource + ?Sized> FrequencySource for &mut S {
    fn frequency_bin_count(&self) -> usize {
        (**self).frequency_bin_count()
    }

    fn fill_frequency_data(&mut self, buffer: &mut [u8]) {
        (**self).fill_frequency_data(buffer)
    }
}
