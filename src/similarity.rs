//! Tolerance-based similarity between frequency snapshots
//!
//! Two snapshots are compared bin by bin:
//! 1. Derive the per-bin threshold: `threshold = 255 * (1 - tolerance)`
//! 2. Count bins whose absolute magnitude difference is strictly below
//!    the threshold
//! 3. Divide by the bin count to get the fraction of matching bins
//! 4. The snapshots match when that fraction reaches `tolerance`
//!    (inclusive)
//!
//! The single `tolerance` parameter plays a dual role: it sets how far two
//! bins may drift apart before they stop counting as equal, and it sets
//! how many bins must agree before the snapshots count as a repeat. At the
//! default tolerance of 0.85 the per-bin threshold is 38.25, so bins may
//! differ by at most 38 magnitude steps out of 255, and at least 85% of
//! bins must agree.
//!
//! Tolerance 1.0 is accepted but degenerate: the per-bin threshold
//! collapses to zero and the strict inequality can never hold, so nothing
//! matches, identical snapshots included.
//!
//! # Example
//!
//! ```
//! use spectral_pattern::compare_patterns;
//!
//! let steady = vec![200u8; 32];
//! let drifted: Vec<u8> = steady.iter().map(|&v| v - 10).collect();
//! assert!(compare_patterns(&steady, &drifted, 0.85)?);
//! # Ok::<(), spectral_pattern::PatternError>(())
//! ```

use crate::error::PatternError;

/// Full-scale magnitude of a frequency bin
const FULL_SCALE: f32 = u8::MAX as f32;

/// Check that two snapshots are comparable and the tolerance is usable
fn validate_comparison(a: &[u8], b: &[u8], tolerance: f32) -> Result<(), PatternError> {
    if a.len() != b.len() {
        return Err(PatternError::InvalidInput(format!(
            "snapshot lengths differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Err(PatternError::InvalidInput(
            "snapshots must contain at least one bin".to_string(),
        ));
    }

    if !tolerance.is_finite() || tolerance <= 0.0 || tolerance > 1.0 {
        return Err(PatternError::InvalidInput(format!(
            "tolerance must be a finite value in (0, 1], got {}",
            tolerance
        )));
    }

    Ok(())
}

/// Fraction of bins within the per-bin threshold.
///
/// Callers guarantee `a.len() == b.len()` and a non-empty input; the
/// public entry points validate before reaching this.
pub(crate) fn matching_fraction(a: &[u8], b: &[u8], tolerance: f32) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    debug_assert!(!a.is_empty());

    let threshold = FULL_SCALE * (1.0 - tolerance);

    let mut matched = 0usize;
    for (x, y) in a.iter().zip(b.iter()) {
        // Strict inequality: a difference landing exactly on the
        // threshold does not count as a match.
        if f32::from(x.abs_diff(*y)) < threshold {
            matched += 1;
        }
    }

    matched as f32 / a.len() as f32
}

/// Compute the fraction of matching bins between two snapshots
///
/// Useful on its own when a visualizer wants a continuous similarity
/// signal (e.g. to drive effect intensity) rather than the thresholded
/// yes/no answer of [`compare_patterns`].
///
/// # Arguments
///
/// * `a` - First snapshot, one magnitude in [0, 255] per frequency bin
/// * `b` - Second snapshot, same length as `a`
/// * `tolerance` - Value in (0, 1] from which the per-bin threshold
///   `255 * (1 - tolerance)` is derived
///
/// # Returns
///
/// Fraction of bins in [0.0, 1.0] whose magnitudes differ by strictly
/// less than the per-bin threshold
///
/// # Errors
///
/// Returns `PatternError::InvalidInput` if the snapshots differ in
/// length, are empty, or the tolerance is outside (0, 1]
///
/// # Example
///
/// ```
/// use spectral_pattern::match_ratio;
///
/// let a = [0u8, 0, 0, 0];
/// let b = [255u8, 0, 0, 0];
/// let ratio = match_ratio(&a, &b, 0.85)?;
/// assert!((ratio - 0.75).abs() < 1e-6);
/// # Ok::<(), spectral_pattern::PatternError>(())
/// ```
pub fn match_ratio(a: &[u8], b: &[u8], tolerance: f32) -> Result<f32, PatternError> {
    validate_comparison(a, b, tolerance)?;
    Ok(matching_fraction(a, b, tolerance))
}

/// Decide whether two snapshots are similar enough to count as a repeat
///
/// # Arguments
///
/// * `a` - First snapshot, one magnitude in [0, 255] per frequency bin
/// * `b` - Second snapshot, same length as `a`
/// * `tolerance` - Value in (0, 1] controlling both the per-bin threshold
///   and the required fraction of matching bins
///
/// # Returns
///
/// `true` when the fraction of matching bins is at least `tolerance`
///
/// # Errors
///
/// Returns `PatternError::InvalidInput` if the snapshots differ in
/// length, are empty, or the tolerance is outside (0, 1]
pub fn compare_patterns(a: &[u8], b: &[u8], tolerance: f32) -> Result<bool, PatternError> {
    validate_comparison(a, b, tolerance)?;
    Ok(matching_fraction(a, b, tolerance) >= tolerance)
}
