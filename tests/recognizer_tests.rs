//! Integration tests for the pattern recognizer
//!
//! Drives the public API the way a visualizer would: a simulated analyser
//! feeds the recognizer once per frame and the tests observe when
//! detection fires over a whole session.

use spectral_pattern::{FrequencySource, PatternRecognizer, RecognizerConfig};

/// Analyser stand-in replaying a scripted list of spectra, holding the
/// last one once the script runs out.
struct ScriptedAnalyser {
    frames: Vec<Vec<u8>>,
    cursor: usize,
}

impl ScriptedAnalyser {
    fn new(frames: Vec<Vec<u8>>) -> Self {
        assert!(!frames.is_empty(), "script needs at least one frame");
        Self { frames, cursor: 0 }
    }
}

impl FrequencySource for ScriptedAnalyser {
    fn frequency_bin_count(&self) -> usize {
        self.frames[0].len()
    }

    fn fill_frequency_data(&mut self, buffer: &mut [u8]) {
        let frame = &self.frames[self.cursor.min(self.frames.len() - 1)];
        buffer.copy_from_slice(frame);
        self.cursor += 1;
    }
}

/// Spectra that drift slowly: consecutive frames differ by at most 18
/// magnitude steps per bin, well inside the default per-bin threshold.
fn drifting_frames(count: usize, bins: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|frame| {
            (0..bins)
                .map(|bin| (100 + (bin * 13 + frame * 5) % 23) as u8)
                .collect()
        })
        .collect()
}

/// Spectra that strobe between silence and full scale on every frame.
fn strobe_frames(count: usize, bins: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|frame| {
            let level = if frame % 2 == 0 { 0u8 } else { 255u8 };
            vec![level; bins]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slow_drift_detects_after_warm_up() {
        let analyser = ScriptedAnalyser::new(drifting_frames(60, 32));
        let mut recognizer = PatternRecognizer::new(analyser);

        let mut detections = 0;
        for frame in 0..60 {
            recognizer.update_buffer();
            if recognizer.detect_pattern().is_some() {
                detections += 1;
                assert!(
                    frame >= 29,
                    "detection fired during warm-up at frame {}",
                    frame
                );
            }
        }

        // The default 30-frame history fills on frame 29; every frame
        // after that drifts within tolerance, so all of them match.
        assert_eq!(detections, 31);
    }

    #[test]
    fn test_strobing_spectrum_never_detects() {
        let analyser = ScriptedAnalyser::new(strobe_frames(60, 32));
        let mut recognizer = PatternRecognizer::new(analyser);

        for _ in 0..60 {
            recognizer.update_buffer();
            assert_eq!(recognizer.detect_pattern(), None);
        }
    }

    #[test]
    fn test_detection_near_required_bin_fraction() {
        let config = RecognizerConfig {
            buffer_size: 2,
            ..RecognizerConfig::default()
        };

        // 14 of 16 bins agree: 0.875 clears the required 0.85.
        let mut close = vec![120u8; 16];
        close[0] = 250;
        close[1] = 250;
        let analyser = ScriptedAnalyser::new(vec![vec![120u8; 16], close]);
        let mut recognizer = PatternRecognizer::with_config(analyser, config.clone()).unwrap();
        recognizer.update_buffer();
        recognizer.update_buffer();
        assert!(recognizer.detect_pattern().is_some());

        // 13 of 16 bins agree: 0.8125 misses it.
        let mut off = vec![120u8; 16];
        off[0] = 250;
        off[1] = 250;
        off[2] = 250;
        let analyser = ScriptedAnalyser::new(vec![vec![120u8; 16], off]);
        let mut recognizer = PatternRecognizer::with_config(analyser, config).unwrap();
        recognizer.update_buffer();
        recognizer.update_buffer();
        assert_eq!(recognizer.detect_pattern(), None);
    }

    #[test]
    fn test_detection_returns_the_newest_snapshot() {
        let config = RecognizerConfig {
            buffer_size: 2,
            ..RecognizerConfig::default()
        };
        let analyser = ScriptedAnalyser::new(vec![vec![100u8, 100]]);
        let mut recognizer = PatternRecognizer::with_config(analyser, config).unwrap();

        recognizer.update_buffer();
        recognizer.update_buffer();

        assert_eq!(recognizer.detect_pattern(), Some(&[100u8, 100][..]));
    }

    #[test]
    fn test_recognizer_can_borrow_a_shared_analyser() {
        let mut analyser = ScriptedAnalyser::new(drifting_frames(8, 8));

        {
            let mut recognizer = PatternRecognizer::new(&mut analyser);
            for _ in 0..4 {
                recognizer.update_buffer();
            }
            assert_eq!(recognizer.len(), 4);
        }

        // The application keeps using the analyser after the recognizer
        // is gone.
        let mut scratch = vec![0u8; analyser.frequency_bin_count()];
        analyser.fill_frequency_data(&mut scratch);
        assert_eq!(scratch.len(), 8);
    }

    #[test]
    fn test_config_loaded_from_json() {
        // The shape a visualizer's settings file would carry.
        let config: RecognizerConfig =
            serde_json::from_str(r#"{ "buffer_size": 4, "tolerance": 0.9 }"#)
                .expect("config should deserialize");
        config.validate().expect("deserialized config should be valid");

        let analyser = ScriptedAnalyser::new(vec![vec![60u8; 8]]);
        let mut recognizer = PatternRecognizer::with_config(analyser, config).unwrap();
        for _ in 0..4 {
            recognizer.update_buffer();
        }
        assert!(recognizer.detect_pattern().is_some());

        // A settings file with a broken tolerance still parses but fails
        // validation before it can reach a recognizer.
        let broken: RecognizerConfig =
            serde_json::from_str(r#"{ "buffer_size": 4, "tolerance": 0.0 }"#).unwrap();
        assert!(broken.validate().is_err());
    }
}
