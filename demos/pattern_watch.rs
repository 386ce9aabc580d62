//! Demo: watch a synthetic analyser for repeating patterns
//!
//! Drives a recognizer over a simulated spectrum that alternates between
//! held chords and abrupt jumps, printing a line whenever the held
//! stretch is flagged as repeating. Run with `RUST_LOG=debug` to see the
//! recognizer's internal logging.

use spectral_pattern::{FrequencySource, PatternRecognizer, RecognizerConfig};

const BINS: usize = 64;

/// Frames per held chord before the spectrum jumps
const HOLD_FRAMES: usize = 45;

/// Simulated analyser: holds a spectrum for a stretch of frames with a
/// little jitter, then jumps to the next chord.
struct SimulatedAnalyser {
    frame: usize,
}

impl FrequencySource for SimulatedAnalyser {
    fn frequency_bin_count(&self) -> usize {
        BINS
    }

    fn fill_frequency_data(&mut self, buffer: &mut [u8]) {
        let chord = self.frame / HOLD_FRAMES;
        for (bin, value) in buffer.iter_mut().enumerate() {
            let base = (chord * 90 + bin * 3) % 256;
            let jitter = (self.frame * 7 + bin) % 5;
            *value = ((base + jitter) % 256) as u8;
        }
        self.frame += 1;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let analyser = SimulatedAnalyser { frame: 0 };
    let config = RecognizerConfig::default();
    let mut recognizer = PatternRecognizer::with_config(analyser, config)?;

    let mut detections = 0usize;
    let total_frames = 300;

    for frame in 0..total_frames {
        recognizer.update_buffer();

        if let Some(snapshot) = recognizer.detect_pattern() {
            detections += 1;
            let mean: u32 =
                snapshot.iter().map(|&v| u32::from(v)).sum::<u32>() / snapshot.len() as u32;
            println!("frame {:>3}: repeating pattern, mean magnitude {}", frame, mean);
        }
    }

    println!();
    println!("{} of {} frames flagged as repeating", detections, total_frames);

    Ok(())
}
