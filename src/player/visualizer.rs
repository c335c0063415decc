//! Visualizer feed: randomized bar magnitudes gated by play state.
//!
//! The bars have no relationship to any audio signal; there is no audio. They
//! are uniform noise regenerated on a fast tick while playing and held at
//! zero otherwise. Do not attempt to derive them from real signal data.

use rand::Rng;
use rand::rngs::StdRng;

/// Magnitudes range over `0..=MAX_MAGNITUDE`.
pub const MAX_MAGNITUDE: u8 = 100;

pub struct Visualizer {
    bars: Vec<u8>,
}

impl Visualizer {
    pub fn new(bars: usize) -> Self {
        Self {
            bars: vec![0; bars],
        }
    }

    pub fn bars(&self) -> &[u8] {
        &self.bars
    }

    /// Redraw every bar independently from the uniform distribution.
    pub fn randomize(&mut self, rng: &mut StdRng) {
        for bar in &mut self.bars {
            *bar = rng.random_range(0..=MAX_MAGNITUDE);
        }
    }

    /// Drop all bars to zero, the stopped/paused display.
    pub fn silence(&mut self) {
        self.bars.fill(0);
    }
}
