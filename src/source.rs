//! Deck synthesis: deck size and cache-busting URLs
//!
//! Randomness and wall-clock time sit behind [`RandomSource`] so a test can
//! pin both the deck size and the uniqueness token.

use crate::constants::DECK_SIZE;
use crate::types::CatImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Number of cats for a new deck, drawn from [`DECK_SIZE`]
    fn deck_size(&mut self) -> usize;

    /// Millisecond timestamp used as the uniqueness token prefix
    fn timestamp_millis(&mut self) -> i64;
}

/// Entropy-seeded RNG and the real clock
pub struct SystemSource {
    rng: StdRng,
}

impl SystemSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemSource {
    fn deck_size(&mut self) -> usize {
        self.rng.gen_range(DECK_SIZE)
    }

    fn timestamp_millis(&mut self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Deterministic source for tests: seeded RNG and a clock that ticks by 1ms per call
#[cfg(test)]
pub struct SeededSource {
    rng: StdRng,
    clock: i64,
}

#[cfg(test)]
impl SeededSource {
    pub fn new(seed: u64, start_millis: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            clock: start_millis,
        }
    }
}

#[cfg(test)]
impl RandomSource for SeededSource {
    fn deck_size(&mut self) -> usize {
        self.rng.gen_range(DECK_SIZE)
    }

    fn timestamp_millis(&mut self) -> i64 {
        let now = self.clock;
        self.clock += 1;
        now
    }
}

/// Build the URL for one cat: `base?timestamp=<millis>-<index>`
pub fn cat_url(base: &str, millis: i64, index: usize) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{}{}timestamp={}-{}", base, sep, millis, index)
}

/// Synthesize a full deck. Nothing is fetched here; URLs are enough.
pub fn draw_deck(base: &str, source: &mut dyn RandomSource) -> Vec<CatImage> {
    let count = source.deck_size();
    let millis = source.timestamp_millis();
    (0..count)
        .map(|i| CatImage::new(cat_url(base, millis, i)))
        .collect()
}
