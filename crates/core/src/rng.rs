//! RNG module - current/next piece queue
//!
//! Kinds are drawn uniformly and independently from the catalog, with
//! replacement. Repeats and long runs of one kind are possible; there is no bag.
//! The RNG is seeded so a run can be replayed exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Current and preview piece kinds
#[derive(Debug, Clone)]
pub struct PieceQueue {
    rng: StdRng,
    seed: u64,
    current: Option<PieceKind>,
    next: Option<PieceKind>,
}

impl PieceQueue {
    /// Create a new queue with the given seed. Nothing is drawn until first use.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            current: None,
            next: None,
        }
    }

    fn sample(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// Draw the kind for the next spawn.
    ///
    /// The first draw samples both the current and the preview kind; later draws
    /// promote the preview and sample a new one.
    pub fn draw(&mut self) -> PieceKind {
        let current = match self.next {
            Some(next) => next,
            None => self.sample(),
        };
        let next = self.sample();
        self.current = Some(current);
        self.next = Some(next);
        current
    }

    /// Kind of the most recent draw
    pub fn current(&self) -> Option<PieceKind> {
        self.current
    }

    /// Preview of the next draw
    pub fn peek(&self) -> Option<PieceKind> {
        self.next
    }

    /// Seed this queue was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Start over from the same seed
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
