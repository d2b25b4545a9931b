//! RNG module - seeded piece generation
//!
//! Every piece is drawn uniformly from the four kinds (I, O, T, L) and
//! stamped with the next sequential id. There is no bag: repeats are allowed.
//!
//! The random source is a simple LCG so that a seed fully determines the
//! sequence of kinds, which keeps tests deterministic.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::trace;

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed: state, state }
    }

    /// Seed from the wall clock.
    pub fn from_time() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
            .unwrap_or(1);
        Self::new(secs)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG have short periods; take the high half.
        (self.next_u32() >> 16) % max
    }

    /// The seed this RNG was created with (after the zero fix-up).
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

/// Produces pieces with strictly increasing ids.
///
/// One generator exists per session. It is lent (`&mut`) to the queue
/// whenever the queue needs to refill.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    next_id: u64,
}

impl PieceGenerator {
    /// Create a generator with a deterministic seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Create a generator around an existing random source.
    pub fn with_rng(rng: SimpleRng) -> Self {
        Self { rng, next_id: 0 }
    }

    #[cfg(test)]
    fn with_next_id(seed: u32, next_id: u64) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id,
        }
    }

    /// Create a new piece, consuming one id.
    ///
    /// Ids are `u64`; at one piece per nanosecond the counter lasts over
    /// five centuries, so it is never expected to overflow.
    pub fn generate(&mut self) -> Piece {
        let kind = PieceKind::from_index(self.rng.next_range(PieceKind::ALL.len() as u32));
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;
        trace!(%piece, "generated piece");
        piece
    }

    /// The id the next generated piece will carry.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
