//! RNG module - injectable piece randomness
//!
//! A [`Session`](crate::Session) never reaches for global randomness. It draws
//! from a [`PieceSource`] handed to it at construction:
//!
//! - [`SimpleRng`]: seedable LCG, reseeded every time a game starts
//! - [`ScriptedSource`]: replays a fixed list of kinds and rotation flips,
//!   for deterministic tests

use std::collections::VecDeque;

use crate::types::PieceKind;

/// Supplies the "random" choices a session makes when spawning pieces.
pub trait PieceSource {
    /// Called when a game starts. Sources that ignore seeds keep the default.
    fn reseed(&mut self, _seed: u32) {}

    /// Kind of the next spawned piece
    fn next_kind(&mut self) -> PieceKind;

    /// Whether the opening piece gets one extra rotation
    fn flip(&mut self) -> bool;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
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
        // Low bits of an LCG have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for SimpleRng {
    fn reseed(&mut self, seed: u32) {
        *self = SimpleRng::new(seed);
    }

    fn next_kind(&mut self) -> PieceKind {
        PieceKind::from_index(self.next_range(PieceKind::ALL.len() as u32) as usize)
    }

    fn flip(&mut self) -> bool {
        self.next_range(2) == 0
    }
}

/// Replays scripted choices in order.
///
/// When the kind script runs out the last kind repeats (or `O` if none was
/// given); when the flip script runs out, flips are `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    kinds: VecDeque<PieceKind>,
    flips: VecDeque<bool>,
    last: Option<PieceKind>,
}

impl ScriptedSource {
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            flips: VecDeque::new(),
            last: None,
        }
    }

    /// Script the opening-rotation coin flips as well
    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips = flips.into_iter().collect();
        self
    }

    /// Kinds not yet drawn
    pub fn remaining(&self) -> usize {
        self.kinds.len()
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self
            .kinds
            .pop_front()
            .or(self.last)
            .unwrap_or(PieceKind::O);
        self.last = Some(kind);
        kind
    }

    fn flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut rng = SimpleRng::new(7);
        let first: Vec<_> = (0..10).map(|_| rng.next_kind()).collect();
        rng.reseed(7);
        let second: Vec<_> = (0..10).map(|_| rng.next_kind()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rng_covers_all_kinds() {
        let mut rng = SimpleRng::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.next_kind().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "seen: {:?}", seen);
    }

    #[test]
    fn test_rng_flips_both_ways() {
        let mut rng = SimpleRng::new(42);
        let heads = (0..200).filter(|_| rng.flip()).count();
        assert!(heads > 0 && heads < 200);
    }

    #[test]
    fn test_scripted_source_replays_in_order() {
        let mut src = ScriptedSource::new([PieceKind::I, PieceKind::T]).with_flips([true]);
        assert_eq!(src.next_kind(), PieceKind::I);
        assert!(src.flip());
        assert_eq!(src.next_kind(), PieceKind::T);
        assert!(!src.flip());
        // Exhausted: keep repeating the last kind.
        assert_eq!(src.next_kind(), PieceKind::T);
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn test_scripted_source_empty_defaults_to_o() {
        let mut src = ScriptedSource::default();
        assert_eq!(src.next_kind(), PieceKind::O);
    }
}
