//! Random sources for the generator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of every random choice the generator makes.
///
/// Production code uses [`StdRandom`]; tests pin outcomes with a seeded
/// [`StdRandom`] or a [`ScriptedRandom`].
pub trait RandomSource: Send {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

/// Uniformly choose one element of a non-empty catalog
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> &'a T
where
    R: RandomSource + ?Sized,
{
    &items[rng.pick(items.len())]
}

/// [`RandomSource`] backed by `rand`'s standard generator
#[derive(Debug, Clone)]
pub struct StdRandom(StdRng);

impl StdRandom {
    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.0.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Replays a fixed script of picks and coin flips.
///
/// Picks are reduced modulo the requested length. An exhausted script keeps
/// answering `0` and `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    flips: VecDeque<bool>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue index answers for `pick`
    pub fn with_picks<I: IntoIterator<Item = usize>>(mut self, picks: I) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queue answers for `chance`
    pub fn with_flips<I: IntoIterator<Item = bool>>(mut self, flips: I) -> Self {
        self.flips.extend(flips);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }
}
