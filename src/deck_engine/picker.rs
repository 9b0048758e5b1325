//! Source of randomness for draws.
//!
//! The pool asks a picker for "an index below `len`" and nothing else, so a
//! test can swap the RNG for a fixed script and assert the exact draw order.

use std::collections::VecDeque;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Chooses one index in `0..len`. Callers guarantee `len > 0`.
pub trait IndexPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by any `rand` RNG.
#[derive(Debug, Clone)]
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        RandomPicker { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker when `seed` is set, entropy-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        RandomPicker { rng }
    }
}

impl<R: Rng> IndexPicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of picks. Each value is reduced modulo `len`; once
/// the script runs out every pick is `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    script: VecDeque<usize>,
}

impl ScriptedPicker {
    pub fn new<I: IntoIterator<Item = usize>>(picks: I) -> Self {
        ScriptedPicker { script: picks.into_iter().collect() }
    }

    /// Picks not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl IndexPicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.script.pop_front().map_or(0, |i| i % len)
    }
}

impl<P: IndexPicker + ?Sized> IndexPicker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}
