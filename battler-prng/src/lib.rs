pub mod rand_util;

use std::any::Any;

use rand::Rng;

/// A pseudo-random number generator that can be deterministically replayed from its seed.
///
/// The effect engine never reseeds a generator. Every random decision (damage variance, speed
/// ties, probabilistic effects) flows through a single instance owned by the battle.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// Returns the initial seed the generator was created with.
    fn initial_seed(&self) -> u64;

    /// Returns the next 32-bit integer in the sequence, widened to 64 bits.
    fn next(&mut self) -> u64;

    /// Mutable cast to [`Any`], so tests can reach a concrete generator behind a trait object.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Linear congruential generator, the default [`PseudoRandomNumberGenerator`].
#[derive(Debug, Clone)]
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    seed: u64,
}

impl RealPseudoRandomNumberGenerator {
    const MULTIPLIER: u64 = 0x5D588B656C078965;
    const INCREMENT: u64 = 0x269EC3;

    /// Creates a new generator.
    ///
    /// Two generators created with the same seed produce the same sequence. A random seed is
    /// chosen when none is given.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            initial_seed: seed,
            seed,
        }
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.seed = self
            .seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        // Lower bits are predictable.
        self.seed >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
