use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use battler_effects::battle::CoreBattle;
use battler_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// A random number generator whose values at chosen positions in the sequence can be replaced.
///
/// The underlying generator always advances, so replacing one value never shifts the rest.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        let next = self.real.next();
        self.count += 1;
        let fake_entry = self.fake_values.entry(self.count);
        match fake_entry {
            Entry::Occupied(fake_entry) => fake_entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ControlledRandomNumberGenerator {
    /// Number of values drawn so far.
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    /// Replaces the `count`-th value drawn, counting from 1.
    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    /// Replaces the next values drawn, in order.
    ///
    /// `0` makes any [`chance`][`battler_prng::rand_util::chance`] roll succeed.
    pub fn fake_next_values<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = u64>,
    {
        let start = self.count + 1;
        self.fake_values.extend(
            values
                .into_iter()
                .enumerate()
                .map(|(offset, value)| (start + offset, value)),
        );
    }
}

/// The battle's generator, if it was built with
/// [`TestBattleBuilder::with_controlled_rng`][`crate::TestBattleBuilder::with_controlled_rng`].
pub fn get_controlled_rng_for_battle(
    battle: &mut CoreBattle,
) -> Option<&mut ControlledRandomNumberGenerator> {
    battle
        .prng_mut()
        .as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}
