use std::cmp::Ordering;

use battler_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::CombatantId,
    config::SpeedSortTieResolution,
};

/// An object that can be ordered by speed.
pub trait SpeedOrderable {
    /// Speed. Highest speed goes first.
    fn speed(&self) -> u32;
}

impl<T> SpeedOrderable for &'_ T
where
    T: SpeedOrderable,
{
    #[inline]
    fn speed(&self) -> u32 {
        (*self).speed()
    }
}

impl SpeedOrderable for (CombatantId, u32) {
    fn speed(&self) -> u32 {
        self.1
    }
}

fn stable_move_to_position<T>(items: &mut [T], index: usize, target: usize) {
    if target == index {
        return;
    } else if index < target {
        for i in index..target {
            items.swap(i, i + 1);
        }
    } else {
        for i in ((target + 1)..=index).rev() {
            items.swap(i - 1, i);
        }
    }
}

/// Selection sort that resolves tied elements according to `tie_resolution`.
///
/// Only [`SpeedSortTieResolution::Random`] consumes RNG, and only when a tie exists.
pub fn sort_with_random_ties<T, C>(
    items: &mut [T],
    comp: C,
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: SpeedSortTieResolution,
) where
    C: Fn(&T, &T) -> Ordering,
{
    let mut sorted = 0;
    while sorted + 1 < items.len() {
        // Find all indices that are tied for the smallest elements.
        let mut smallest_indices = Vec::from([sorted]);
        for i in (sorted + 1)..items.len() {
            match comp(&items[smallest_indices[0]], &items[i]) {
                Ordering::Less => continue,
                Ordering::Greater => smallest_indices = Vec::from([i]),
                Ordering::Equal => smallest_indices.push(i),
            }
        }
        // Move smallest elements to the beginning of the list, keeping their relative order.
        let ties = smallest_indices.len();
        for (i, item_index) in smallest_indices.into_iter().enumerate() {
            stable_move_to_position(items, item_index, sorted + i);
        }
        if ties > 1 {
            match tie_resolution {
                SpeedSortTieResolution::Random => {
                    rand_util::shuffle(prng, &mut items[sorted..(sorted + ties)])
                }
                SpeedSortTieResolution::Keep => (),
                SpeedSortTieResolution::Reverse => items[sorted..(sorted + ties)].reverse(),
            }
        }
        sorted += ties;
    }
}

/// Sorts the given items by speed, fastest first.
pub fn speed_sort<T>(
    items: &mut [T],
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: SpeedSortTieResolution,
) where
    T: SpeedOrderable,
{
    sort_with_random_ties(items, |a, b| b.speed().cmp(&a.speed()), prng, tie_resolution);
}
