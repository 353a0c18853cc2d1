use std::mem;

use crate::PseudoRandomNumberGenerator;

/// Returns whether an event with probability `numerator / denominator` occurs.
///
/// Always consumes one value, even for certain events, so the sequence does not depend on the odds.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next().rem_euclid(denominator.max(1)) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    if max <= min {
        return min;
    }
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random integer in the range `[min, max]`.
pub fn range_inclusive(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    range(prng, min, max + 1)
}

/// Returns a uniform float in `[0, 1)`.
pub fn random_float(prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
    // Generators produce 32-bit values.
    prng.next() as f64 / (1u64 << 32) as f64
}

/// Returns a random element of the slice.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    match slice.len() {
        0 => None,
        1 => slice.first(),
        len => slice.get(range(prng, 0, len as u64) as usize),
    }
}

/// Fisher-Yates shuffle.
pub fn shuffle<T>(prng: &mut dyn PseudoRandomNumberGenerator, items: &mut [T]) {
    let len = items.len();
    if len < 2 {
        return;
    }
    for start in 0..(len - 1) {
        let next = range(prng, start as u64, len as u64) as usize;
        if start != next {
            let (head, tail) = items.split_at_mut(next);
            mem::swap(&mut head[start], &mut tail[0]);
        }
    }
}
