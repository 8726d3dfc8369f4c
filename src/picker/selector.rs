//! Uniform random selection over the catalogue.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalogue::Marker;

use super::PickError;

/// Source of uniform randomness for picks and spin lengths.
///
/// Production code uses [`EntropyRandom`]; tests implement this to force
/// specific indices.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. Callers never pass zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform value in `[low, high)`.
    fn next_in_range(&mut self, low: f32, high: f32) -> f32;
}

/// `StdRng`-backed source, seeded from the OS unless a seed is given.
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn next_in_range(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}

/// Choose an index uniformly from `0..len`.
pub fn pick_index<R: RandomSource + ?Sized>(len: usize, rng: &mut R) -> Result<usize, PickError> {
    if len == 0 {
        return Err(PickError::EmptyCatalogue);
    }

    let index = rng.next_index(len);
    if index >= len {
        return Err(PickError::IndexOutOfRange { index, len });
    }
    Ok(index)
}

/// Choose one marker uniformly at random.
pub fn pick<'a, R: RandomSource + ?Sized>(
    markers: &'a [Marker],
    rng: &mut R,
) -> Result<&'a Marker, PickError> {
    let index = pick_index(markers.len(), rng)?;
    Ok(&markers[index])
}
