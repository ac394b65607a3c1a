//! Random input arrays

use rand::Rng;

use crate::error::{Error, Result};

/// Sample `size` values uniformly from `min..=max`, with replacement.
pub fn generate_random_array<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>> {
    if min > max {
        return Err(Error::InvalidBounds { min, max });
    }
    Ok((0..size).map(|_| rng.random_range(min..=max)).collect())
}
