//! Uniform random selection over an eligible pool.

use rand::Rng;
use thiserror::Error;

/// Pick requested against an empty pool. Recoverable: callers disable the
/// pick action instead of surfacing this to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pick from an empty pool")]
pub struct EmptyPoolError;

/// Draw one element uniformly at random.
///
/// The index is drawn with [`Rng::gen_range`] over `[0, len)`, so every
/// element has probability exactly `1/len` with no float scaling and no
/// off-by-one at either end. Picks are independent; repeats are allowed.
///
/// # Errors
///
/// Returns [`EmptyPoolError`] when the pool is empty.
pub fn pick<'a, T, R>(pool: &'a [T], rng: &mut R) -> Result<&'a T, EmptyPoolError>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return Err(EmptyPoolError);
    }
    let index = rng.gen_range(0..pool.len());
    Ok(&pool[index])
}
