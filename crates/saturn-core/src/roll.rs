//! Uniform draws shared by the event scheduler and flavor text.
//!
//! Every random decision is a single `f64` in `[0, 1)`. Integer picks are
//! `floor(draw * n)`, so a fixed sequence of draws reproduces the same
//! outcomes.

use rand::Rng;

/// One uniform draw in `[0, 1)`.
pub fn draw(rng: &mut impl Rng) -> f64 {
    rng.random::<f64>()
}

/// Whether a fresh draw lands below `chance`.
pub fn chance(rng: &mut impl Rng, chance: f64) -> bool {
    draw(rng) < chance
}

/// Map a draw in `[0, 1)` to an index in `0..len`. Returns `None` for an
/// empty range.
pub fn index_from_draw(draw: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len_f = f64::from(u32::try_from(len).unwrap_or(u32::MAX));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (draw.clamp(0.0, 1.0) * len_f).floor() as usize;
    Some(index.min(len.saturating_sub(1)))
}

/// Pick one element of `pool` with a fresh draw.
pub fn pick<T: Copy>(rng: &mut impl Rng, pool: &[T]) -> Option<T> {
    let index = index_from_draw(draw(rng), pool.len())?;
    pool.get(index).copied()
}
