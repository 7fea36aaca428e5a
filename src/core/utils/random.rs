//! Seedable xorshift32 helpers
//!
//! Every system keeps its own `u32` state so runs are reproducible from the
//! configured seed.

/// Fallback state for a zero seed (xorshift never leaves 0).
pub const DEFAULT_SEED: u32 = 12345;

/// Turn a user seed into a valid xorshift state.
#[inline]
pub fn seed_state(seed: u32) -> u32 {
    if seed == 0 {
        DEFAULT_SEED
    } else {
        seed
    }
}

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform `f32` in `[0, 1)`.
#[inline]
pub fn rand_unit(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform `f32` in `[lo, hi)`.
#[inline]
pub fn rand_range(state: &mut u32, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * rand_unit(state)
}

/// Uniform integer in `[lo, hi)`. Returns `lo` for an empty range.
#[inline]
pub fn rand_int(state: &mut u32, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo) as u32;
    lo + (xorshift32(state) % span) as i32
}

/// Uniform index in `[0, len)`. `len` must be non-zero.
#[inline]
pub fn rand_index(state: &mut u32, len: usize) -> usize {
    (xorshift32(state) as usize) % len
}
