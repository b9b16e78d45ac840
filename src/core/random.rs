//! Xorshift32 PRNG used for placement trials and relaxation jitter.
//!
//! State is a plain `u32` owned by whichever core needs randomness, so every
//! randomized outcome is reproducible under a caller-supplied seed.

pub const DEFAULT_SEED: u32 = 12345;

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform f32 in `[0, 1)`.
#[inline]
pub fn next_f32(state: &mut u32) -> f32 {
    // 24 mantissa bits keep the conversion exact.
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform f32 in `[lo, hi)`. Returns `lo` when the range is empty.
#[inline]
pub fn uniform(state: &mut u32, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return lo;
    }
    lo + next_f32(state) * (hi - lo)
}

/// Symmetric jitter in `[-magnitude, magnitude]`.
#[inline]
pub fn jitter(state: &mut u32, magnitude: f32) -> f32 {
    (next_f32(state) * 2.0 - 1.0) * magnitude
}

/// Seeds of 0 would lock xorshift at 0 forever; remap them.
#[inline]
pub fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 { DEFAULT_SEED } else { seed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_f32_stays_in_unit_interval() {
        let mut state = DEFAULT_SEED;
        for _ in 0..1000 {
            let v = next_f32(&mut state);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = 777;
        let mut b = 777;
        for _ in 0..32 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut state = sanitize_seed(0);
        assert_ne!(xorshift32(&mut state), 0);
    }
}
