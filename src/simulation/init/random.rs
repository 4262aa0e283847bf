/// Xorshift32 random number generator
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform draw in [0, n) via fixed-point multiply, no division.
#[inline]
pub(super) fn roll(state: &mut u32, n: u32) -> u32 {
    ((xorshift32(state) as u64 * n as u64) >> 32) as u32
}

/// Zero is a fixed point of xorshift32, so a zero seed is remapped.
#[inline]
pub(super) fn normalize_seed(seed: u32) -> u32 {
    if seed == 0 {
        0x9E37_79B9
    } else {
        seed
    }
}
