/// Scale an 8-bit value by a fade level (0-255 = 0.0-1.0)
///
/// Truncates, so `fade8(v, 255) == v` and `fade8(v, 0) == 0`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn fade8(value: u8, fade: u8) -> u8 {
    ((value as u16 * fade as u16) / 255) as u8
}

/// Scale an 8-bit value by a percentage (0-100)
///
/// Percentages above 100 are treated as 100.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn percent8(value: u8, percent: u8) -> u8 {
    let percent = if percent > 100 { 100 } else { percent };
    ((value as u16 * percent as u16) / 100) as u8
}

/// Small deterministic generator for sparkle placement and glow colors
///
/// `SplitMix64` mixing folded down to 32 bits. Not suitable for anything
/// but picking pixels.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        (z ^ (z >> 31)) as u32
    }

    /// Uniform-enough value in `0..bound`; zero when `bound` is zero
    #[allow(clippy::cast_possible_truncation)]
    pub const fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u32() as usize) % bound
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn next_u8(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }

    pub const fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}
