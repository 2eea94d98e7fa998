// src/synthesis/seed.rs

use rand::{Error, RngCore, SeedableRng};

/// Reproducible pseudo-random stream derived from a string key.
///
/// The key is folded into a 32-bit state with a `31 * h + unit` rolling hash
/// over its UTF-16 code units (wrapping, signed). Each draw advances the state
/// with a 13/17/5 xorshift and maps it to [0, 1) by dividing by 2^32.
///
/// Every stream owns its state; there is no process-wide generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedStream {
    state: i32,
}

const STATE_SPACE: f64 = 4_294_967_296.0;

impl SeedStream {
    pub fn from_key(key: &str) -> Self {
        let state = key
            .encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
        Self { state }
    }

    fn advance(&mut self) -> u32 {
        let mut h = self.state;
        h ^= h << 13;
        h ^= h >> 17; // arithmetic shift
        h ^= h << 5;
        self.state = h;
        h as u32
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.advance()) / STATE_SPACE
    }
}

/// Choose one element of `pool` with a single draw from `stream`.
/// Returns `None` for an empty pool without consuming a draw.
pub fn pick<'a, T>(pool: &'a [T], stream: &mut SeedStream) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    let idx = (stream.next_f64() * pool.len() as f64).floor() as usize;
    pool.get(idx.min(pool.len() - 1))
}

impl RngCore for SeedStream {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.advance());
        let lo = u64::from(self.advance());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeedStream {
    /// The folded state, little-endian.
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: i32::from_le_bytes(seed),
        }
    }
}
