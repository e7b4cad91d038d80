//! Deterministic key stream.
//!
//! Keys come from Robert Jenkins' 32-bit integer hash applied to a running
//! seed. The low 28 bits of each new state are scaled into `[0, 1)`.
//!
//! The mixing steps use logical right shifts. Rotating instead collapses the
//! stream into a short cycle of a few hundred keys.

use std::cmp::Ordering;
use std::fmt;

/// Seed every generator starts from.
pub const INITIAL_SEED: u32 = 49_734_321;

const KEY_BITS_MASK: u32 = 0x0FFF_FFFF;
const KEY_SCALE: f64 = (1u32 << 28) as f64;

/// A splay tree key: an `f64` with a strict total order.
#[derive(Clone, Copy, Debug)]
pub struct Key(f64);

impl Key {
    #[inline]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Reproducible, infinite stream of keys in `[0, 1)`.
///
/// Each instance owns its state; two generators never influence each other.
#[derive(Clone, Debug)]
pub struct KeyGenerator {
    seed: u32,
}

impl KeyGenerator {
    pub fn new() -> Self {
        Self { seed: INITIAL_SEED }
    }

    /// Current hash state.
    pub fn state(&self) -> u32 {
        self.seed
    }

    /// Advance the hash and return the next key.
    pub fn next_key(&mut self) -> Key {
        let mut s = self.seed;
        s = s.wrapping_add(0x7ED5_5D16).wrapping_add(s << 12);
        s = (s ^ 0xC761_C23C) ^ (s >> 19);
        s = s.wrapping_add(0x1656_67B1).wrapping_add(s << 5);
        s = s.wrapping_add(0xD3A2_646C) ^ (s << 9);
        s = s.wrapping_add(0xFD70_46C5).wrapping_add(s << 3);
        s = (s ^ 0xB55A_4F09) ^ (s >> 16);
        self.seed = s;
        Key(f64::from(s & KEY_BITS_MASK) / KEY_SCALE)
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for KeyGenerator {
    type Item = Key;

    #[inline]
    fn next(&mut self) -> Option<Key> {
        Some(self.next_key())
    }
}
