//! Marsaglia xorshift32 with the (13, 17, 5) triple

use super::SeededEngine;
use crate::constants::{U32_RANGE, XORSHIFT_FALLBACK};

#[derive(Debug, Clone)]
pub struct Xorshift {
    state: u32,
}

impl Xorshift {
    pub fn new(key: u64) -> Self {
        let folded = (key >> 32) as u32 ^ key as u32;
        let state = if folded == 0 { XORSHIFT_FALLBACK } else { folded };
        Self { state }
    }
}

impl SeededEngine for Xorshift {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / U32_RANGE
    }
}
