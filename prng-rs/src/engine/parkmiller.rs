//! Park-Miller minimal standard Lehmer generator
//!
//! `x' = 48271 * x mod (2^31 - 1)`. The state never leaves `[1, MODULUS)`,
//! so integers are 31-bit and floats lie in the open interval `(0, 1)`.

use super::SeededEngine;
use crate::constants::{MODULUS, PARKMILLER_A};

#[derive(Debug, Clone)]
pub struct ParkMiller {
    state: u32,
}

impl ParkMiller {
    pub fn new(key: u64) -> Self {
        let state = (key % u64::from(MODULUS - 1)) as u32 + 1;
        Self { state }
    }
}

impl SeededEngine for ParkMiller {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = ((u64::from(self.state) * PARKMILLER_A) % u64::from(MODULUS)) as u32;
        self.state
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(MODULUS)
    }
}
