//! Constants for seed arithmetic and the seeded engines

/// Modulus for seed arithmetic, 2^31 - 1.
pub const MODULUS: u32 = 2147483647;

/// 2^32 as a float, used to map a `u32` onto `[0, 1)`.
pub const U32_RANGE: f64 = 4294967296.0;

// Tyche-i initial state words
pub const TUCHEI_C: u32 = 2654435769;
pub const TUCHEI_D: u32 = 1367130551;
pub const TUCHEI_WARMUP: usize = 20;

// Park-Miller minimal standard (revised multiplier)
pub const PARKMILLER_A: u64 = 48271;

// Fallback state when a xorshift key folds to zero
pub const XORSHIFT_FALLBACK: u32 = 2463534242;
