//! # prng-rs: Seedable Uniform Generators
//!
//! Base generator layer for the `unirand-rs` distributions. Every generator
//! produces uniformly distributed values in `[0, 1)` through two paths:
//!
//! - an **unseeded** path (`random`, `random_int`) that draws from the
//!   thread-local, entropy-seeded generator of the `rand` crate on every call;
//! - a **seeded** path (`next`, `next_int`) that walks a deterministic engine
//!   sequence keyed from the hash of a caller supplied [`Seed`].
//!
//! The seeded engines are small non-cryptographic generators selectable by
//! name (see [`EngineKind`]). Seeds are turned into engine keys by a
//! [`SeedHash`], SipHash-1-3 with fixed keys by default.
//!
//! ```
//! use prng_rs::{BasicPrng, Prng};
//!
//! let mut a = BasicPrng::new().with_seed(42);
//! let mut b = BasicPrng::new().with_seed(42);
//! assert_eq!(a.next(), b.next());
//! ```

mod basic;
mod constants;
mod engine;
mod error;
mod hash;
mod seed;

pub use basic::BasicPrng;
pub use constants::MODULUS;
pub use engine::{Engine, EngineKind, ParkMiller, SeededEngine, Tuchei, Xorshift};
pub use error::PrngError;
pub use hash::{SeedHash, SipSeedHash};
pub use seed::{Seed, normalize_seed, random_seed, random_seed_with};

/// Operations every uniform generator must supply.
///
/// None of the methods has a default body, so a generator missing one of
/// them does not compile.
pub trait Prng {
    /// Single unseeded value in `[0, 1)`.
    fn random(&mut self) -> f64;

    /// `n` unseeded values in `[0, 1)`, in draw order.
    fn random_n(&mut self, n: usize) -> Vec<f64>;

    /// Next value of the seeded sequence, in `[0, 1)`.
    fn next(&mut self) -> f64;

    /// Next integer of the seeded sequence.
    fn next_int(&mut self) -> u32;

    /// Single unseeded integer in `[0, 2^32)`.
    fn random_int(&mut self) -> u32;

    /// `n` unseeded integers in `[0, 2^32)`, in draw order.
    fn random_int_n(&mut self, n: usize) -> Vec<u32>;

    /// Replace the seed. `None` clears determinism.
    fn seed(&mut self, value: Option<Seed>);
}
