//! # unirand-rs: Parameterised Random Distributions
//!
//! Samplers for named probability distributions layered on top of the
//! uniform generators of [`prng_rs`]. Every distribution owns exactly one
//! generator and shares one lifecycle:
//!
//! 1. construct with positional parameters (no validation),
//! 2. optionally check [`Distribution::is_error`],
//! 3. sample with [`Distribution::random`], [`Distribution::next`] (seeded) or
//!    [`Distribution::distribution`] (batch),
//! 4. swap parameters with [`Distribution::refresh`] and keep sampling.
//!
//! Sampling never validates. Invalid parameters give degenerate values
//! (zeros, negative numbers, `NaN`) instead of errors.
//!
//! ```
//! use unirand_rs::{Distribution, Erlang, IrwinHall};
//!
//! let mut ih = IrwinHall::new(4.0);
//! assert!(ih.is_error().is_none());
//! let xs = ih.distribution(10);
//! assert!(xs.iter().all(|x| (0.0..=4.0).contains(x)));
//!
//! let erlang = Erlang::new(3, 2.0);
//! assert_eq!(erlang.mean(), 6.0);
//! ```

mod error;
pub mod methods;
mod moments;
mod special;

#[cfg(test)]
mod test_utils;

pub use error::DistributionError;
pub use methods::{
    Distribution,
    erlang::{Erlang, ErlangParams},
    irwinhall::{IrwinHall, IrwinHallParams},
    uniform::{Uniform, UniformParams},
};
pub use moments::Moments;
pub use prng_rs::{BasicPrng, Prng, Seed};
