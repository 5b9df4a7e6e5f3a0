use crate::{error::DistributionError, moments::Moments};
use prng_rs::Seed;
use std::fmt;

/// Erlang distribution
pub mod erlang;
/// Irwin-Hall distribution
pub mod irwinhall;
/// Continuous uniform distribution
pub mod uniform;

/// Lifecycle shared by every distribution.
///
/// Sampling methods never call [`Distribution::is_error`]; checking
/// parameters before sampling is up to the caller.
pub trait Distribution: fmt::Display {
    /// Full parameter record, replaced as a whole by [`Distribution::refresh`].
    type Params: Clone + fmt::Debug;

    /// Single unseeded sample.
    fn random(&mut self) -> f64;

    /// Single sample drawn from the generator's seeded sequence.
    fn next(&mut self) -> f64;

    /// `count` unseeded samples. Sample `i` is built from the `i`-th block of
    /// generator draws.
    fn distribution(&mut self, count: usize) -> Vec<f64>;

    /// `None` when the current parameters are valid.
    fn is_error(&self) -> Option<DistributionError>;

    /// Swap in a new parameter record. The generator seed is left alone.
    fn refresh(&mut self, params: Self::Params);

    fn params(&self) -> &Self::Params;

    /// Seed the owned generator.
    fn seed(&mut self, value: Option<Seed>);

    /// Closed-form moments for the current parameters.
    fn parameters(&self) -> Moments;

    /// [`Distribution::is_error`] as a `Result`, for `?` call sites.
    fn validate(&self) -> Result<(), DistributionError> {
        match self.is_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
