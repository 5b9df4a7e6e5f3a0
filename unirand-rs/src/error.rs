use thiserror::Error;

/// Parameter validation failures reported by [`crate::Distribution::is_error`].
///
/// Never produced by sampling itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("Uniform distribution: parameter \"a\" ({min}) must be less than \"b\" ({max})")]
    EmptyRange { min: f64, max: f64 },
    #[error("Irwin-Hall distribution: parameter \"n\" must be a positive integer, got {0}")]
    NonPositiveCount(i64),
    #[error("Erlang distribution: parameter \"k\" must be positive integer, got {0}")]
    NonPositiveShape(i64),
    #[error("Erlang distribution: parameter \"mu\" must be positive, got {0}")]
    NonPositiveScale(f64),
}
