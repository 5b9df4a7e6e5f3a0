use thiserror::Error;

/// Errors raised while configuring a generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrngError {
    #[error("unknown PRNG engine \"{0}\" (expected one of: tuchei, parkmiller, xorshift)")]
    UnknownEngine(String),
}
