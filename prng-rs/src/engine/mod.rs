use crate::error::PrngError;
use std::{fmt, str::FromStr};

/// Park-Miller minimal standard
mod parkmiller;
/// Tyche-i style ARX generator
mod tuchei;
/// xorshift32
mod xorshift;

pub use parkmiller::ParkMiller;
pub use tuchei::Tuchei;
pub use xorshift::Xorshift;

/// Deterministic stream behind the seeded path of a generator.
pub trait SeededEngine {
    fn next_u32(&mut self) -> u32;
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EngineKind {
    #[default]
    Tuchei,
    ParkMiller,
    Xorshift,
}

impl EngineKind {
    pub const ALL: [EngineKind; 3] = [Self::Tuchei, Self::ParkMiller, Self::Xorshift];

    pub fn name(self) -> &'static str {
        match self {
            Self::Tuchei => "tuchei",
            Self::ParkMiller => "parkmiller",
            Self::Xorshift => "xorshift",
        }
    }
}

impl FromStr for EngineKind {
    type Err = PrngError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "tuchei" => Ok(Self::Tuchei),
            "parkmiller" => Ok(Self::ParkMiller),
            "xorshift" => Ok(Self::Xorshift),
            _ => Err(PrngError::UnknownEngine(name.to_owned())),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub enum Engine {
    Tuchei(Tuchei),
    ParkMiller(ParkMiller),
    Xorshift(Xorshift),
}

impl Engine {
    pub fn new(kind: EngineKind, key: u64) -> Self {
        match kind {
            EngineKind::Tuchei => Self::Tuchei(Tuchei::new(key)),
            EngineKind::ParkMiller => Self::ParkMiller(ParkMiller::new(key)),
            EngineKind::Xorshift => Self::Xorshift(Xorshift::new(key)),
        }
    }

    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Tuchei(_) => EngineKind::Tuchei,
            Engine::ParkMiller(_) => EngineKind::ParkMiller,
            Engine::Xorshift(_) => EngineKind::Xorshift,
        }
    }
}

impl SeededEngine for Engine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            Engine::Tuchei(e) => e.next_u32(),
            Engine::ParkMiller(e) => e.next_u32(),
            Engine::Xorshift(e) => e.next_u32(),
        }
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        match self {
            Engine::Tuchei(e) => e.next_f64(),
            Engine::ParkMiller(e) => e.next_f64(),
            Engine::Xorshift(e) => e.next_f64(),
        }
    }
}
