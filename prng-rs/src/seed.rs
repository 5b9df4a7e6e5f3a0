use crate::{
    constants::MODULUS,
    hash::{SeedHash, SipSeedHash},
};
use rand::Rng;
use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

/// Value a generator can be seeded with.
///
/// Integer seeds keep every bit; a `Number` holding an integral value seeds
/// the same sequence as the equal `Integer`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Seed {
    Integer(i128),
    Number(f64),
    Text(String),
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Integer(i) => write!(f, "{}", i),
            Seed::Number(n) => write!(f, "{}", n),
            Seed::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

macro_rules! integer_seed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Seed {
                fn from(value: $t) -> Self {
                    Seed::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_seed!(i32, u32, i64, u64, i128);

impl From<f64> for Seed {
    fn from(value: f64) -> Self {
        Seed::Number(value)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_owned())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}

/// Reduce a (possibly negative) hash into `[0, MODULUS)`.
///
/// Negative remainders are lifted by `MODULUS - 1`, not `MODULUS`.
#[inline]
pub fn normalize_seed(hash: i64) -> u32 {
    let modulus = i64::from(MODULUS);
    let mut seed = hash % modulus;
    while seed < 0 {
        seed += modulus - 1;
    }
    seed as u32
}

/// Fresh seed derived from the wall clock and one unseeded draw.
pub fn random_seed() -> u32 {
    random_seed_with(&SipSeedHash)
}

/// [`random_seed`] with a caller supplied hash.
pub fn random_seed_with<H: SeedHash + ?Sized>(hasher: &H) -> u32 {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_millis() as f64);
    let jitter = (rand::rng().random::<f64>() * f64::from(MODULUS)).floor();
    normalize_seed(hasher.hash(&Seed::Number(now_ms + jitter)))
}
