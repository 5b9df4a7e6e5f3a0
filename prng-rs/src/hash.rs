use crate::seed::Seed;
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Deterministic mapping from a seed value to an integer.
///
/// Implementations may return negative values; callers normalise.
pub trait SeedHash {
    fn hash(&self, value: &Seed) -> i64;
}

/// SipHash-1-3 with zero keys. Stable across platforms and runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SipSeedHash;

const NUMBER_TAG: u8 = 0;
const TEXT_TAG: u8 = 1;
const INTEGER_TAG: u8 = 2;

// 2^127, first float outside the i128 range
const I128_LIMIT: f64 = 170141183460469231731687303715884105728.0;

/// The integer an integral float stands for, if it fits in `i128`.
fn as_integer(n: f64) -> Option<i128> {
    (n.fract() == 0.0 && n.abs() < I128_LIMIT).then_some(n as i128)
}

fn write_integer(hasher: &mut SipHasher13, i: i128) {
    hasher.write_u8(INTEGER_TAG);
    hasher.write_i128(i);
}

impl SeedHash for SipSeedHash {
    fn hash(&self, value: &Seed) -> i64 {
        let mut hasher = SipHasher13::new_with_keys(0, 0);
        match value {
            Seed::Integer(i) => write_integer(&mut hasher, *i),
            Seed::Number(n) => match as_integer(*n) {
                Some(i) => write_integer(&mut hasher, i),
                None => {
                    hasher.write_u8(NUMBER_TAG);
                    hasher.write_u64(n.to_bits());
                }
            },
            Seed::Text(s) => {
                hasher.write_u8(TEXT_TAG);
                hasher.write(s.as_bytes());
            }
        }
        hasher.finish() as i64
    }
}
