//! Erlang distribution: the sum of `k` exponential stages of scale `mu`.
//!
//! Sampled as `-mu * ln(u_1 * ... * u_k)`, one logarithm per sample instead
//! of one per stage. Large `k` folds the product into a log sum before it
//! underflows.
//!
//! <https://en.wikipedia.org/wiki/Erlang_distribution>

use crate::{
    error::DistributionError,
    methods::Distribution,
    moments::Moments,
    special::{digamma, ln_gamma},
};
use prng_rs::{BasicPrng, Prng, Seed};
use std::fmt;
use tracing::debug;

// A uniform draw is at least 2^-32, so the product stays well above
// f64::MIN_POSITIVE after one more multiplication.
const PRODUCT_FLOOR: f64 = 1e-280;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErlangParams {
    /// k
    pub shape: i64,
    /// mu
    pub scale: f64,
}

#[derive(Debug, Clone)]
pub struct Erlang<G: Prng = BasicPrng> {
    params: ErlangParams,
    generator: G,
}

impl Erlang {
    pub fn new(shape: i64, scale: f64) -> Self {
        Self::with_generator(shape, scale, BasicPrng::new())
    }
}

impl<G: Prng> Erlang<G> {
    pub fn with_generator(shape: i64, scale: f64, generator: G) -> Self {
        Self {
            params: ErlangParams { shape, scale },
            generator,
        }
    }

    pub fn shape(&self) -> i64 {
        self.params.shape
    }

    pub fn scale(&self) -> f64 {
        self.params.scale
    }

    pub fn refresh_with(&mut self, shape: i64, scale: f64) {
        self.refresh(ErlangParams { shape, scale });
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// `-scale * ln(p)` where `p` is the product of `shape` draws from `uniform`.
    ///
    /// Draws are flipped to `(0, 1]` so `p` is never zero. Once `p` drops
    /// below `PRODUCT_FLOOR` its log is banked and the product restarts.
    #[inline]
    fn transform(&mut self, uniform: impl Fn(&mut G) -> f64) -> f64 {
        let mut p = 1.0;
        let mut log_sum = 0.0;
        for _ in 0..self.params.shape {
            p *= 1.0 - uniform(&mut self.generator);
            if p < PRODUCT_FLOOR {
                log_sum += p.ln();
                p = 1.0;
            }
        }
        -self.params.scale * (log_sum + p.ln())
    }

    pub fn mean(&self) -> f64 {
        self.params.shape as f64 * self.params.scale
    }

    pub fn mode(&self) -> f64 {
        self.params.scale * (self.params.shape - 1) as f64
    }

    pub fn variance(&self) -> f64 {
        self.params.shape as f64 * self.params.scale.powi(2)
    }

    pub fn skewness(&self) -> f64 {
        2.0 / (self.params.shape as f64).sqrt()
    }

    pub fn entropy(&self) -> f64 {
        let k = self.params.shape as f64;
        // ln(Γ(k) * mu) split so Γ(k) never overflows
        (1.0 - k) * digamma(k) + ln_gamma(k) + self.params.scale.ln() + self.params.scale
    }
}

impl<G: Prng> Distribution for Erlang<G> {
    type Params = ErlangParams;

    fn random(&mut self) -> f64 {
        self.transform(G::random)
    }

    fn next(&mut self) -> f64 {
        self.transform(G::next)
    }

    fn distribution(&mut self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.random()).collect()
    }

    fn is_error(&self) -> Option<DistributionError> {
        let ErlangParams { shape, scale } = self.params;
        if shape <= 0 {
            return Some(DistributionError::NonPositiveShape(shape));
        }
        if scale.is_nan() || scale <= 0.0 {
            return Some(DistributionError::NonPositiveScale(scale));
        }
        None
    }

    fn refresh(&mut self, params: ErlangParams) {
        debug!(?params, "refreshing erlang distribution");
        self.params = params;
    }

    fn params(&self) -> &ErlangParams {
        &self.params
    }

    fn seed(&mut self, value: Option<Seed>) {
        self.generator.seed(value);
    }

    /// No closed-form median, so `median` is `None`.
    fn parameters(&self) -> Moments {
        Moments {
            mean: self.mean(),
            median: None,
            mode: Some(self.mode()),
            variance: self.variance(),
            skewness: self.skewness(),
            kurtosis: None,
            entropy: Some(self.entropy()),
        }
    }
}

impl<G: Prng> fmt::Display for Erlang<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Erlang Distribution")?;
        write!(
            f,
            "Usage: Erlang::new({}, {}).random()",
            self.params.shape, self.params.scale
        )
    }
}
