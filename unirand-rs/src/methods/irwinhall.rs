//! Irwin-Hall distribution: the sum of `n` independent standard uniforms.
//!
//! <https://en.wikipedia.org/wiki/Irwin%E2%80%93Hall_distribution>

use crate::{
    error::DistributionError,
    methods::{Distribution, uniform::Uniform},
    moments::Moments,
};
use prng_rs::{BasicPrng, Prng, Seed};
use std::fmt;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrwinHallParams {
    pub n: i64,
}

impl IrwinHallParams {
    /// Truncates `n` toward zero. `NaN` becomes 0.
    pub fn new(n: f64) -> Self {
        Self { n: n.trunc() as i64 }
    }

    /// Number of uniforms summed per sample; 0 for non-positive `n`.
    #[inline]
    fn summands(&self) -> usize {
        usize::try_from(self.n).unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct IrwinHall<G: Prng = BasicPrng> {
    params: IrwinHallParams,
    uniform: Uniform<G>,
}

impl IrwinHall {
    pub fn new(n: f64) -> Self {
        Self::with_generator(n, BasicPrng::new())
    }
}

impl<G: Prng> IrwinHall<G> {
    pub fn with_generator(n: f64, generator: G) -> Self {
        Self {
            params: IrwinHallParams::new(n),
            uniform: Uniform::with_generator(0.0, 1.0, generator),
        }
    }

    pub fn n(&self) -> i64 {
        self.params.n
    }

    /// Truncate and replace `n`
    pub fn refresh_n(&mut self, n: f64) {
        self.refresh(IrwinHallParams::new(n));
    }

    pub fn generator_mut(&mut self) -> &mut G {
        self.uniform.generator_mut()
    }

    pub fn mean(&self) -> f64 {
        self.params.n as f64 / 2.0
    }

    pub fn median(&self) -> f64 {
        self.params.n as f64 / 2.0
    }

    pub fn variance(&self) -> f64 {
        self.params.n as f64 / 12.0
    }

    pub fn skewness(&self) -> f64 {
        0.0
    }

    pub fn kurtosis(&self) -> f64 {
        -1.2 / self.params.n as f64
    }
}

impl<G: Prng> Distribution for IrwinHall<G> {
    type Params = IrwinHallParams;

    fn random(&mut self) -> f64 {
        let n = self.params.summands();
        self.uniform.distribution(n).into_iter().sum()
    }

    fn next(&mut self) -> f64 {
        (0..self.params.summands()).map(|_| self.uniform.next()).sum()
    }

    fn distribution(&mut self, count: usize) -> Vec<f64> {
        let n = self.params.summands();
        trace!(count, n, "drawing irwin-hall batch");
        if n == 0 {
            return vec![0.0; count];
        }
        let total = count.checked_mul(n).unwrap_or_else(|| {
            panic!("irwin-hall batch of {} samples x {} uniforms overflows usize", count, n)
        });
        // one batch of count * n uniforms, folded block by block
        self.uniform
            .distribution(total)
            .chunks_exact(n)
            .map(|block| block.iter().sum::<f64>())
            .collect()
    }

    fn is_error(&self) -> Option<DistributionError> {
        if self.params.n < 1 {
            return Some(DistributionError::NonPositiveCount(self.params.n));
        }
        None
    }

    fn refresh(&mut self, params: IrwinHallParams) {
        debug!(?params, "refreshing irwin-hall distribution");
        self.params = params;
    }

    fn params(&self) -> &IrwinHallParams {
        &self.params
    }

    fn seed(&mut self, value: Option<Seed>) {
        self.uniform.seed(value);
    }

    fn parameters(&self) -> Moments {
        Moments {
            mean: self.mean(),
            median: Some(self.median()),
            mode: None,
            variance: self.variance(),
            skewness: self.skewness(),
            kurtosis: Some(self.kurtosis()),
            entropy: None,
        }
    }
}

impl<G: Prng> fmt::Display for IrwinHall<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Irwin-Hall Distribution")?;
        write!(f, "Usage: IrwinHall::new({}).random()", self.params.n)
    }
}
