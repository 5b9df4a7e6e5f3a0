use crate::{error::DistributionError, methods::Distribution, moments::Moments};
use prng_rs::{BasicPrng, Prng, Seed};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformParams {
    pub min: f64,
    pub max: f64,
}

/// Continuous uniform distribution on `[min, max)`
#[derive(Debug, Clone)]
pub struct Uniform<G: Prng = BasicPrng> {
    params: UniformParams,
    generator: G,
}

impl Uniform {
    pub fn new(min: f64, max: f64) -> Self {
        Self::with_generator(min, max, BasicPrng::new())
    }
}

impl<G: Prng> Uniform<G> {
    pub fn with_generator(min: f64, max: f64, generator: G) -> Self {
        Self {
            params: UniformParams { min, max },
            generator,
        }
    }

    #[inline]
    fn scale(&self, u: f64) -> f64 {
        self.params.min + (self.params.max - self.params.min) * u
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    pub fn mean(&self) -> f64 {
        (self.params.min + self.params.max) / 2.0
    }

    pub fn median(&self) -> f64 {
        self.mean()
    }

    pub fn variance(&self) -> f64 {
        (self.params.max - self.params.min).powi(2) / 12.0
    }

    pub fn skewness(&self) -> f64 {
        0.0
    }

    pub fn kurtosis(&self) -> f64 {
        -1.2
    }

    pub fn entropy(&self) -> f64 {
        (self.params.max - self.params.min).ln()
    }
}

impl<G: Prng> Distribution for Uniform<G> {
    type Params = UniformParams;

    fn random(&mut self) -> f64 {
        let u = self.generator.random();
        self.scale(u)
    }

    fn next(&mut self) -> f64 {
        let u = self.generator.next();
        self.scale(u)
    }

    fn distribution(&mut self, count: usize) -> Vec<f64> {
        let mut values = self.generator.random_n(count);
        for value in values.iter_mut() {
            *value = self.scale(*value);
        }
        values
    }

    fn is_error(&self) -> Option<DistributionError> {
        let UniformParams { min, max } = self.params;
        // also rejects NaN bounds
        if !(min < max) {
            return Some(DistributionError::EmptyRange { min, max });
        }
        None
    }

    fn refresh(&mut self, params: UniformParams) {
        debug!(?params, "refreshing uniform distribution");
        self.params = params;
    }

    fn params(&self) -> &UniformParams {
        &self.params
    }

    fn seed(&mut self, value: Option<Seed>) {
        self.generator.seed(value);
    }

    fn parameters(&self) -> Moments {
        Moments {
            mean: self.mean(),
            median: Some(self.median()),
            mode: None,
            variance: self.variance(),
            skewness: self.skewness(),
            kurtosis: Some(self.kurtosis()),
            entropy: Some(self.entropy()),
        }
    }
}

impl<G: Prng> fmt::Display for Uniform<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Uniform Distribution")?;
        write!(
            f,
            "Usage: Uniform::new({}, {}).random()",
            self.params.min, self.params.max
        )
    }
}
