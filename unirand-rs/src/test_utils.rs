use prng_rs::{Prng, Seed};

/// Deterministic generator that records how many values it handed out.
///
/// Unseeded and seeded draws walk the same cycle `0.0, 0.25, 0.5, 0.75`.
#[derive(Debug, Default)]
pub(crate) struct CountingPrng {
    pub(crate) draws: usize,
    pub(crate) batches: Vec<usize>,
    pub(crate) seeds: Vec<Option<Seed>>,
}

impl CountingPrng {
    fn step(&mut self) -> f64 {
        let value = (self.draws % 4) as f64 * 0.25;
        self.draws += 1;
        value
    }
}

impl Prng for CountingPrng {
    fn random(&mut self) -> f64 {
        self.step()
    }

    fn random_n(&mut self, n: usize) -> Vec<f64> {
        self.batches.push(n);
        (0..n).map(|_| self.step()).collect()
    }

    fn next(&mut self) -> f64 {
        self.step()
    }

    fn next_int(&mut self) -> u32 {
        self.draws += 1;
        self.draws as u32
    }

    fn random_int(&mut self) -> u32 {
        self.next_int()
    }

    fn random_int_n(&mut self, n: usize) -> Vec<u32> {
        (0..n).map(|_| self.next_int()).collect()
    }

    fn seed(&mut self, value: Option<Seed>) {
        self.seeds.push(value);
    }
}
