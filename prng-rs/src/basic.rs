use crate::{
    Prng,
    engine::{Engine, EngineKind, SeededEngine},
    error::PrngError,
    hash::{SeedHash, SipSeedHash},
    seed::Seed,
};
use rand::Rng;
use tracing::debug;

/// Default generator: entropy for `random*`, a keyed engine for `next*`.
///
/// With no seed set, `next` and `next_int` fall back to unseeded draws, so
/// they are only reproducible after [`Prng::seed`] (or [`BasicPrng::with_seed`]).
#[derive(Debug, Clone)]
pub struct BasicPrng<H: SeedHash = SipSeedHash> {
    seed: Option<Seed>,
    kind: EngineKind,
    engine: Option<Engine>,
    hasher: H,
}

impl Default for BasicPrng {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicPrng {
    pub fn new() -> Self {
        Self::with_hasher(SipSeedHash)
    }
}

impl<H: SeedHash> BasicPrng<H> {
    /// Unseeded generator using `hasher` to derive engine keys
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            seed: None,
            kind: EngineKind::default(),
            engine: None,
            hasher,
        }
    }

    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed(Some(seed.into()));
        self
    }

    /// Select the seeded engine by name. Re-keys the engine if a seed is set.
    pub fn with_engine(mut self, name: &str) -> Result<Self, PrngError> {
        self.set_engine(name.parse()?);
        Ok(self)
    }

    pub fn set_engine(&mut self, kind: EngineKind) {
        debug!(engine = %kind, "selecting seeded engine");
        self.kind = kind;
        self.rekey();
    }

    pub fn engine_kind(&self) -> EngineKind {
        self.kind
    }

    pub fn seed_value(&self) -> Option<&Seed> {
        self.seed.as_ref()
    }

    fn rekey(&mut self) {
        self.engine = self
            .seed
            .as_ref()
            .map(|seed| Engine::new(self.kind, self.hasher.hash(seed) as u64));
    }
}

impl<H: SeedHash> Prng for BasicPrng<H> {
    #[inline]
    fn random(&mut self) -> f64 {
        rand::rng().random()
    }

    fn random_n(&mut self, n: usize) -> Vec<f64> {
        let mut rng = rand::rng();
        (0..n).map(|_| rng.random()).collect()
    }

    #[inline]
    fn next(&mut self) -> f64 {
        match self.engine.as_mut() {
            Some(engine) => engine.next_f64(),
            None => self.random(),
        }
    }

    #[inline]
    fn next_int(&mut self) -> u32 {
        match self.engine.as_mut() {
            Some(engine) => engine.next_u32(),
            None => self.random_int(),
        }
    }

    #[inline]
    fn random_int(&mut self) -> u32 {
        rand::rng().random()
    }

    fn random_int_n(&mut self, n: usize) -> Vec<u32> {
        let mut rng = rand::rng();
        (0..n).map(|_| rng.random()).collect()
    }

    fn seed(&mut self, value: Option<Seed>) {
        match &value {
            Some(seed) => debug!(%seed, engine = %self.kind, "seeding generator"),
            None => debug!("clearing generator seed"),
        }
        self.seed = value;
        self.rekey();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next_values(prng: &mut impl Prng, n: usize) -> Vec<f64> {
        (0..n).map(|_| prng.next()).collect()
    }

    #[test]
    fn test_seeded_sequences_match() {
        for kind in EngineKind::ALL {
            let mut a = BasicPrng::new().with_engine(kind.name()).unwrap().with_seed(42);
            let mut b = BasicPrng::new().with_engine(kind.name()).unwrap().with_seed(42);
            assert_eq!(next_values(&mut a, 100), next_values(&mut b, 100));
            assert_eq!(a.next_int(), b.next_int());
        }
    }

    #[test]
    fn test_string_seed() {
        let mut a = BasicPrng::new().with_seed("unirand");
        let mut b = BasicPrng::new();
        b.seed(Some("unirand".into()));
        assert_eq!(next_values(&mut a, 10), next_values(&mut b, 10));
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut prng = BasicPrng::new().with_seed(5);
        let first = next_values(&mut prng, 10);
        prng.seed(Some(5.into()));
        assert_eq!(next_values(&mut prng, 10), first);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = BasicPrng::new().with_seed(1);
        let mut b = BasicPrng::new().with_seed(2);
        assert_ne!(next_values(&mut a, 10), next_values(&mut b, 10));
    }

    #[test]
    fn test_wide_integer_seeds_differ() {
        let mut a = BasicPrng::new().with_seed(u64::MAX);
        let mut b = BasicPrng::new().with_seed(u64::MAX - 1);
        assert_ne!(next_values(&mut a, 10), next_values(&mut b, 10));

        let mut c = BasicPrng::new().with_seed(42u64);
        let mut d = BasicPrng::new().with_seed(42.0);
        assert_eq!(next_values(&mut c, 10), next_values(&mut d, 10));
    }

    #[test]
    fn test_clear_seed() {
        let mut prng = BasicPrng::new().with_seed(3);
        assert!(prng.seed_value().is_some());
        prng.seed(None);
        assert!(prng.seed_value().is_none());
        for _ in 0..1000 {
            let u = prng.next();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_engine_switch_rekeys() {
        let mut a = BasicPrng::new().with_seed(9);
        a.set_engine(EngineKind::Xorshift);
        let mut b = BasicPrng::new().with_engine("xorshift").unwrap().with_seed(9);
        assert_eq!(next_values(&mut a, 10), next_values(&mut b, 10));
    }

    #[test]
    fn test_unknown_engine_name() {
        assert!(matches!(
            BasicPrng::new().with_engine("lcg"),
            Err(PrngError::UnknownEngine(name)) if name == "lcg"
        ));
    }

    #[test]
    fn test_unseeded_ranges() {
        let mut prng = BasicPrng::new();
        assert!((0.0..1.0).contains(&prng.random()));
        let xs = prng.random_n(1000);
        assert_eq!(xs.len(), 1000);
        assert!(xs.iter().all(|x| (0.0..1.0).contains(x)));
        assert_eq!(prng.random_int_n(17).len(), 17);
        assert!(prng.random_n(0).is_empty());
    }

    #[test]
    fn test_custom_hasher() {
        struct Constant;
        impl SeedHash for Constant {
            fn hash(&self, _value: &Seed) -> i64 {
                -1
            }
        }
        let mut a = BasicPrng::with_hasher(Constant).with_seed(1);
        let mut b = BasicPrng::with_hasher(Constant).with_seed("other");
        assert_eq!(next_values(&mut a, 5), next_values(&mut b, 5));
    }
}
