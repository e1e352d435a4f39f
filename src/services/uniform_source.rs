use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomness consumed by the simulation: uniform values in `[0, 1)`.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

pub struct RngUniformSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngUniformSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngUniformSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> UniformSource for RngUniformSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}
