use crate::errors::Result;
use crate::traits::{check_dimensions, SamplingMethod};
use linfa::Float;
use ndarray::{Array, Array2};
use ndarray_rand::{rand::Rng, rand::SeedableRng, rand_distr::Beta, RandomExt};
use rand_xoshiro::Xoshiro256Plus;
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// First shape parameter of the beta distribution
const ALPHA: f64 = 5.;
/// Second shape parameter of the beta distribution
const BETA: f64 = 2.;

/// The Beta design draws every factor row independently from a fixed
/// `Beta(5, 2)` distribution. Draws lie in `(0., 1.)` with a right-skewed
/// mass (mean `5/7`), so denormalized values concentrate near the upper
/// factor bound.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct BetaRandom<R: Rng + Clone> {
    /// Random generator used for reproducibility
    rng: R,
}

impl BetaRandom<Xoshiro256Plus> {
    /// Constructor using the default, entropy-seeded random generator
    ///
    /// ```
    /// use doegen_sampling::{BetaRandom, SamplingMethod};
    ///
    /// let raw: ndarray::Array2<f64> = BetaRandom::new().generate_samples(2, 10).unwrap();
    /// assert_eq!(raw.dim(), (2, 10));
    /// ```
    pub fn new() -> Self {
        BetaRandom {
            rng: Xoshiro256Plus::from_entropy(),
        }
    }
}

impl<R: Rng + Clone> BetaRandom<R> {
    /// Sets the random generator, for reproducible designs
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> BetaRandom<R2> {
        BetaRandom { rng }
    }
}

impl<F: Float, R: Rng + Clone> SamplingMethod<F> for BetaRandom<R> {
    fn generate_samples(&self, factor_count: usize, sample_count: usize) -> Result<Array2<F>> {
        check_dimensions(factor_count, sample_count)?;
        let mut rng = self.rng.clone();
        let distr = Beta::new(ALPHA, BETA).unwrap();
        let raw = Array::random_using((factor_count, sample_count), distr, &mut rng);
        Ok(raw.mapv(F::cast))
    }
}
