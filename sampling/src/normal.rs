use crate::errors::Result;
use crate::traits::{check_dimensions, SamplingMethod};
use linfa::Float;
use ndarray::{Array, Array2};
use ndarray_rand::{rand::Rng, rand::SeedableRng, rand_distr::Normal, RandomExt};
use rand_xoshiro::Xoshiro256Plus;
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Location of the bell within the unit interval
const MEAN: f64 = 0.5;
/// Spread keeping about 99.8% of the mass inside `[0., 1.]`
const STD_DEV: f64 = 0.16;

/// The Normal design draws every factor row independently from a fixed
/// normal distribution centered on the unit interval (mean 0.5, standard
/// deviation 0.16).
///
/// Draws are unbounded: denormalized values may land outside the declared
/// factor bounds. Values are not clamped.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct NormalRandom<R: Rng + Clone> {
    /// Random generator used for reproducibility
    rng: R,
}

impl NormalRandom<Xoshiro256Plus> {
    /// Constructor using the default, entropy-seeded random generator
    ///
    /// ```
    /// use doegen_sampling::{NormalRandom, SamplingMethod};
    ///
    /// let raw: ndarray::Array2<f64> = NormalRandom::new().generate_samples(2, 10).unwrap();
    /// assert_eq!(raw.dim(), (2, 10));
    /// ```
    pub fn new() -> Self {
        NormalRandom {
            rng: Xoshiro256Plus::from_entropy(),
        }
    }
}

impl<R: Rng + Clone> NormalRandom<R> {
    /// Sets the random generator, for reproducible designs
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> NormalRandom<R2> {
        NormalRandom { rng }
    }
}

impl<F: Float, R: Rng + Clone> SamplingMethod<F> for NormalRandom<R> {
    fn generate_samples(&self, factor_count: usize, sample_count: usize) -> Result<Array2<F>> {
        check_dimensions(factor_count, sample_count)?;
        let mut rng = self.rng.clone();
        let distr = Normal::new(MEAN, STD_DEV).unwrap();
        let raw = Array::random_using((factor_count, sample_count), distr, &mut rng);
        Ok(raw.mapv(F::cast))
    }
}
