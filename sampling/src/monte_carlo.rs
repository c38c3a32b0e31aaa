use crate::errors::Result;
use crate::traits::{check_dimensions, SamplingMethod};
use linfa::Float;
use ndarray::{Array, Array2};
use ndarray_rand::{rand::Rng, rand::SeedableRng, rand_distr::Uniform, RandomExt};
use rand_xoshiro::Xoshiro256Plus;
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// The Monte Carlo design consists in drawing every cell of the raw matrix
/// independently from the standard uniform distribution over `[0., 1.]`.
/// There is no correlation structure between factors or between samples.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct MonteCarlo<R: Rng + Clone> {
    /// Random generator used for reproducibility
    rng: R,
}

impl MonteCarlo<Xoshiro256Plus> {
    /// Constructor using the default, entropy-seeded random generator
    ///
    /// ```
    /// use doegen_sampling::{MonteCarlo, SamplingMethod};
    ///
    /// let raw: ndarray::Array2<f64> = MonteCarlo::new().generate_samples(2, 10).unwrap();
    /// assert_eq!(raw.dim(), (2, 10));
    /// ```
    pub fn new() -> Self {
        MonteCarlo {
            rng: Xoshiro256Plus::from_entropy(),
        }
    }
}

impl<R: Rng + Clone> MonteCarlo<R> {
    /// Sets the random generator, for reproducible designs
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> MonteCarlo<R2> {
        MonteCarlo { rng }
    }
}

impl<F: Float, R: Rng + Clone> SamplingMethod<F> for MonteCarlo<R> {
    fn generate_samples(&self, factor_count: usize, sample_count: usize) -> Result<Array2<F>> {
        check_dimensions(factor_count, sample_count)?;
        let mut rng = self.rng.clone();
        let raw = Array::random_using((factor_count, sample_count), Uniform::new(0., 1.), &mut rng);
        Ok(raw.mapv(F::cast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SamplingError;
    use ndarray::Array2;

    #[test]
    fn test_monte_carlo_shape_and_range() {
        let raw: Array2<f64> = MonteCarlo::new()
            .with_rng(Xoshiro256Plus::seed_from_u64(42))
            .generate_samples(3, 50)
            .unwrap();
        assert_eq!(raw.dim(), (3, 50));
        assert!(raw.iter().all(|&v| (0. ..1.).contains(&v)));
    }

    #[test]
    fn test_monte_carlo_reproducible() {
        let mc = MonteCarlo::new().with_rng(Xoshiro256Plus::seed_from_u64(7));
        let a: Array2<f64> = mc.generate_samples(2, 9).unwrap();
        let b: Array2<f64> = mc.generate_samples(2, 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_monte_carlo_rejects_empty_design() {
        let mc = MonteCarlo::new().with_rng(Xoshiro256Plus::seed_from_u64(0));
        let zero_factors: crate::Result<Array2<f64>> = mc.generate_samples(0, 10);
        assert!(matches!(
            zero_factors,
            Err(SamplingError::InvalidDimension {
                factor_count: 0,
                sample_count: 10
            })
        ));
        let zero_samples: crate::Result<Array2<f64>> = mc.generate_samples(4, 0);
        assert!(matches!(
            zero_samples,
            Err(SamplingError::InvalidDimension {
                factor_count: 4,
                sample_count: 0
            })
        ));
    }
}
