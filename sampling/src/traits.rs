use crate::errors::{Result, SamplingError};
use linfa::Float;
use ndarray::Array2;

/// Sampling method able to generate the raw draws of a design
///
/// A sampling method fills a `(factor_count, sample_count)` matrix with draws
/// from its underlying distribution: row `i` holds the `sample_count` draws of
/// the ith factor. Uniform-family methods produce values in `[0., 1.]`;
/// distribution-shaped methods produce values in their native support and may
/// leave the unit interval. Raw draws become physical factor values through
/// [`denormalize`](crate::denormalize).
pub trait SamplingMethod<F: Float> {
    /// Generates a `(factor_count, sample_count)` matrix of raw draws.
    ///
    /// # Parameters
    ///
    /// * `factor_count`: number of factors, i.e. rows of the matrix
    /// * `sample_count`: number of samples, i.e. columns of the matrix
    ///
    /// Errors with [`SamplingError::InvalidDimension`] when either count is
    /// zero; no draw is performed in that case.
    fn generate_samples(&self, factor_count: usize, sample_count: usize) -> Result<Array2<F>>;
}

pub(crate) fn check_dimensions(factor_count: usize, sample_count: usize) -> Result<()> {
    if factor_count == 0 || sample_count == 0 {
        return Err(SamplingError::InvalidDimension {
            factor_count,
            sample_count,
        });
    }
    Ok(())
}
