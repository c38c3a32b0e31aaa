use crate::errors::{Result, SamplingError};
use crate::factors::FactorSet;
use linfa::Float;
use ndarray::{Array2, ArrayBase, ArrayView1, Data, Ix2};

/// The terminal sample table: one row per sample, one named column per factor.
///
/// Columns keep the factor declaration order, so the table header matches the
/// factor set it was assembled from.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleTable<F: Float> {
    names: Vec<String>,
    /// (sample_count, factor_count), sample-major
    values: Array2<F>,
}

impl<F: Float> SampleTable<F> {
    /// Builds a table by transposing a factor-major denormalized matrix.
    ///
    /// Errors with [`SamplingError::ShapeMismatch`] when the matrix does not
    /// carry one row per declared factor.
    pub fn assemble(
        denormalized: &ArrayBase<impl Data<Elem = F>, Ix2>,
        factors: &FactorSet<F>,
    ) -> Result<Self> {
        if denormalized.nrows() != factors.len() {
            return Err(SamplingError::ShapeMismatch {
                expected: factors.len(),
                actual: denormalized.nrows(),
            });
        }
        Ok(SampleTable {
            names: factors.names().iter().map(|n| n.to_string()).collect(),
            values: denormalized.t().to_owned(),
        })
    }

    /// Builds a table directly from sample-major values and column names.
    ///
    /// Errors with [`SamplingError::ShapeMismatch`] when the number of names
    /// does not match the number of value columns.
    pub fn new(names: Vec<String>, values: Array2<F>) -> Result<Self> {
        if names.len() != values.ncols() {
            return Err(SamplingError::ShapeMismatch {
                expected: names.len(),
                actual: values.ncols(),
            });
        }
        Ok(SampleTable { names, values })
    }

    /// Column names, in factor declaration order
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Number of samples (table rows)
    pub fn num_samples(&self) -> usize {
        self.values.nrows()
    }

    /// Number of factors (table columns)
    pub fn num_factors(&self) -> usize {
        self.values.ncols()
    }

    /// Sample-major values, shape (num_samples, num_factors)
    pub fn values(&self) -> &Array2<F> {
        &self.values
    }

    /// Column of the named factor, or `None` for an unknown name
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, F>> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|j| self.values.column(j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::FactorSet;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr2, array};

    fn demo_factors() -> FactorSet<f64> {
        FactorSet::from_pairs([("height", (50., 200.)), ("width", (0.06, 0.1))]).unwrap()
    }

    #[test]
    fn test_assemble_transposes_and_names_columns() {
        let denormalized = arr2(&[[50., 87.5, 125., 200.], [0.1, 0.09, 0.08, 0.06]]);
        let table = SampleTable::assemble(&denormalized, &demo_factors()).unwrap();

        assert_eq!(table.column_names(), ["height", "width"]);
        assert_eq!(table.num_samples(), 4);
        assert_eq!(table.num_factors(), 2);
        for j in 0..table.num_factors() {
            for k in 0..table.num_samples() {
                assert_eq!(table.values()[[k, j]], denormalized[[j, k]]);
            }
        }
    }

    #[test]
    fn test_column_lookup_by_name() {
        let denormalized = arr2(&[[50., 125.], [0.1, 0.06]]);
        let table = SampleTable::assemble(&denormalized, &demo_factors()).unwrap();
        assert_abs_diff_eq!(table.column("width").unwrap(), array![0.1, 0.06]);
        assert!(table.column("depth").is_none());
    }

    #[test]
    fn test_assemble_rejects_row_mismatch() {
        let denormalized = arr2(&[[1., 2.], [3., 4.], [5., 6.]]);
        let res = SampleTable::assemble(&denormalized, &demo_factors());
        assert!(matches!(
            res,
            Err(SamplingError::ShapeMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_new_rejects_name_mismatch() {
        let res = SampleTable::new(vec!["only".to_string()], arr2(&[[1., 2.]]));
        assert!(matches!(res, Err(SamplingError::ShapeMismatch { .. })));
    }
}
