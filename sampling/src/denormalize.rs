use crate::errors::{Result, SamplingError};
use crate::factors::FactorSet;
use linfa::Float;
use ndarray::{Array2, ArrayBase, Axis, Data, Ix2};

/// Rescales raw draws into the declared factor intervals.
///
/// Row `i` of `raw` is mapped affinely onto factor `i`'s interval:
/// `v ↦ (upper - lower) * v + lower`, so a draw of `0.` lands exactly on the
/// lower bound and a draw of `1.` exactly on the upper bound. The map is
/// applied independently per row and preserves ordering within a row.
///
/// Values are neither clamped nor validated against `[0., 1.]`: raw draws
/// outside the unit interval (normal designs) map outside the declared
/// bounds, and that excursion is carried through untouched.
///
/// Errors with [`SamplingError::ShapeMismatch`] when the row count of `raw`
/// differs from the number of declared factors, so a miswired matrix never
/// silently mislabels data.
///
/// ```
/// use doegen_sampling::{denormalize, FactorSet};
/// use ndarray::arr2;
///
/// let factors = FactorSet::from_pairs([("height", (50., 200.))]).unwrap();
/// let scaled = denormalize(&arr2(&[[0., 0.5, 1.]]), &factors).unwrap();
/// assert_eq!(scaled, arr2(&[[50., 125., 200.]]));
/// ```
pub fn denormalize<F: Float>(
    raw: &ArrayBase<impl Data<Elem = F>, Ix2>,
    factors: &FactorSet<F>,
) -> Result<Array2<F>> {
    if raw.nrows() != factors.len() {
        return Err(SamplingError::ShapeMismatch {
            expected: factors.len(),
            actual: raw.nrows(),
        });
    }
    let lower = factors.lower_bounds();
    let span = (factors.upper_bounds() - &lower).insert_axis(Axis(1));
    let lower = lower.insert_axis(Axis(1));
    Ok(raw * &span + &lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::FactorSet;
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;

    fn demo_factors() -> FactorSet<f64> {
        FactorSet::from_pairs([("height", (50., 200.)), ("width", (0.06, 0.1))]).unwrap()
    }

    #[test]
    fn test_denormalize_maps_unit_draws_onto_bounds() {
        let raw = arr2(&[[0., 0.25, 0.5, 1.], [1., 0.75, 0.5, 0.]]);
        let scaled = denormalize(&raw, &demo_factors()).unwrap();
        let expected = arr2(&[[50., 87.5, 125., 200.], [0.1, 0.09, 0.08, 0.06]]);
        assert_abs_diff_eq!(scaled, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_denormalize_does_not_clamp() {
        // Draws outside [0, 1], as a normal design produces them
        let raw = arr2(&[[-0.25, 1.5]]);
        let factors = FactorSet::from_pairs([("temp", (0., 100.))]).unwrap();
        let scaled = denormalize(&raw, &factors).unwrap();
        assert_abs_diff_eq!(scaled, arr2(&[[-25., 150.]]), epsilon = 1e-12);
    }

    #[test]
    fn test_denormalize_is_monotonic() {
        let raw = arr2(&[[0.1, 0.2, 0.7]]);
        let factors = FactorSet::from_pairs([("x", (-3., 12.))]).unwrap();
        let scaled = denormalize(&raw, &factors).unwrap();
        assert!(scaled[[0, 0]] < scaled[[0, 1]] && scaled[[0, 1]] < scaled[[0, 2]]);
    }

    #[test]
    fn test_denormalize_rejects_row_mismatch() {
        let raw = arr2(&[[0.5, 0.5]]);
        let res = denormalize(&raw, &demo_factors());
        assert!(matches!(
            res,
            Err(SamplingError::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }
}
