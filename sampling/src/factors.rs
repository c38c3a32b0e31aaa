use crate::errors::{Result, SamplingError};
use linfa::Float;
use ndarray::Array1;
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// A named design variable with its sampling interval.
///
/// A factor is immutable once declared; its interval must be non-empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Factor<F: Float> {
    name: String,
    lower: F,
    upper: F,
}

impl<F: Float> Factor<F> {
    /// Declares a factor sampled over `[lower, upper]`.
    ///
    /// ```
    /// use doegen_sampling::Factor;
    ///
    /// let height = Factor::new("height", 50., 200.).unwrap();
    /// assert_eq!(height.name(), "height");
    /// ```
    ///
    /// Errors with [`SamplingError::InvalidBounds`] unless `lower < upper`.
    pub fn new(name: impl Into<String>, lower: F, upper: F) -> Result<Self> {
        let name = name.into();
        if lower >= upper {
            return Err(SamplingError::InvalidBounds {
                name,
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Factor { name, lower, upper })
    }

    /// Name of the factor
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower bound of the sampling interval
    pub fn lower(&self) -> F {
        self.lower
    }

    /// Upper bound of the sampling interval
    pub fn upper(&self) -> F {
        self.upper
    }
}

/// An ordered set of uniquely named factors.
///
/// Declaration order drives everything downstream: raw sample matrices carry
/// one row per factor in this order, and sample tables one column per factor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct FactorSet<F: Float> {
    factors: Vec<Factor<F>>,
}

impl<F: Float> FactorSet<F> {
    /// Builds a factor set, rejecting duplicate names.
    pub fn new(factors: Vec<Factor<F>>) -> Result<Self> {
        for (i, factor) in factors.iter().enumerate() {
            if factors[..i].iter().any(|f| f.name() == factor.name()) {
                return Err(SamplingError::DuplicateFactor(factor.name().to_string()));
            }
        }
        Ok(FactorSet { factors })
    }

    /// Builds a factor set from `(name, (lower, upper))` pairs, preserving order.
    ///
    /// ```
    /// use doegen_sampling::FactorSet;
    ///
    /// let factors = FactorSet::from_pairs([
    ///     ("height", (50., 200.)),
    ///     ("width", (0.06, 0.1)),
    /// ]).unwrap();
    /// assert_eq!(factors.len(), 2);
    /// ```
    pub fn from_pairs<S: Into<String>>(
        pairs: impl IntoIterator<Item = (S, (F, F))>,
    ) -> Result<Self> {
        let factors = pairs
            .into_iter()
            .map(|(name, (lower, upper))| Factor::new(name, lower, upper))
            .collect::<Result<Vec<_>>>()?;
        Self::new(factors)
    }

    /// Number of declared factors
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether the set declares no factor at all
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Factor names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.factors.iter().map(|f| f.name()).collect()
    }

    /// Iterates over the factors in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Factor<F>> {
        self.factors.iter()
    }

    /// Lower bounds as a vector, one entry per factor in declaration order
    pub fn lower_bounds(&self) -> Array1<F> {
        self.factors.iter().map(|f| f.lower()).collect()
    }

    /// Upper bounds as a vector, one entry per factor in declaration order
    pub fn upper_bounds(&self) -> Array1<F> {
        self.factors.iter().map(|f| f.upper()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SamplingError;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_reversed_bounds_rejected() {
        let res = Factor::new("pressure", 100., 50.);
        assert!(matches!(
            res,
            Err(SamplingError::InvalidBounds { ref name, .. }) if name == "pressure"
        ));
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        assert!(Factor::new("flat", 1., 1.).is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let res = FactorSet::from_pairs([("temp", (0., 1.)), ("temp", (5., 6.))]);
        assert!(matches!(
            res,
            Err(SamplingError::DuplicateFactor(ref name)) if name == "temp"
        ));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let factors = FactorSet::from_pairs([
            ("height", (50., 200.)),
            ("width", (0.06, 0.1)),
            ("temp", (-50., 250.)),
        ])
        .unwrap();
        assert_eq!(factors.names(), vec!["height", "width", "temp"]);
        assert_abs_diff_eq!(factors.lower_bounds(), array![50., 0.06, -50.]);
        assert_abs_diff_eq!(factors.upper_bounds(), array![200., 0.1, 250.]);
    }
}
