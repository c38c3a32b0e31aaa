use thiserror::Error;

/// A result type for sampling operations
pub type Result<T> = std::result::Result<T, SamplingError>;

/// An error raised while declaring factors or generating a design
#[derive(Error, Debug)]
pub enum SamplingError {
    /// When a design with no factors or no samples is requested
    #[error(
        "invalid dimension: factor count {factor_count} and sample count {sample_count} must both be positive"
    )]
    InvalidDimension {
        /// Requested number of factors
        factor_count: usize,
        /// Requested number of samples
        sample_count: usize,
    },
    /// When a factor interval is empty or reversed
    #[error("invalid bounds for factor '{name}': lower bound {lower} must be strictly less than upper bound {upper}")]
    InvalidBounds {
        /// Name of the offending factor
        name: String,
        /// Declared lower bound
        lower: f64,
        /// Declared upper bound
        upper: f64,
    },
    /// When two factors share the same name
    #[error("duplicate factor name '{0}'")]
    DuplicateFactor(String),
    /// When a matrix does not have one row per declared factor
    #[error("shape mismatch: expected {expected} factor rows, got {actual}")]
    ShapeMismatch {
        /// Number of declared factors
        expected: usize,
        /// Row count of the offending matrix
        actual: usize,
    },
}
