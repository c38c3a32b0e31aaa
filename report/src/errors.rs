use doegen_sampling::SamplingError;
use thiserror::Error;

/// A result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// An error raised while persisting or rendering a sample table
#[derive(Error, Debug)]
pub enum ReportError {
    /// When the sampling pipeline fails before any artifact is written
    #[error(transparent)]
    Sampling(#[from] SamplingError),
    /// When the table file cannot be opened or written
    #[error("table I/O error")]
    Io(#[from] std::io::Error),
    /// When CSV encoding fails
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// When reading a table back from CSV fails
    #[error("csv read error: {0}")]
    CsvRead(#[from] ndarray_csv::ReadError),
    /// When the scatter matrix cannot be rendered
    #[error("plot error: {0}")]
    Plot(String),
}
