use crate::errors::Result;
use crate::persist::save_table;
use crate::plot::{scatter_matrix, Palette};
use doegen_sampling::{denormalize, FactorSet, SampleTable, SamplingError, SamplingMethod};
use linfa::Float;
use log::{debug, info};
use std::path::Path;

/// Configuration of one dataset generation run.
#[derive(Clone, Debug)]
pub struct RunConfig<F: Float> {
    /// Factors to sample; declaration order is the column order of the table
    pub factors: FactorSet<F>,
    /// Number of samples to generate
    pub sample_count: usize,
    /// Base name of the artifacts: `<base_name>.csv` and `<base_name>.png`
    pub base_name: String,
    /// Marker color family of the scatter matrix
    pub palette: Palette,
}

impl<F: Float> RunConfig<F> {
    /// Checks the run parameters before any sampling happens.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(SamplingError::InvalidDimension {
                factor_count: self.factors.len(),
                sample_count: self.sample_count,
            }
            .into());
        }
        Ok(())
    }
}

/// Runs the full generation pipeline and writes both artifacts.
///
/// Stages: validate the configuration, generate the raw draws, denormalize
/// them into the factor bounds, assemble the sample table, write
/// `<base_name>.csv`, render `<base_name>.png`. Nothing is written before
/// generation has succeeded, so a failing run leaves no partial artifact.
pub fn run<F: Float, M: SamplingMethod<F> + ?Sized>(
    config: &RunConfig<F>,
    method: &M,
    out_dir: impl AsRef<Path>,
) -> Result<SampleTable<F>> {
    config.validate()?;
    let factors = &config.factors;

    debug!(
        "generating {} samples over {} factors for '{}'",
        config.sample_count,
        factors.len(),
        config.base_name
    );
    let raw = method.generate_samples(factors.len(), config.sample_count)?;
    let scaled = denormalize(&raw, factors)?;
    let table = SampleTable::assemble(&scaled, factors)?;

    let csv_path = out_dir.as_ref().join(format!("{}.csv", config.base_name));
    save_table(&table, &csv_path)?;
    info!("wrote {}", csv_path.display());

    let png_path = out_dir.as_ref().join(format!("{}.png", config.base_name));
    scatter_matrix(&table, &png_path, config.palette, &config.base_name)?;
    info!("wrote {}", png_path.display());

    Ok(table)
}
