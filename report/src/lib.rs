/*!
Report sink for doegen sample tables.

This crate is the I/O shell around [`doegen_sampling`]: it persists sample
tables as flat CSV files, renders pairwise scatter-matrix diagnostics as PNG
images, and provides the pipeline driver that chains sampling,
denormalization, assembly and reporting for one configured run.

Example:
```no_run
use doegen_report::{run, Palette, RunConfig};
use doegen_sampling::{FactorSet, MonteCarlo};

# fn main() -> doegen_report::Result<()> {
let config = RunConfig {
    factors: FactorSet::from_pairs([
        ("height", (50., 200.)),
        ("width", (0.06, 0.1)),
    ])?,
    sample_count: 200,
    base_name: "monte_carlo".to_string(),
    palette: Palette::Winter,
};
// Writes monte_carlo.csv and monte_carlo.png into the current directory.
let table = run(&config, &MonteCarlo::new(), ".")?;
assert_eq!(table.num_samples(), 200);
# Ok(()) }
```
*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod errors;
mod persist;
mod pipeline;
mod plot;

pub use errors::*;
pub use persist::*;
pub use pipeline::*;
pub use plot::*;
