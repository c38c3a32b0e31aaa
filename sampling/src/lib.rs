/*!
This library generates synthetic multi-factor datasets for design-of-experiments
and sensitivity-analysis workflows.

A design is declared as an ordered [`FactorSet`], each [`Factor`] carrying a
name and a `[lower, upper]` sampling interval. A [`SamplingMethod`] fills a
`(factor_count, sample_count)` matrix with raw draws, [`denormalize`] rescales
every factor row affinely into its declared interval, and
[`SampleTable::assemble`] turns the result into a sample-major table keyed by
factor name, ready for persistence.

Example:
```
use doegen_sampling::{denormalize, FactorSet, Lhs, LhsKind, SampleTable, SamplingMethod};
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

# fn main() -> doegen_sampling::Result<()> {
// Two factors with their physical intervals.
let factors = FactorSet::from_pairs([
    ("height", (50., 200.)),
    ("width", (0.06, 0.1)),
])?;
// Five samples using centered Latin Hypercube sampling.
let lhs = Lhs::new()
    .with_rng(Xoshiro256Plus::seed_from_u64(42))
    .kind(LhsKind::Centered);
let raw = lhs.generate_samples(factors.len(), 5)?;
// Rescale the unit-interval draws into the factor intervals.
let scaled = denormalize(&raw, &factors)?;
let table = SampleTable::assemble(&scaled, &factors)?;
assert_eq!(table.column_names(), ["height", "width"]);
assert_eq!(table.num_samples(), 5);
# Ok(()) }
```

This library contains four kinds of sampling methods:
* [Monte Carlo sampling](crate::MonteCarlo), independent uniform draws,
* [Latin Hypercube sampling](crate::Lhs), stratified uniform draws,
* [Normal sampling](crate::NormalRandom), draws from a fixed normal distribution,
* [Beta sampling](crate::BetaRandom), draws from a fixed `Beta(5, 2)` distribution.

Monte Carlo and Latin Hypercube draws always lie in `[0., 1.]` and therefore
denormalize inside the declared bounds. Normal and beta draws follow their
native distribution support, and the affine rescaling deliberately carries any
excursion outside the unit interval through to the output.
*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod beta;
mod denormalize;
mod errors;
mod factors;
mod lhs;
mod monte_carlo;
mod normal;
mod table;
mod traits;
mod utils;

pub use beta::*;
pub use denormalize::*;
pub use errors::*;
pub use factors::*;
pub use lhs::*;
pub use monte_carlo::*;
pub use normal::*;
pub use table::*;
pub use traits::*;
