//! Generates the four reference datasets, one per sampling method, into
//! `target/datasets/`.

use doegen_report::{run, Palette, RunConfig};
use doegen_sampling::{BetaRandom, FactorSet, Lhs, MonteCarlo, NormalRandom, SamplingMethod};
use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let out_dir = Path::new("target/datasets");
    create_dir_all(out_dir)?;

    let factors = FactorSet::from_pairs([
        ("height", (50., 200.)),
        ("width", (0.06, 0.1)),
        ("density", (1e15, 9e15)),
        ("temp", (-50., 250.)),
    ])?;
    let sample_count = 200;

    let methods: Vec<(&str, Palette, Box<dyn SamplingMethod<f64>>)> = vec![
        ("monte_carlo", Palette::Winter, Box::new(MonteCarlo::new())),
        ("latin_hypercube", Palette::Autumn, Box::new(Lhs::new())),
        ("normal_random", Palette::Gray, Box::new(NormalRandom::new())),
        ("beta_random", Palette::Summer, Box::new(BetaRandom::new())),
    ];

    for (base_name, palette, method) in &methods {
        let config = RunConfig {
            factors: factors.clone(),
            sample_count,
            base_name: base_name.to_string(),
            palette: *palette,
        };
        let table = run(&config, method.as_ref(), out_dir)?;
        println!(
            "{base_name}: {} samples x {} factors",
            table.num_samples(),
            table.num_factors()
        );
    }
    Ok(())
}
