use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use ising_core::SimulationParameters;
use ising_mcmc::RunManifest;

use crate::render;

const TRACE_FILENAME: &str = "ising.out";
const IMAGE_FILENAME: &str = "ising.png";
const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Lattice side length n.
    #[arg(long, default_value_t = 100)]
    pub size: usize,
    /// Number of flip proposals to evaluate.
    #[arg(long, default_value_t = 500_000)]
    pub steps: usize,
    /// External field H.
    #[arg(long, default_value_t = 0.0)]
    pub field: f64,
    /// Neighbor coupling constant J.
    #[arg(long, default_value_t = -5.0)]
    pub coupling: f64,
    /// Temperature T.
    #[arg(long, default_value_t = 0.1)]
    pub temperature: f64,
    /// Master seed for the deterministic RNG substreams.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Output directory for the image, trace table and manifest.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let params = SimulationParameters::new(
        args.size,
        args.steps,
        args.field,
        args.coupling,
        args.temperature,
    )?;
    let output = ising_mcmc::run(&params, args.seed)?;

    fs::create_dir_all(&args.out)?;
    let image_path = args.out.join(IMAGE_FILENAME);
    render::save_png(&output.lattice, &image_path)?;
    let trace_path = args.out.join(TRACE_FILENAME);
    output.trace.write_table(&trace_path)?;

    let manifest = RunManifest {
        params,
        master_seed: args.seed,
        lattice_hash: output.summary.lattice_hash.clone(),
        trace_length: output.trace.len(),
        final_energy: output.summary.final_energy,
        trace_file: Some(PathBuf::from(TRACE_FILENAME)),
        image_file: Some(PathBuf::from(IMAGE_FILENAME)),
    };
    manifest.write(&args.out.join(MANIFEST_FILENAME))?;

    println!("{}", serde_json::to_string_pretty(&output.summary)?);
    Ok(())
}
