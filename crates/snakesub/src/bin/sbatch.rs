//! Slurm submission adapter for snakemake.
//!
//! Wire into the engine with:
//!
//! ```text
//! snakemake -j 99 --immediate-submit --cluster 'snakesub-sbatch {dependencies}'
//! ```
//!
//! Prints the sbatch-assigned job id on stdout; everything else goes to
//! stderr. Exits 2 when the job could not be turned into a submission.

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use snakesub::submit;
use snakesub_cli::Args;
use snakesub_config::ClusterConfig;
use snakesub_core::ClusterBackend;
use snakesub_slurm::Slurm;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let (dependencies, script) = match args.job_inputs() {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let config_path = args.config_path("config_sbatch.json");
    let config: ClusterConfig<_, _> =
        ClusterConfig::load(&config_path, Slurm::GENERAL_SECTION).into_diagnostic()?;

    match submit::run::<Slurm>(&script, dependencies, &config).await {
        Ok(job_id) => {
            // snakemake parses stdout for the id to thread {dependencies}
            println!("{job_id}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}
