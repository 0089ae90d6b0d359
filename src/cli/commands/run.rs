//! Benchmark run command

use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::config::BenchConfig;
use crate::data;
use crate::harness::Harness;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Number of records to generate (overrides the config file)
    #[arg(short = 'n', long, value_name = "N")]
    pub size: Option<usize>,
}

pub fn execute(args: RunArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = BenchConfig::load_with_custom_config(config_path)?.with_size_override(args.size);

    tracing::info!(
        "Dataset size {} with {} processing units available",
        config.dataset.size,
        crate::parallel::available_workers()
    );

    let dataset = data::generate(config.dataset.size);
    Harness::new(output).run(&dataset)?;
    Ok(())
}
