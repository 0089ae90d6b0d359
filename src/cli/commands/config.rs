//! Configuration command
//!
//! Prints the configuration a run would use, after every layer is merged.

use anyhow::Result;

use crate::cli::Output;
use crate::config::BenchConfig;

pub fn execute(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = BenchConfig::load_with_custom_config(config_path)?;

    output.header("Effective configuration");
    output.key_value(
        "Source:",
        config_path.unwrap_or("embedded defaults"),
    );
    output.blank_line();
    output.report(config.to_toml()?.trim_end());
    Ok(())
}
