use anyhow::Result;
use clap::Parser;

use parbench::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
