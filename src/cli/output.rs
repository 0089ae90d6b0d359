//! Console output for parbench
//!
//! Report lines go to stdout and are always printed. Decorations (success
//! marks, speed-up figures, spinners) respect quiet mode.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::harness::TimingSample;

/// Output handler for consistent CLI formatting
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a report line, regardless of quiet mode
    pub fn report(&self, message: &str) {
        println!("{message}");
    }

    /// Print the two report lines for a finished strategy
    pub fn timing(&self, sample: &TimingSample) {
        println!(
            "Total ({}): {}",
            style(sample.strategy).cyan(),
            style(sample.count).bold()
        );
        println!(
            "{} took: {} ms",
            sample.strategy,
            style(sample.elapsed_ms()).yellow().bold()
        );
        println!();
    }

    pub fn speedup(&self, sample: &TimingSample, factor: f64) {
        if !self.quiet {
            println!(
                "  {} {} {}",
                style("•").cyan(),
                style(format!("{:<20}", sample.strategy.name())).dim(),
                style(format!("{factor:.1}x vs sequential")).bold()
            );
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn key_value(&self, key: &str, value: &str) {
        println!("  {} {}", style(format!("{key:<20}")).dim(), value);
    }

    pub fn blank_line(&self) {
        println!();
    }

    /// Spinner on stderr while a strategy runs; hidden in quiet mode
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}
