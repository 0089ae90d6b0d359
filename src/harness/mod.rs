//! Timing harness
//!
//! Runs each strategy to completion, one after another, against the same
//! dataset. The clock is stopped only after a strategy has returned, which
//! for the parallel strategies means after their join barrier.

use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use crate::cli::Output;
use crate::data::{Record, ResultItem};
use crate::strategy::Strategy;

pub mod parity;

/// Elapsed time and result count for one strategy run
#[derive(Debug, Clone, Copy)]
pub struct TimingSample {
    pub strategy: Strategy,
    pub elapsed: Duration,
    pub count: usize,
}

impl TimingSample {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// How many times faster this run was than `baseline`
    pub fn speedup_over(&self, baseline: &TimingSample) -> f64 {
        let own = self.elapsed.as_secs_f64();
        if own == 0.0 {
            return 0.0;
        }
        baseline.elapsed.as_secs_f64() / own
    }
}

/// A finished strategy run, keeping its results for the parity check
#[derive(Debug)]
pub struct StrategyRun {
    pub sample: TimingSample,
    pub results: Vec<ResultItem>,
}

/// Execute `strategy` over `dataset` and time it
pub fn time_strategy(strategy: Strategy, dataset: &[Record]) -> Result<StrategyRun> {
    tracing::info!("Running {} over {} records", strategy, dataset.len());

    let start = Instant::now();
    let results = strategy.execute(dataset)?;
    let elapsed = start.elapsed();

    tracing::info!(
        "{} finished: {} results in {:.2}ms",
        strategy,
        results.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(StrategyRun {
        sample: TimingSample {
            strategy,
            elapsed,
            count: results.len(),
        },
        results,
    })
}

/// Outcome of a full benchmark pass
#[derive(Debug)]
pub struct BenchmarkReport {
    pub record_count: usize,
    pub runs: Vec<StrategyRun>,
}

impl BenchmarkReport {
    pub fn samples(&self) -> impl Iterator<Item = &TimingSample> {
        self.runs.iter().map(|run| &run.sample)
    }

    /// The sequential run every other strategy is compared against
    pub fn baseline(&self) -> Option<&StrategyRun> {
        self.runs
            .iter()
            .find(|run| run.sample.strategy == Strategy::Sequential)
    }

    /// Compare every strategy's results against the sequential baseline
    pub fn verify_parity(&self) -> Result<()> {
        let Some(baseline) = self.baseline() else {
            return Ok(());
        };

        for run in &self.runs {
            if run.sample.strategy == Strategy::Sequential {
                continue;
            }
            parity::verify(run.sample.strategy, &baseline.results, &run.results).inspect_err(
                |e| tracing::warn!("Parity check failed: {e}"),
            )?;
        }
        Ok(())
    }
}

/// Runs and reports the strategies in a fixed order
pub struct Harness<'a> {
    output: &'a Output,
    strategies: Vec<Strategy>,
}

impl<'a> Harness<'a> {
    pub fn new(output: &'a Output) -> Self {
        Self {
            output,
            strategies: Strategy::ALL.to_vec(),
        }
    }

    /// Run every strategy over `dataset`, printing a report as it goes
    pub fn run(&self, dataset: &[Record]) -> Result<BenchmarkReport> {
        self.output
            .report(&format!("Starting with {} records", dataset.len()));
        self.output.blank_line();

        let mut runs = Vec::with_capacity(self.strategies.len());
        for &strategy in &self.strategies {
            let spinner = self.output.spinner(&format!("Running {strategy}..."));
            let run = time_strategy(strategy, dataset)
                .with_context(|| format!("Strategy {strategy} failed"))?;
            spinner.finish_and_clear();

            self.output.timing(&run.sample);
            runs.push(run);
        }

        let report = BenchmarkReport {
            record_count: dataset.len(),
            runs,
        };

        report.verify_parity()?;
        self.output
            .success("All strategies match the sequential baseline");

        if let Some(baseline) = report.baseline() {
            for sample in report.samples() {
                if sample.strategy != Strategy::Sequential {
                    self.output.speedup(sample, sample.speedup_over(&baseline.sample));
                }
            }
        }

        self.output.blank_line();
        self.output.report("Finished");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_strategy_counts_results() {
        let dataset = vec![Record::new(0, 4), Record::new(1, 7), Record::new(2, 10)];
        let run = time_strategy(Strategy::Sequential, &dataset).unwrap();
        assert_eq!(run.sample.count, 2);
        assert_eq!(run.results.len(), 2);
        // two transforms, each blocking for the fixed delay
        assert!(run.sample.elapsed >= crate::transform::TRANSFORM_DELAY * 2);
    }

    #[test]
    fn test_harness_runs_all_strategies_in_order() {
        let output = Output::new(true);
        let dataset = crate::data::generate(64);
        let report = Harness::new(&output).run(&dataset).unwrap();

        assert_eq!(report.record_count, 64);
        let order: Vec<_> = report.samples().map(|s| s.strategy).collect();
        assert_eq!(order, Strategy::ALL.to_vec());

        let expected = dataset.iter().filter(|r| r.value % 2 == 0).count();
        assert!(report.samples().all(|s| s.count == expected));
    }

    #[test]
    fn test_harness_empty_dataset() {
        let output = Output::new(true);
        let report = Harness::new(&output).run(&[]).unwrap();
        assert!(report.samples().all(|s| s.count == 0));
    }

    #[test]
    fn test_speedup() {
        let baseline = TimingSample {
            strategy: Strategy::Sequential,
            elapsed: Duration::from_millis(400),
            count: 1,
        };
        let fast = TimingSample {
            strategy: Strategy::ParallelQuery,
            elapsed: Duration::from_millis(100),
            count: 1,
        };
        assert!((fast.speedup_over(&baseline) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_verify_parity_detects_mismatch() {
        let report = BenchmarkReport {
            record_count: 1,
            runs: vec![
                StrategyRun {
                    sample: TimingSample {
                        strategy: Strategy::Sequential,
                        elapsed: Duration::ZERO,
                        count: 1,
                    },
                    results: vec![ResultItem::new(0, 16)],
                },
                StrategyRun {
                    sample: TimingSample {
                        strategy: Strategy::ParallelQuery,
                        elapsed: Duration::ZERO,
                        count: 0,
                    },
                    results: vec![],
                },
            ],
        };
        assert!(report.verify_parity().is_err());
    }
}
