use anyhow::{Result, bail};

use crate::data::ResultItem;
use crate::strategy::Strategy;

/// Check that `candidate` produced the same results as the sequential
/// baseline: same multiset of items, and the same sequence when the
/// strategy promises input order.
pub fn verify(strategy: Strategy, baseline: &[ResultItem], candidate: &[ResultItem]) -> Result<()> {
    if candidate.len() != baseline.len() {
        bail!(
            "{} produced {} results, expected {}",
            strategy,
            candidate.len(),
            baseline.len()
        );
    }

    if strategy.preserves_order() {
        if let Some(index) = first_mismatch(baseline, candidate) {
            bail!(
                "{} diverges from input order at position {}: {:?} != {:?}",
                strategy,
                index,
                candidate[index],
                baseline[index]
            );
        }
        return Ok(());
    }

    let mut expected = baseline.to_vec();
    let mut actual = candidate.to_vec();
    expected.sort_unstable();
    actual.sort_unstable();
    if let Some(index) = first_mismatch(&expected, &actual) {
        bail!(
            "{} result set differs from baseline: {:?} != {:?}",
            strategy,
            actual[index],
            expected[index]
        );
    }
    Ok(())
}

fn first_mismatch(left: &[ResultItem], right: &[ResultItem]) -> Option<usize> {
    left.iter().zip(right).position(|(l, r)| l != r)
}
