//! Dataset generation
//!
//! Records are created once, up front, and then shared read-only by every
//! strategy so that all of them see exactly the same input.

use rand::Rng;

/// Lower bound (inclusive) of a generated record value
pub const MIN_VALUE: u32 = 1;

/// Upper bound (exclusive) of a generated record value
pub const MAX_VALUE: u32 = 1_000_000;

/// One unit of input data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Position of creation, `0..N`
    pub id: usize,
    /// Payload in `[MIN_VALUE, MAX_VALUE)`
    pub value: u32,
}

impl Record {
    pub fn new(id: usize, value: u32) -> Self {
        Self { id, value }
    }
}

/// Output of a strategy for one selected record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultItem {
    pub id: usize,
    pub computed: u64,
}

impl ResultItem {
    pub fn new(id: usize, computed: u64) -> Self {
        Self { id, computed }
    }
}

impl From<(usize, u64)> for ResultItem {
    fn from((id, computed): (usize, u64)) -> Self {
        Self { id, computed }
    }
}

/// Generate `count` records with ids `0..count` and random values
pub fn generate(count: usize) -> Vec<Record> {
    generate_with_rng(count, &mut rand::thread_rng())
}

/// Generate `count` records drawing values from the given generator
pub fn generate_with_rng<R: Rng>(count: usize, rng: &mut R) -> Vec<Record> {
    let mut records = Vec::with_capacity(count);
    for id in 0..count {
        records.push(Record::new(id, rng.gen_range(MIN_VALUE..MAX_VALUE)));
    }
    tracing::debug!("Generated {} records", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_ids_cover_range() {
        for count in [0, 1, 7, 1000] {
            let records = generate(count);
            assert_eq!(records.len(), count);
            for (index, record) in records.iter().enumerate() {
                assert_eq!(record.id, index);
            }
        }
    }

    #[test]
    fn test_generate_values_in_range() {
        let records = generate(5000);
        assert!(
            records
                .iter()
                .all(|r| (MIN_VALUE..MAX_VALUE).contains(&r.value))
        );
    }

    #[test]
    fn test_generate_empty() {
        assert!(generate(0).is_empty());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let first = generate_with_rng(100, &mut StdRng::seed_from_u64(42));
        let second = generate_with_rng(100, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
