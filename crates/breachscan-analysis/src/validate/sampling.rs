//! Deterministic validation sampling.
//!
//! Rows are ordered by the xxh3 hash of their id under a caller-chosen
//! seed and the first N taken. Reproducible across runs and machines
//! without an RNG dependency; changing the seed draws a fresh sample.

use tracing::debug;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use breachscan_core::errors::ValidationError;
use breachscan_core::types::BreachRecord;

/// Draw a deterministic sample of `size` records for manual coding.
///
/// Ties on the hash fall back to id order, so the sample is total even
/// in the (unlikely) event of a collision.
pub fn sample_records<'a>(
    records: &'a [BreachRecord],
    size: usize,
    seed: u64,
) -> Result<Vec<&'a BreachRecord>, ValidationError> {
    if size == 0 {
        return Err(ValidationError::ZeroSample);
    }
    if size > records.len() {
        return Err(ValidationError::SampleTooLarge {
            requested: size,
            available: records.len(),
        });
    }

    let mut keyed: Vec<(u64, &BreachRecord)> = records
        .iter()
        .map(|r| (xxh3_64_with_seed(r.id.as_bytes(), seed), r))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));

    debug!(size, seed, available = records.len(), "validation sample drawn");
    Ok(keyed.into_iter().take(size).map(|(_, r)| r).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_records(n: usize) -> Vec<BreachRecord> {
        (0..n)
            .map(|i| BreachRecord {
                id: format!("b{i}"),
                firm: None,
                disclosed: None,
                discovered: None,
                description: None,
                records_affected: None,
            })
            .collect()
    }

    #[test]
    fn same_seed_same_sample() {
        let records = make_records(200);
        let a = sample_records(&records, 25, 42).unwrap();
        let b = sample_records(&records, 25, 42).unwrap();
        let ids_a: Vec<&str> = a.iter().map(|r| r.id.as_str()).collect();
        let ids_b: Vec<&str> = b.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn different_seed_different_order() {
        let records = make_records(200);
        let a = sample_records(&records, 25, 42).unwrap();
        let b = sample_records(&records, 25, 43).unwrap();
        let ids_a: Vec<&str> = a.iter().map(|r| r.id.as_str()).collect();
        let ids_b: Vec<&str> = b.iter().map(|r| r.id.as_str()).collect();
        assert_ne!(ids_a, ids_b);
    }

    #[test]
    fn sample_is_prefix_of_larger_ordering() {
        // Growing the sample keeps the smaller sample as its prefix,
        // so already-coded rows are never wasted.
        let records = make_records(100);
        let small = sample_records(&records, 10, 7).unwrap();
        let large = sample_records(&records, 30, 7).unwrap();
        for (s, l) in small.iter().zip(&large) {
            assert_eq!(s.id, l.id);
        }
    }

    #[test]
    fn zero_sample_rejected() {
        let records = make_records(10);
        assert!(matches!(
            sample_records(&records, 0, 1),
            Err(ValidationError::ZeroSample)
        ));
    }

    #[test]
    fn oversized_sample_rejected() {
        let records = make_records(10);
        let err = sample_records(&records, 11, 1).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::SampleTooLarge { requested: 11, available: 10 }
        ));
    }

    #[test]
    fn full_sample_allowed() {
        let records = make_records(10);
        let sample = sample_records(&records, 10, 1).unwrap();
        assert_eq!(sample.len(), 10);
    }
}
