//! Percentile engine
//!
//! Every entry point validates its input, stable-sorts the sequence in place
//! and reads the value at the [`Position`] the rank lands on.
//!
//! # Side effect
//!
//! The sequence is left sorted ascending after a successful call. This is
//! part of the contract: callers that need the original order must copy it
//! first, or use [`percentile_cloned`]. A failed call never reorders the
//! sequence.
//!
//! # Example
//!
//! ```
//! use percentile::engine::{median, percentile};
//!
//! let mut latencies = vec![1, 3, 4, 6, 2, 9, 4, 7, 10, 11];
//!
//! assert_eq!(percentile(90, &mut latencies), Ok(10.5));
//! assert_eq!(latencies, [1, 2, 3, 4, 4, 6, 7, 9, 10, 11]);
//! assert_eq!(median(&mut latencies), Ok(5.0));
//! ```

mod stable;

pub use stable::{is_sorted, stable_sort};

use crate::rank::{PercentileRank, Position};
use crate::traits::{OrderedSequence, PercentileError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Value at percentile `rank` (`1..=100`) of `seq`
///
/// Sorts `seq` in place. Fails with [`PercentileError::InvalidRank`] when the
/// rank is out of range and [`PercentileError::EmptySequence`] when `seq` has
/// no elements, in that order of precedence.
///
/// ```
/// use percentile::engine::percentile;
///
/// let mut values = [1.0, 3.2, 2.1, 4.99, 5.0, 8.0, 5.0, 7.0, 8.97, 4.0, 234.0, 0.0];
/// let p50 = percentile(50, &mut values[..]).unwrap();
/// assert!((p50 - 4.995).abs() < 1e-12);
/// ```
pub fn percentile<S: OrderedSequence + ?Sized>(
    rank: u32,
    seq: &mut S,
) -> Result<f64, PercentileError> {
    let rank = PercentileRank::new(rank)?;
    percentile_at(rank, seq)
}

/// Same as [`percentile`] for an already validated rank
pub fn percentile_at<S: OrderedSequence + ?Sized>(
    rank: PercentileRank,
    seq: &mut S,
) -> Result<f64, PercentileError> {
    let position = Position::locate(seq.len(), rank).ok_or(PercentileError::EmptySequence)?;
    stable_sort(seq);
    Ok(value_at_position(seq, position))
}

/// The 50th percentile of `seq`
///
/// Mean of the two middle elements for even lengths, the middle element for
/// odd ones. Sorts `seq` in place.
pub fn median<S: OrderedSequence + ?Sized>(seq: &mut S) -> Result<f64, PercentileError> {
    percentile_at(PercentileRank::MEDIAN, seq)
}

/// Values at several ranks, sorting only once
///
/// Results come back in the order of `ranks`. All ranks and the sequence are
/// validated before anything is sorted.
///
/// ```
/// use percentile::engine::percentiles;
///
/// let mut values: Vec<u32> = (1..=100).rev().collect();
/// let p = percentiles(&[50, 90, 99, 100], &mut values).unwrap();
/// assert_eq!(p, [50.5, 90.5, 99.5, 100.0]);
/// ```
pub fn percentiles<S: OrderedSequence + ?Sized>(
    ranks: &[u32],
    seq: &mut S,
) -> Result<Vec<f64>, PercentileError> {
    let ranks = ranks
        .iter()
        .map(|&rank| PercentileRank::new(rank))
        .collect::<Result<Vec<_>, _>>()?;

    let len = seq.len();
    if len == 0 {
        return Err(PercentileError::EmptySequence);
    }

    stable_sort(seq);

    Ok(ranks
        .into_iter()
        .filter_map(|rank| Position::locate(len, rank))
        .map(|position| value_at_position(seq, position))
        .collect())
}

/// Like [`percentile`], but computes on a copy and leaves `values` untouched
///
/// ```
/// use percentile::engine::percentile_cloned;
///
/// let values = [30, 10, 20];
/// assert_eq!(percentile_cloned(50, &values), Ok(20.0));
/// assert_eq!(values, [30, 10, 20]);
/// ```
pub fn percentile_cloned<T>(rank: u32, values: &[T]) -> Result<f64, PercentileError>
where
    T: Clone,
    [T]: OrderedSequence,
{
    let rank = PercentileRank::new(rank)?;
    if values.is_empty() {
        return Err(PercentileError::EmptySequence);
    }

    let mut copy = values.to_vec();
    percentile_at(rank, copy.as_mut_slice())
}

#[inline]
fn value_at_position<S: OrderedSequence + ?Sized>(seq: &S, position: Position) -> f64 {
    match position {
        Position::Element(i) => seq.value_at(i),
        Position::Midpoint(lo, hi) => seq.average_at(lo, hi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rank() {
        let mut values = vec![3, 1, 2];
        assert_eq!(
            percentile(0, &mut values),
            Err(PercentileError::InvalidRank { rank: 0 })
        );
        assert_eq!(
            percentile(101, &mut values),
            Err(PercentileError::InvalidRank { rank: 101 })
        );
        // untouched on failure
        assert_eq!(values, [3, 1, 2]);
    }

    #[test]
    fn test_empty_sequence() {
        let mut values: Vec<f64> = Vec::new();
        assert_eq!(percentile(50, &mut values), Err(PercentileError::EmptySequence));
        assert_eq!(median(&mut values), Err(PercentileError::EmptySequence));
    }

    #[test]
    fn test_rank_checked_before_emptiness() {
        let mut values: Vec<i32> = Vec::new();
        assert_eq!(
            percentile(0, &mut values),
            Err(PercentileError::InvalidRank { rank: 0 })
        );
    }

    #[test]
    fn test_p90_ints() {
        let mut values = vec![1, 3, 4, 6, 2, 9, 4, 7, 10, 11];
        assert_eq!(percentile(90, &mut values), Ok(10.5));
        assert_eq!(values, [1, 2, 3, 4, 4, 6, 7, 9, 10, 11]);
    }

    #[test]
    fn test_median_floats() {
        let mut values = vec![1.0, 3.2, 2.1, 4.99, 5.0, 8.0, 5.0, 7.0, 8.97, 4.0, 234.0, 0.0];
        let p50 = median(&mut values).unwrap();
        assert!((p50 - 4.995).abs() < 1e-12, "p50={}", p50);
    }

    #[test]
    fn test_median_odd_and_even() {
        let mut odd = vec![9, 1, 5, 3, 7];
        assert_eq!(median(&mut odd), Ok(5.0));

        let mut even = vec![9, 1, 5, 3, 7, 11];
        assert_eq!(median(&mut even), Ok(6.0));
    }

    #[test]
    fn test_single_element() {
        for rank in [1, 25, 50, 99, 100] {
            let mut values = vec![42u8];
            assert_eq!(percentile(rank, &mut values), Ok(42.0), "rank {}", rank);
        }
    }

    #[test]
    fn test_rank_100_returns_max() {
        let mut values = vec![4, 8, 15, 16, 23, 42];
        assert_eq!(percentile(100, &mut values), Ok(42.0));
    }

    #[test]
    fn test_percentile_at() {
        let mut values = vec![5.5, 1.5];
        assert_eq!(percentile_at(PercentileRank::MIN, &mut values), Ok(1.5));
        assert_eq!(percentile_at(PercentileRank::MAX, &mut values), Ok(5.5));
    }

    #[test]
    fn test_percentiles_order_and_validation() {
        let mut values = vec![1, 3, 4, 6, 2, 9, 4, 7, 10, 11];
        assert_eq!(
            percentiles(&[90, 50, 10], &mut values),
            Ok(vec![10.5, 5.0, 1.5])
        );

        let mut untouched = vec![2, 1];
        assert_eq!(
            percentiles(&[50, 0], &mut untouched),
            Err(PercentileError::InvalidRank { rank: 0 })
        );
        assert_eq!(untouched, [2, 1]);
    }

    #[test]
    fn test_percentiles_no_ranks() {
        let mut values = vec![2, 1];
        assert_eq!(percentiles(&[], &mut values), Ok(Vec::new()));
        assert_eq!(values, [1, 2]);

        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(percentiles(&[], &mut empty), Err(PercentileError::EmptySequence));
    }

    #[test]
    fn test_percentile_cloned() {
        let values = [5u64, 1, 4, 2, 3];
        assert_eq!(percentile_cloned(40, &values), Ok(2.5));
        assert_eq!(values, [5, 1, 4, 2, 3]);

        let empty: [u64; 0] = [];
        assert_eq!(percentile_cloned(40, &empty), Err(PercentileError::EmptySequence));
        assert_eq!(
            percentile_cloned(0, &values),
            Err(PercentileError::InvalidRank { rank: 0 })
        );
    }
}
