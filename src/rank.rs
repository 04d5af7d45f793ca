//! Percentile ranks and where they land in a sorted sequence

use crate::traits::PercentileError;

/// A percentile rank in `1..=100`
///
/// Construction validates the range, so a `PercentileRank` in hand is always
/// usable with any non-empty sequence.
///
/// ```
/// use percentile::rank::PercentileRank;
///
/// let p90 = PercentileRank::new(90).unwrap();
/// assert_eq!(p90.get(), 90);
/// assert_eq!(p90.to_string(), "p90");
/// assert!(PercentileRank::new(0).is_err());
/// assert!(PercentileRank::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct PercentileRank(u8);

impl PercentileRank {
    /// Lowest accepted rank
    pub const MIN: Self = Self(1);
    /// Highest accepted rank
    pub const MAX: Self = Self(100);
    /// The median
    pub const MEDIAN: Self = Self(50);

    /// Validate a raw rank
    pub fn new(rank: u32) -> Result<Self, PercentileError> {
        if (Self::MIN.0 as u32..=Self::MAX.0 as u32).contains(&rank) {
            Ok(Self(rank as u8))
        } else {
            Err(PercentileError::InvalidRank { rank })
        }
    }

    /// The rank as an integer
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for PercentileRank {
    type Error = PercentileError;

    fn try_from(rank: u32) -> Result<Self, Self::Error> {
        Self::new(rank)
    }
}

impl From<PercentileRank> for u32 {
    fn from(rank: PercentileRank) -> Self {
        rank.0 as u32
    }
}

impl core::fmt::Display for PercentileRank {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Where a rank lands in a sorted sequence
///
/// The exact rank position is `len * rank / 100`. When that is a whole number
/// `i` with an element on both sides, the percentile is the midpoint of the
/// elements at `i - 1` and `i`. Otherwise it is the smallest element whose
/// position covers the rank, i.e. the one at `ceil(i) - 1`.
///
/// A whole-number position equal to `len` (every rank 100, for one) has no
/// element above it and resolves to the last element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// A single element at this 0-based index
    Element(usize),
    /// Midpoint of two adjacent elements
    Midpoint(usize, usize),
}

impl Position {
    /// Locate `rank` in a sorted sequence of `len` elements
    ///
    /// Returns `None` for an empty sequence.
    ///
    /// ```
    /// use percentile::rank::{PercentileRank, Position};
    ///
    /// let p90 = PercentileRank::new(90).unwrap();
    /// assert_eq!(Position::locate(10, p90), Some(Position::Midpoint(8, 9)));
    ///
    /// let p60 = PercentileRank::new(60).unwrap();
    /// assert_eq!(Position::locate(8, p60), Some(Position::Element(4)));
    /// ```
    pub fn locate(len: usize, rank: PercentileRank) -> Option<Self> {
        if len == 0 {
            return None;
        }

        // Widened so len * 100 cannot overflow.
        let scaled = len as u128 * rank.get() as u128;
        let whole = (scaled / 100) as usize;

        let position = if scaled % 100 != 0 {
            // floor(i) == ceil(i) - 1 when i is fractional
            Position::Element(whole)
        } else if whole < len {
            Position::Midpoint(whole - 1, whole)
        } else {
            Position::Element(len - 1)
        };

        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(r: u32) -> PercentileRank {
        PercentileRank::new(r).unwrap()
    }

    #[test]
    fn test_rank_bounds() {
        assert_eq!(PercentileRank::new(1), Ok(PercentileRank::MIN));
        assert_eq!(PercentileRank::new(100), Ok(PercentileRank::MAX));
        assert_eq!(
            PercentileRank::new(0),
            Err(PercentileError::InvalidRank { rank: 0 })
        );
        assert_eq!(
            PercentileRank::new(101),
            Err(PercentileError::InvalidRank { rank: 101 })
        );
        assert_eq!(
            PercentileRank::try_from(u32::MAX),
            Err(PercentileError::InvalidRank { rank: u32::MAX })
        );
    }

    #[test]
    fn test_rank_conversions() {
        assert_eq!(PercentileRank::MEDIAN.get(), 50);
        assert_eq!(u32::from(rank(75)), 75);
        assert_eq!(rank(5).to_string(), "p5");
        assert!(rank(10) < rank(11));
    }

    #[test]
    fn test_locate_empty() {
        assert_eq!(Position::locate(0, rank(50)), None);
    }

    #[test]
    fn test_locate_single_element() {
        for r in 1..=100 {
            assert_eq!(
                Position::locate(1, rank(r)),
                Some(Position::Element(0)),
                "rank {}",
                r
            );
        }
    }

    #[test]
    fn test_locate_median() {
        // odd: 5 * 50 / 100 = 2.5 -> ceil 3 -> index 2
        assert_eq!(Position::locate(5, rank(50)), Some(Position::Element(2)));
        // even: 6 * 50 / 100 = 3 -> midpoint of 2 and 3
        assert_eq!(Position::locate(6, rank(50)), Some(Position::Midpoint(2, 3)));
    }

    #[test]
    fn test_locate_fractional() {
        // 8 * 60 / 100 = 4.8
        assert_eq!(Position::locate(8, rank(60)), Some(Position::Element(4)));
        // 12 * 1 / 100 = 0.12
        assert_eq!(Position::locate(12, rank(1)), Some(Position::Element(0)));
        // 3 * 99 / 100 = 2.97
        assert_eq!(Position::locate(3, rank(99)), Some(Position::Element(2)));
    }

    #[test]
    fn test_locate_boundaries() {
        assert_eq!(Position::locate(10, rank(90)), Some(Position::Midpoint(8, 9)));
        assert_eq!(Position::locate(100, rank(1)), Some(Position::Midpoint(0, 1)));
        assert_eq!(Position::locate(200, rank(99)), Some(Position::Midpoint(197, 198)));
    }

    #[test]
    fn test_locate_rank_100_is_last() {
        for len in [1usize, 2, 3, 10, 12, 1_000] {
            assert_eq!(
                Position::locate(len, PercentileRank::MAX),
                Some(Position::Element(len - 1)),
                "len {}",
                len
            );
        }
    }

    #[test]
    fn test_locate_always_in_bounds() {
        for len in 1..=250usize {
            for r in 1..=100 {
                match Position::locate(len, rank(r)).unwrap() {
                    Position::Element(i) => assert!(i < len),
                    Position::Midpoint(lo, hi) => {
                        assert_eq!(lo + 1, hi);
                        assert!(hi < len);
                    }
                }
            }
        }
    }

    #[test]
    fn test_locate_huge_len() {
        let len = usize::MAX;
        match Position::locate(len, rank(50)).unwrap() {
            Position::Element(i) | Position::Midpoint(_, i) => assert!(i < len),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&rank(95)).unwrap();
        assert_eq!(json, "95");
        let back: PercentileRank = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rank(95));
        assert!(serde_json::from_str::<PercentileRank>("0").is_err());
        assert!(serde_json::from_str::<PercentileRank>("101").is_err());
    }
}
