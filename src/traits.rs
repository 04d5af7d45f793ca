//! Core trait and error type
//!
//! Every sequence the engine can work on implements [`OrderedSequence`].
//! The engine only ever talks to a sequence through these five capabilities,
//! so it knows nothing about how the elements are stored.

/// Error returned by the percentile engine
///
/// Both variants are input validation failures. They are detected before the
/// sequence is touched, so a failed call never reorders anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentileError {
    /// Requested rank falls outside `1..=100`
    InvalidRank {
        rank: u32,
    },
    /// Sequence has no elements
    EmptySequence,
}

impl core::fmt::Display for PercentileError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PercentileError::InvalidRank { rank } => {
                write!(f, "invalid percentile rank {}: expected 1 to 100", rank)
            }
            PercentileError::EmptySequence => write!(f, "sequence is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PercentileError {}

/// An indexable collection the engine can sort in place and read numbers from
///
/// Indices are 0-based and always `< len()` when called by the engine.
/// Implementations may panic on out-of-range indices; the engine does not
/// catch or translate such panics.
///
/// # Example
///
/// A record type ordered by one of its fields:
///
/// ```
/// use percentile::traits::OrderedSequence;
///
/// struct Student {
///     name: &'static str,
///     score: f32,
/// }
///
/// struct Class(Vec<Student>);
///
/// impl OrderedSequence for Class {
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn less(&self, i: usize, j: usize) -> bool {
///         self.0[i].score < self.0[j].score
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.0.swap(i, j);
///     }
///
///     fn value_at(&self, i: usize) -> f64 {
///         self.0[i].score as f64
///     }
/// }
///
/// let mut class = Class(vec![
///     Student { name: "a", score: 65.1 },
///     Student { name: "b", score: 35.2 },
///     Student { name: "c", score: 75.3 },
/// ]);
///
/// let p50 = percentile::percentile(50, &mut class).unwrap();
/// assert!((p50 - 65.1).abs() < 1e-4);
/// assert_eq!(class.0[0].name, "b");
/// ```
pub trait OrderedSequence {
    /// Number of elements
    fn len(&self) -> usize;

    /// Check if the sequence has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strict ordering: `true` if the element at `i` sorts before the one at `j`
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchange the elements at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);

    /// Numeric projection of the element at `i`
    fn value_at(&self, i: usize) -> f64;

    /// Arithmetic mean of the projections at `i` and `j`
    ///
    /// Override when the element type can average more precisely than
    /// two separate `f64` projections (wide integers, for instance).
    fn average_at(&self, i: usize, j: usize) -> f64 {
        (self.value_at(i) + self.value_at(j)) / 2.0
    }
}

impl<S: OrderedSequence + ?Sized> OrderedSequence for &mut S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }

    #[inline]
    fn value_at(&self, i: usize) -> f64 {
        (**self).value_at(i)
    }

    #[inline]
    fn average_at(&self, i: usize, j: usize) -> f64 {
        (**self).average_at(i, j)
    }
}
