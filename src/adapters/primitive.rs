//! [`OrderedSequence`] for slices and vectors of primitive numbers
//!
//! Ordering is numeric `<`. Integer averages are summed in a 128-bit type
//! before halving, so `i64::MAX` and friends average without overflow.
//!
//! Floats compare with `<`, which is not a total order once NaN is involved:
//! NaN never compares less than anything, so it stays wherever the sort
//! leaves it and may land on any rank. Filter NaN out beforehand if that
//! matters.

use crate::traits::OrderedSequence;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

macro_rules! impl_integer_sequence {
    ($wide:ty => $($t:ty),+ $(,)?) => {$(
        impl OrderedSequence for [$t] {
            #[inline]
            fn len(&self) -> usize {
                <[$t]>::len(self)
            }

            #[inline]
            fn less(&self, i: usize, j: usize) -> bool {
                self[i] < self[j]
            }

            #[inline]
            fn swap(&mut self, i: usize, j: usize) {
                <[$t]>::swap(self, i, j)
            }

            #[inline]
            fn value_at(&self, i: usize) -> f64 {
                self[i] as f64
            }

            #[inline]
            fn average_at(&self, i: usize, j: usize) -> f64 {
                (self[i] as $wide + self[j] as $wide) as f64 / 2.0
            }
        }
    )+};
}

macro_rules! impl_float_sequence {
    ($($t:ty),+ $(,)?) => {$(
        impl OrderedSequence for [$t] {
            #[inline]
            fn len(&self) -> usize {
                <[$t]>::len(self)
            }

            #[inline]
            fn less(&self, i: usize, j: usize) -> bool {
                self[i] < self[j]
            }

            #[inline]
            fn swap(&mut self, i: usize, j: usize) {
                <[$t]>::swap(self, i, j)
            }

            #[inline]
            fn value_at(&self, i: usize) -> f64 {
                self[i] as f64
            }

            #[inline]
            fn average_at(&self, i: usize, j: usize) -> f64 {
                (self[i] as f64 + self[j] as f64) / 2.0
            }
        }
    )+};
}

impl_integer_sequence!(i128 => i8, i16, i32, i64, isize);
impl_integer_sequence!(u128 => u8, u16, u32, u64, usize);
impl_float_sequence!(f32, f64);

/// Vectors delegate to their slice
impl<T> OrderedSequence for Vec<T>
where
    [T]: OrderedSequence,
{
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.as_slice().less(i, j)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        OrderedSequence::swap(self.as_mut_slice(), i, j)
    }

    #[inline]
    fn value_at(&self, i: usize) -> f64 {
        self.as_slice().value_at(i)
    }

    #[inline]
    fn average_at(&self, i: usize, j: usize) -> f64 {
        self.as_slice().average_at(i, j)
    }
}
