//! In-place stable sort over [`OrderedSequence`]
//!
//! Only `less` and `swap` are available, so the usual buffer-based merge sort
//! is out. Runs of [`BLOCK`] elements are insertion sorted, then merged
//! pairwise with the SymMerge algorithm (Kim & Kutzner, "Stable Minimum
//! Storage Merging by Symmetric Comparisons"), which merges two adjacent runs
//! by rotation and recursion instead of a scratch buffer.
//!
//! Cost: O(n log n) calls to `less` and O(n log² n) calls to `swap`, O(log n)
//! stack.

use crate::traits::OrderedSequence;

/// Length of the insertion-sorted runs
const BLOCK: usize = 20;

/// Sort `seq` ascending by `less`, keeping equal elements in their original
/// relative order
///
/// ```
/// use percentile::engine::stable_sort;
///
/// let mut values = [5, 1, 4, 1, 3];
/// stable_sort(&mut values[..]);
/// assert_eq!(values, [1, 1, 3, 4, 5]);
/// ```
pub fn stable_sort<S: OrderedSequence + ?Sized>(seq: &mut S) {
    let n = seq.len();

    let mut a = 0;
    let mut b = BLOCK;
    while b <= n {
        insertion_sort(seq, a, b);
        a = b;
        b += BLOCK;
    }
    insertion_sort(seq, a, n);

    let mut block = BLOCK;
    while block < n {
        a = 0;
        b = 2 * block;
        while b <= n {
            sym_merge(seq, a, a + block, b);
            a = b;
            b += 2 * block;
        }
        let m = a + block;
        if m < n {
            sym_merge(seq, a, m, n);
        }
        block *= 2;
    }
}

/// Check whether `seq` is sorted ascending by `less`
///
/// ```
/// use percentile::engine::is_sorted;
///
/// assert!(is_sorted(&[1.0, 2.0, 2.0, 3.5][..]));
/// assert!(!is_sorted(&[2, 1][..]));
/// ```
pub fn is_sorted<S: OrderedSequence + ?Sized>(seq: &S) -> bool {
    (1..seq.len()).all(|i| !seq.less(i, i - 1))
}

/// Insertion sort of `seq[a..b]`
fn insertion_sort<S: OrderedSequence + ?Sized>(seq: &mut S, a: usize, b: usize) {
    for i in a + 1..b {
        let mut j = i;
        while j > a && seq.less(j, j - 1) {
            seq.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Merge the sorted runs `seq[a..m]` and `seq[m..b]` in place
///
/// Requires `a < m < b`.
fn sym_merge<S: OrderedSequence + ?Sized>(seq: &mut S, a: usize, m: usize, b: usize) {
    // Single element on the left: binary search its slot in the right run
    // and bubble it there. Equal elements on the right stay ahead of it.
    if m - a == 1 {
        let mut i = m;
        let mut j = b;
        while i < j {
            let h = i + (j - i) / 2;
            if seq.less(h, a) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in a..i - 1 {
            seq.swap(k, k + 1);
        }
        return;
    }

    // Single element on the right: mirror of the above. It lands after any
    // equal elements of the left run.
    if b - m == 1 {
        let mut i = a;
        let mut j = m;
        while i < j {
            let h = i + (j - i) / 2;
            if !seq.less(m, h) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        let mut k = m;
        while k > i {
            seq.swap(k, k - 1);
            k -= 1;
        }
        return;
    }

    let mid = a + (b - a) / 2;
    let n = mid + m;
    let (mut start, mut r) = if m > mid { (n - b, mid) } else { (a, m) };
    let p = n - 1;

    while start < r {
        let c = start + (r - start) / 2;
        if !seq.less(p - c, c) {
            start = c + 1;
        } else {
            r = c;
        }
    }

    let end = n - start;
    if start < m && m < end {
        rotate(seq, start, m, end);
    }
    if a < start && start < mid {
        sym_merge(seq, a, start, mid);
    }
    if mid < end && end < b {
        sym_merge(seq, mid, end, b);
    }
}

/// Rotate `seq[a..b]` so that `seq[m..b]` comes before `seq[a..m]`
///
/// Uses successive block swaps (Gries & Mills), O(b - a) swaps in total.
fn rotate<S: OrderedSequence + ?Sized>(seq: &mut S, a: usize, m: usize, b: usize) {
    let mut i = m - a;
    let mut j = b - m;

    while i != j {
        if i > j {
            swap_range(seq, m - i, m, j);
            i -= j;
        } else {
            swap_range(seq, m - i, m + j - i, i);
            j -= i;
        }
    }
    swap_range(seq, m - i, m, i);
}

/// Swap `seq[a..a + n]` with `seq[b..b + n]`; the ranges must not overlap
fn swap_range<S: OrderedSequence + ?Sized>(seq: &mut S, a: usize, b: usize, n: usize) {
    for i in 0..n {
        seq.swap(a + i, b + i);
    }
}
