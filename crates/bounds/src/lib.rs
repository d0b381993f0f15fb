//! Binary search primitives for sorted slices.
//!
//! This crate provides the lower/upper bound searches the rest of the
//! workspace builds on. All searches operate on a caller-supplied sub-range
//! `lo..hi` of a sorted slice and use the overflow-safe midpoint
//! `lo + ((hi - lo) >> 1)`.
//!
//! ## Functions
//! - [`lower_bound`] - first index whose element is not less than a target
//! - [`upper_bound`] - first index whose element is greater than a target
//! - [`lower_bound_by`], [`upper_bound_by`] - comparator-taking variants
//! - [`order_of`] - total order derived from `<` alone
//!
//! The ordered domain only needs `PartialOrd`: equality is always derived
//! from the comparator as `!(a < b) && !(b < a)`, so `f64` keys work without
//! an `Ord` bound.
//!
//! # Example
//!
//! ```
//! use window_rank_bounds::{lower_bound, upper_bound};
//!
//! let sorted = [1, 2, 2, 4];
//! assert_eq!(lower_bound(&sorted, 0, 4, &2), 1);
//! assert_eq!(upper_bound(&sorted, 0, 4, &2), 3);
//! assert_eq!(lower_bound(&sorted, 0, 4, &5), 4);
//! ```

use std::cmp::Ordering;

/// Total order of `a` relative to `b`, derived from `<` alone.
///
/// Values that compare neither less nor greater are `Equal`. The caller is
/// responsible for supplying a domain on which `<` is a total order (for
/// `f64` this means no NaN).
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use window_rank_bounds::order_of;
///
/// assert_eq!(order_of(&1.0, &2.0), Ordering::Less);
/// assert_eq!(order_of(&2.0, &2.0), Ordering::Equal);
/// ```
#[inline]
pub fn order_of<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if b < a {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns the first index in `lo..=hi` whose element does not probe
/// [`Ordering::Less`], or `hi` if every element does.
///
/// `probe` reports how an element orders relative to the search target; the
/// slice must be sorted with respect to it. Panics when `lo > hi` or
/// `hi > slice.len()` - a violated precondition is a programming error.
pub fn lower_bound_by<T, F>(slice: &[T], lo: usize, hi: usize, mut probe: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    assert!(
        lo <= hi && hi <= slice.len(),
        "search range {lo}..{hi} out of bounds for slice of length {}",
        slice.len()
    );
    let mut lo = lo;
    let mut hi = hi;
    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if probe(&slice[mid]) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Returns the first index in `lo..=hi` whose element probes
/// [`Ordering::Greater`], or `hi` if none does.
///
/// Same preconditions as [`lower_bound_by`].
pub fn upper_bound_by<T, F>(slice: &[T], lo: usize, hi: usize, mut probe: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    assert!(
        lo <= hi && hi <= slice.len(),
        "search range {lo}..{hi} out of bounds for slice of length {}",
        slice.len()
    );
    let mut lo = lo;
    let mut hi = hi;
    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if probe(&slice[mid]) == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// First index in `lo..=hi` whose element is not less than `target`
/// (`hi` when all elements are less). On an empty range the result is `lo`.
///
/// # Example
///
/// ```
/// use window_rank_bounds::lower_bound;
///
/// let sorted = [10, 20, 20, 30];
/// assert_eq!(lower_bound(&sorted, 0, 4, &20), 1);
/// assert_eq!(lower_bound(&sorted, 0, 4, &15), 1);
/// assert_eq!(lower_bound(&sorted, 2, 2, &15), 2);
/// ```
#[inline]
pub fn lower_bound<T: PartialOrd>(sorted: &[T], lo: usize, hi: usize, target: &T) -> usize {
    lower_bound_by(sorted, lo, hi, |element| order_of(element, target))
}

/// First index in `lo..=hi` whose element is greater than `target`
/// (`hi` when none is).
///
/// # Example
///
/// ```
/// use window_rank_bounds::upper_bound;
///
/// let sorted = [10, 20, 20, 30];
/// assert_eq!(upper_bound(&sorted, 0, 4, &20), 3);
/// assert_eq!(upper_bound(&sorted, 0, 4, &30), 4);
/// ```
#[inline]
pub fn upper_bound<T: PartialOrd>(sorted: &[T], lo: usize, hi: usize, target: &T) -> usize {
    upper_bound_by(sorted, lo, hi, |element| order_of(element, target))
}
