use std::cmp::Ordering;

use ordered_float::OrderedFloat;

/// Largest string, in bytes, that string repetition may produce (1 GiB).
pub const MAX_STRING_LEN: usize = 1 << 30;

/// `2^63` as an `f64`: the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Promotes an integer to a float for mixed or `/` arithmetic.
///
/// Integers beyond `2^53` are rounded to the nearest representable float.
///
/// ## Example
/// ```
/// use quip::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Compares an integer with a float without rounding either.
///
/// The float's integral part is compared first, then its fractional part
/// breaks the tie. NaN orders above every integer, as it does for
/// [`OrderedFloat`].
///
/// ## Example
/// ```
/// use std::cmp::Ordering;
///
/// use quip::util::num::compare_i64_f64;
///
/// assert_eq!(compare_i64_f64(2, 2.5), Ordering::Less);
/// assert_eq!(compare_i64_f64(3, 3.0), Ordering::Equal);
/// assert_eq!(compare_i64_f64(9_007_199_254_740_993, 9_007_199_254_740_992.0),
///            Ordering::Greater);
/// assert_eq!(compare_i64_f64(i64::MAX, f64::INFINITY), Ordering::Less);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn compare_i64_f64(int: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return OrderedFloat(0.0).cmp(&OrderedFloat(float));
    }
    if float >= I64_BOUND {
        return Ordering::Less;
    }
    if float < -I64_BOUND {
        return Ordering::Greater;
    }

    // In range, so the integral part converts exactly.
    let whole = float.trunc() as i64;
    int.cmp(&whole).then_with(|| OrderedFloat(0.0).cmp(&OrderedFloat(float.fract())))
}

/// Converts a repetition count to `usize`, treating negative counts as zero.
///
/// ## Example
/// ```
/// use quip::util::num::repeat_count;
///
/// assert_eq!(repeat_count(3), 3);
/// assert_eq!(repeat_count(-2), 0);
/// ```
#[must_use]
pub fn repeat_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

/// Returns the length of a string of `len` bytes repeated `count` times, or
/// `None` if it would exceed [`MAX_STRING_LEN`].
///
/// ## Example
/// ```
/// use quip::util::num::repeated_len;
///
/// assert_eq!(repeated_len(2, 3), Some(6));
/// assert_eq!(repeated_len(2, usize::MAX), None);
/// assert_eq!(repeated_len(0, usize::MAX), Some(0));
/// ```
#[must_use]
pub fn repeated_len(len: usize, count: usize) -> Option<usize> {
    len.checked_mul(count).filter(|total| *total <= MAX_STRING_LEN)
}
