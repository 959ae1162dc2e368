//! Arithmetic progressions.

use crate::error::CollectionError;

/// Returns the integers from `start` towards `stop` (exclusive), `step`
/// apart.
///
/// A negative `step` counts down. A `step` pointing away from `stop` gives
/// an empty result.
///
/// # Errors
///
/// Returns [`CollectionError::ZeroStep`] when `step` is zero.
///
/// # Examples
///
/// ```rust
/// use underscore::arrays::range;
///
/// assert_eq!(range(0, 10, 3), Ok(vec![0, 3, 6, 9]));
/// assert_eq!(range(0, -4, -1), Ok(vec![0, -1, -2, -3]));
/// assert_eq!(range(5, 0, 1), Ok(vec![]));
/// ```
pub fn range(start: i64, stop: i64, step: i64) -> Result<Vec<i64>, CollectionError> {
    if step == 0 {
        return Err(CollectionError::zero_step());
    }
    let mut values = Vec::new();
    let mut current = start;
    while (step > 0 && current < stop) || (step < 0 && current > stop) {
        values.push(current);
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(values)
}
