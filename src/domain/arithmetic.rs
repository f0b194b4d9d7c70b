//! Arithmetic helpers used by the testing walkthrough.
//!
//! `add` and `subtract` are generic over [`num_traits::Num`] and follow the
//! operand type's own overflow rules: fixed-width integers panic on overflow
//! in debug builds and wrap in release. Use [`checked_add`] /
//! [`checked_subtract`] to get an error instead. `divide` is true division
//! and always returns `f64`.

use crate::utils::error::{BootcampError, Result};
use num_traits::{CheckedAdd, CheckedSub, Num, ToPrimitive};
use std::collections::BTreeSet;

/// Adds two numbers.
///
/// ```
/// use woc_bootcamp::domain::arithmetic::add;
///
/// assert_eq!(add(5, 8), 13);
/// assert_eq!(add(19, 3), 22);
/// ```
pub fn add<T: Num>(a: T, b: T) -> T {
    a + b
}

/// ```
/// use woc_bootcamp::domain::arithmetic::subtract;
///
/// assert_eq!(subtract(5, 8), -3);
/// ```
pub fn subtract<T: Num>(a: T, b: T) -> T {
    a - b
}

/// [`add`] for integers, reporting overflow as [`BootcampError::Overflow`].
///
/// ```
/// use woc_bootcamp::domain::arithmetic::checked_add;
///
/// assert_eq!(checked_add(100, 1).unwrap(), 101);
/// assert!(checked_add(i32::MAX, 1).is_err());
/// ```
pub fn checked_add<T: CheckedAdd>(a: T, b: T) -> Result<T> {
    a.checked_add(&b).ok_or_else(|| BootcampError::Overflow {
        operation: "add".to_string(),
    })
}

pub fn checked_subtract<T: CheckedSub>(a: T, b: T) -> Result<T> {
    a.checked_sub(&b).ok_or_else(|| BootcampError::Overflow {
        operation: "subtract".to_string(),
    })
}

/// Divides `a` by `b` as floating point numbers.
///
/// Fails with [`BootcampError::DivisionByZero`] when `b` is zero, for
/// floats as well as integers.
///
/// ```
/// use woc_bootcamp::domain::arithmetic::divide;
///
/// assert_eq!(divide(50, 5).unwrap(), 10.0);
/// assert_eq!(divide(7, 2).unwrap(), 3.5);
/// assert!(divide(1, 0).is_err());
/// ```
pub fn divide<T: ToPrimitive>(a: T, b: T) -> Result<f64> {
    let (a, b) = match (a.to_f64(), b.to_f64()) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return Err(BootcampError::Overflow {
                operation: "divide".to_string(),
            })
        }
    };

    if b == 0.0 {
        tracing::debug!("Refusing to divide by zero");
        return Err(BootcampError::DivisionByZero);
    }
    Ok(a / b)
}

/// ```
/// use woc_bootcamp::domain::arithmetic::example_set;
///
/// assert_eq!(example_set().len(), 4);
/// assert!(example_set().contains("c"));
/// ```
pub fn example_set() -> BTreeSet<&'static str> {
    ["a", "b", "c", "d"].into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_mixed_types() {
        assert_eq!(add(100, 1), 101);
        assert_eq!(add(0.5, 0.25), 0.75);
        assert_eq!(add(-4i64, 4), 0);
    }

    #[test]
    fn test_subtract_goes_negative() {
        assert_eq!(subtract(5, 8), -3);
        assert_eq!(subtract(2.5, 0.5), 2.0);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(divide(3, 0), Err(BootcampError::DivisionByZero)));
        assert!(matches!(divide(3.0, 0.0), Err(BootcampError::DivisionByZero)));
        assert!(matches!(divide(3.0, -0.0), Err(BootcampError::DivisionByZero)));
    }

    #[test]
    fn test_divide_is_true_division() {
        assert_eq!(divide(7, 2).unwrap(), 3.5);
        assert_eq!(divide(7.0, 2.0).unwrap(), 3.5);
        assert_eq!(divide(-1, 4).unwrap(), -0.25);
    }

    #[test]
    fn test_divide_does_not_overflow_at_integer_edges() {
        assert_eq!(divide(i32::MIN, -1).unwrap(), 2147483648.0);
        assert_eq!(divide(i64::MIN, -1).unwrap(), 9223372036854775808.0);
        assert_eq!(divide(u64::MAX, 1).unwrap(), u64::MAX as f64);
    }

    #[test]
    fn test_checked_ops_report_overflow() {
        assert_eq!(checked_add(50, 5).unwrap(), 55);
        assert_eq!(checked_subtract(50, 5).unwrap(), 45);
        assert!(matches!(
            checked_add(i32::MAX, 1),
            Err(BootcampError::Overflow { .. })
        ));
        assert!(matches!(
            checked_subtract(i32::MIN, 1),
            Err(BootcampError::Overflow { .. })
        ));
        assert!(matches!(
            checked_subtract(0u8, 1),
            Err(BootcampError::Overflow { .. })
        ));
    }
}
