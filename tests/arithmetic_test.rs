use woc_bootcamp::domain::arithmetic::{add, checked_add, divide, example_set, subtract};
use woc_bootcamp::BootcampError;

const NUM1: i32 = 50;
const NUM2: i32 = 5;

/// Shared setup value for the fixture-style test below.
fn prep_fancy_data() -> f64 {
    5.0 * 5.0 + 5.0 / 5.0
}

#[test]
fn test_fancy_foo() {
    let fancy_data = prep_fancy_data();
    assert_eq!(fancy_data, 26.0);
}

#[test]
fn test_example_set() {
    let set = example_set();
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
}

/// Grouped checks; run just this group with `cargo test g1`.
mod g1 {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(NUM1, NUM2), 55);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(NUM1, NUM2), 45);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(NUM1, NUM2).unwrap(), 10.0);
    }

    #[test]
    fn test_divide_keeps_fractions() {
        assert_eq!(divide(7, 2).unwrap(), 3.5);
    }

    #[test]
    fn test_divide_min_by_minus_one() {
        assert_eq!(divide(i32::MIN, -1).unwrap(), -(i32::MIN as f64));
    }

    #[test]
    fn test_checked_add_overflow() {
        let err = checked_add(i32::MAX, NUM2).unwrap_err();
        assert!(matches!(err, BootcampError::Overflow { .. }));
    }

    #[test]
    fn test_divide_by_zero() {
        let err = divide(NUM1, 0).unwrap_err();
        assert!(matches!(err, BootcampError::DivisionByZero));
    }
}
