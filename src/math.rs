//! Overflow-checked decimal arithmetic.
//!
//! `Decimal`'s operators panic when a result leaves the representable
//! range. Calculators route every operation on caller-supplied magnitudes
//! through these helpers so oversized input becomes
//! [`EngineError::Overflow`] instead.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// `a + b`.
pub(crate) fn add(context: &str, a: Decimal, b: Decimal) -> EngineResult<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow(context))
}

/// `a - b`.
pub(crate) fn sub(context: &str, a: Decimal, b: Decimal) -> EngineResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow(context))
}

/// `a × b`.
pub(crate) fn mul(context: &str, a: Decimal, b: Decimal) -> EngineResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(context))
}

/// `a ÷ b`. Callers guard zero divisors themselves; a zero divisor that
/// slips through is reported as an overflow.
pub(crate) fn div(context: &str, a: Decimal, b: Decimal) -> EngineResult<Decimal> {
    a.checked_div(b).ok_or_else(|| overflow(context))
}

/// Sum of `values`.
pub(crate) fn sum<I>(context: &str, values: I) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| add(context, total, value))
}

/// Mean of `values`, or `None` when there are none.
pub(crate) fn mean<I>(context: &str, values: I) -> EngineResult<Option<Decimal>>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut total = Decimal::ZERO;
    let mut count = 0usize;
    for value in values {
        total = add(context, total, value)?;
        count += 1;
    }
    if count == 0 {
        return Ok(None);
    }
    div(context, total, Decimal::from(count)).map(Some)
}

fn overflow(context: &str) -> EngineError {
    EngineError::Overflow {
        context: context.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_arithmetic_matches_operators() {
        let a = Decimal::new(1250, 2);
        let b = Decimal::new(4, 0);
        assert_eq!(add("t", a, b).unwrap(), a + b);
        assert_eq!(sub("t", a, b).unwrap(), a - b);
        assert_eq!(mul("t", a, b).unwrap(), a * b);
        assert_eq!(div("t", a, b).unwrap(), a / b);
    }

    #[test]
    fn test_multiplication_overflow_is_an_error() {
        match mul("weekly cost", Decimal::MAX, Decimal::TEN) {
            Err(EngineError::Overflow { context }) => assert_eq!(context, "weekly cost"),
            other => panic!("Expected Overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_division_by_tiny_value_overflows() {
        let tiny = Decimal::new(1, 19);
        assert!(div("t", Decimal::from(60_000_000_000i64), tiny).is_err());
    }

    #[test]
    fn test_zero_divisor_is_an_error() {
        assert!(div("t", Decimal::ONE, Decimal::ZERO).is_err());
    }

    #[test]
    fn test_sum_overflow_is_an_error() {
        assert!(sum("t", [Decimal::MAX, Decimal::ONE]).is_err());
        assert_eq!(sum("t", Vec::new()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_mean() {
        let values = [Decimal::new(10, 0), Decimal::new(20, 0)];
        assert_eq!(mean("t", values).unwrap(), Some(Decimal::new(15, 0)));
        assert_eq!(mean("t", Vec::new()).unwrap(), None);
    }
}
