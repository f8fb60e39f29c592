use crate::error::{FinanceError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative monetary value.
///
/// Wrapper around `rust_decimal::Decimal` so financial calculations cannot be
/// fed negative or non-numeric amounts: the check happens once, at
/// construction, instead of being scattered through callers. `Decimal` is
/// exact, so there is no NaN/infinity case to guard against and no
/// floating-point drift across repeated fee additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            Err(FinanceError::InvalidAmount(format!(
                "monetary amount must be non-negative, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    /// Wraps a value already known to be non-negative, e.g. the result of
    /// capped fee arithmetic on validated inputs.
    pub(crate) fn from_raw(value: Decimal) -> Self {
        debug_assert!(value >= Decimal::ZERO, "raw money went negative: {value}");
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = FinanceError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

// Addition is closed over non-negative amounts; subtraction is deliberately
// not public since it can leave the domain. Fee math that needs it works on
// the inner `Decimal` and re-wraps through `from_raw`.
impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_accepts_zero_and_positive() {
        assert!(Money::new(dec!(0)).is_ok());
        assert!(Money::new(dec!(19.99)).is_ok());
        assert_eq!(Money::new(dec!(5.5)).unwrap().value(), dec!(5.5));
    }

    #[test]
    fn test_money_rejects_negative() {
        assert!(matches!(
            Money::new(dec!(-0.01)),
            Err(FinanceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(dec!(10.25)).unwrap();
        let b = Money::new(dec!(0.75)).unwrap();
        assert_eq!(a + b, Money::new(dec!(11.0)).unwrap());
    }

    #[test]
    fn test_money_deserialization_validates() {
        let ok: Money = serde_json::from_str("\"125.50\"").unwrap();
        assert_eq!(ok.value(), dec!(125.50));

        let bad: std::result::Result<Money, _> = serde_json::from_str("\"-1\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_money_serializes_as_plain_decimal() {
        let m = Money::new(dec!(42.5)).unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"42.5\"");
    }
}
