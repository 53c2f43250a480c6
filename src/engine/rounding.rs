//! Exact cent arithmetic and the round-up policy
//!
//! Allocation formulas divide by 26 and multiply by fractional
//! weeks-per-year factors, so intermediate values are kept as an exact
//! fraction of cents. Only the final step converts back to [`Money`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Money;

/// A non-reduced rational number of cents, `num / den` with `den > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    num: i128,
    den: i128,
}

impl Fraction {
    /// Build a fraction; a zero denominator yields zero
    pub fn new(num: i128, den: i128) -> Self {
        match den {
            0 => Self::zero(),
            d if d < 0 => Self {
                num: num.saturating_neg(),
                den: d.saturating_neg(),
            },
            d => Self { num, den: d },
        }
    }

    pub fn from_money(amount: Money) -> Self {
        Self::new(amount.cents() as i128, 1)
    }

    pub fn zero() -> Self {
        Self { num: 0, den: 1 }
    }

    pub fn numerator(&self) -> i128 {
        self.num
    }

    pub fn denominator(&self) -> i128 {
        self.den
    }

    pub fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// Multiply by `num / den`
    ///
    /// Common factors are cancelled when the plain product would overflow;
    /// a value still too large saturates and one too small becomes zero.
    pub fn mul(self, num: i128, den: i128) -> Self {
        if let (Some(n), Some(d)) = (self.num.checked_mul(num), self.den.checked_mul(den)) {
            return Self::new(n, d);
        }

        let g1 = gcd(self.num, den);
        let g2 = gcd(num, self.den);
        let (a, d) = (self.num / g1, den / g1);
        let (b, c) = (num / g2, self.den / g2);

        match (a.checked_mul(b), c.checked_mul(d)) {
            (Some(n), Some(d)) => Self::new(n, d),
            (None, _) => {
                let negative = (a < 0) != (b < 0);
                let den_negative = (c < 0) != (d < 0);
                let saturated = if negative != den_negative { i128::MIN } else { i128::MAX };
                Self { num: saturated, den: 1 }
            }
            (Some(_), None) => Self::zero(),
        }
    }

    /// Nearest whole cent, halves rounded away from zero
    pub fn round_to_cent(&self) -> Money {
        let magnitude = self.num.unsigned_abs();
        let den = self.den.unsigned_abs();
        let mut cents = magnitude / den;
        if (magnitude % den) * 2 >= den {
            cents += 1;
        }
        Money::from_cents(signed_cents(self.num < 0, cents))
    }

    /// Smallest multiple of `unit` that is not less than this value
    ///
    /// A non-positive unit falls back to [`Fraction::round_to_cent`].
    pub fn ceil_to(&self, unit: Money) -> Money {
        let unit = unit.cents() as i128;
        if unit <= 0 {
            return self.round_to_cent();
        }
        let steps = match self.den.checked_mul(unit) {
            Some(step_den) => ceil_div(self.num, step_den),
            // |num| < den * unit here, so the value lies strictly inside (-unit, unit)
            None if self.num > 0 => 1,
            None => 0,
        };
        let cents = steps
            .checked_mul(unit)
            .unwrap_or(if steps < 0 { i128::MIN } else { i128::MAX });
        Money::from_cents(clamp_to_i64(cents))
    }

    /// Apply a rounding preference to this value
    pub fn round(&self, rounding: Rounding) -> Money {
        if rounding.is_enabled() {
            self.ceil_to(rounding.unit())
        } else {
            self.round_to_cent()
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64 / 100.0
    }
}

/// Ceiling of `a / b` for positive `b`
fn ceil_div(a: i128, b: i128) -> i128 {
    let quotient = a / b;
    if a % b > 0 {
        quotient + 1
    } else {
        quotient
    }
}

fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    i128::try_from(a).unwrap_or(1).max(1)
}

fn signed_cents(negative: bool, magnitude: u128) -> i64 {
    let cents = i64::try_from(magnitude).unwrap_or(i64::MAX);
    if negative {
        -cents
    } else {
        cents
    }
}

fn clamp_to_i64(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Rounding granularity for allocations; zero disables rounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rounding(Money);

impl Rounding {
    pub fn off() -> Self {
        Self(Money::zero())
    }

    pub fn to(unit: Money) -> Self {
        Self(unit)
    }

    pub fn unit(&self) -> Money {
        self.0
    }

    /// Any non-zero granularity enables rounding
    pub fn is_enabled(&self) -> bool {
        !self.0.is_zero()
    }
}

impl From<Money> for Rounding {
    fn from(unit: Money) -> Self {
        Self(unit)
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_enabled() {
            write!(f, "up to {}", self.0)
        } else {
            write!(f, "off")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cent() {
        // 1440.00 / 26 = 55.3846...
        let value = Fraction::new(144_000, 26);
        assert_eq!(value.round_to_cent().cents(), 5538);

        assert_eq!(Fraction::new(1, 2).round_to_cent().cents(), 1);
        assert_eq!(Fraction::new(-1, 2).round_to_cent().cents(), -1);
        assert_eq!(Fraction::new(149, 100).round_to_cent().cents(), 1);
    }

    #[test]
    fn test_ceil_to_unit() {
        // 1200.00 / 26 = 46.15 -> 50.00 with a 10.00 unit
        let value = Fraction::new(120_000, 26);
        assert_eq!(value.ceil_to(Money::from_dollars(10)).cents(), 5000);
        assert_eq!(value.ceil_to(Money::from_dollars(1)).cents(), 4700);
        assert_eq!(value.ceil_to(Money::from_cents(1)).cents(), 4616);
    }

    #[test]
    fn test_exact_multiples_are_not_bumped() {
        let value = Fraction::new(156_000, 26); // exactly 60.00
        assert_eq!(value.ceil_to(Money::from_dollars(1)).cents(), 6000);
        assert_eq!(value.ceil_to(Money::from_dollars(5)).cents(), 6000);
        assert_eq!(value.ceil_to(Money::from_dollars(7)).cents(), 6300);
    }

    #[test]
    fn test_ceiling_property_over_grid() {
        let units = [1, 25, 100, 500, 1000, 2500];
        for unit in units {
            for num in (0..5_000i128).step_by(37) {
                for den in [1i128, 3, 7, 26, 2600] {
                    let raw = Fraction::new(num, den);
                    let rounded = raw.ceil_to(Money::from_cents(unit)).cents() as i128;
                    let unit = unit as i128;

                    assert!(rounded * den >= num, "r >= x for {}/{}", num, den);
                    assert_eq!(rounded % unit, 0);
                    assert!((rounded - unit) * den < num);
                }
            }
        }
    }

    #[test]
    fn test_zero_denominator_is_zero() {
        let value = Fraction::new(500, 0);
        assert_eq!(value, Fraction::zero());
        assert!(value.round_to_cent().is_zero());
    }

    #[test]
    fn test_negative_denominator_normalized() {
        let value = Fraction::new(10, -4);
        assert_eq!(value.numerator(), -10);
        assert_eq!(value.denominator(), 4);
    }

    #[test]
    fn test_mul_cancels_before_overflowing() {
        let value = Fraction::new(i128::MAX / 2, 3).mul(6, i128::MAX / 2);
        assert_eq!(value.round_to_cent().cents(), 2);
    }

    #[test]
    fn test_mul_saturates_instead_of_panicking() {
        let huge = Fraction::new(i128::MAX / 3, 1).mul(7, 1);
        assert_eq!(huge.round_to_cent().cents(), i64::MAX);
        assert_eq!(huge.ceil_to(Money::from_dollars(5)).cents(), i64::MAX);

        let negative = Fraction::new(i128::MIN / 3, 1).mul(7, 1);
        assert_eq!(negative.round_to_cent().cents(), -i64::MAX);
    }

    #[test]
    fn test_ceil_to_at_the_money_limit() {
        let value = Fraction::from_money(Money::from_cents(i64::MAX));
        assert_eq!(value.ceil_to(Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!(value.ceil_to(Money::from_dollars(1)).cents(), i64::MAX);
    }

    #[test]
    fn test_rounding_preference() {
        let value = Fraction::new(144_000, 26);
        assert_eq!(value.round(Rounding::off()).cents(), 5538);
        assert_eq!(value.round(Rounding::to(Money::from_dollars(5))).cents(), 6000);
        assert!(!Rounding::default().is_enabled());
        assert_eq!(Rounding::to(Money::from_dollars(5)).to_string(), "up to $5.00");
    }
}
