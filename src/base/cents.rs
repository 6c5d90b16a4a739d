use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use crate::base;

/// Integral representation of monetary quantities up to two decimal places.
/// Amounts are kept as [`Decimal`]s and only rounded to cents for display.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
)]
pub struct Cents(pub i64);

impl Cents {
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns `cents.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let n = self.abs().0.max(100) as u64;
        let mut len = base::util::count_digits(n);
        len += (len - 3) / 3; // commas
        len += 1; // decimal point
        if self.0 < 0 {
            len += 2; // parentheses
        }
        len
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.abs().0;
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if self.0 < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        f.write_str(s)
    }
}

impl From<Decimal> for Cents {
    /// Rounds half away from zero to the nearest cent.
    fn from(value: Decimal) -> Self {
        let mut d = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        d.rescale(2);
        Self(d.mantissa() as i64)
    }
}
