use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of stored fractional units per whole unit (4 decimal places)
const SCALE: i64 = 10_000;

const FRACTION_DIGITS: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Currency amount stored as ten-thousandths of a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Builds an amount from a whole number of units, e.g. `Money::from_units(500)` is 500.00
    pub const fn from_units(units: i64) -> Self {
        Self(units * SCALE)
    }

    /// Parses a signed decimal like `"150"`, `"-2.5"`, `"0.75"` or `"10."`.
    ///
    /// Digits past the fourth decimal place are truncated.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let mut parts = unsigned.split('.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if parts.next().is_some() {
            return Err(MoneyError::Parse("Too many decimal points", string.to_string()));
        }

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyError::Parse("No digits", string.to_string()));
        }

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(MoneyError::Parse("Unexpected character", string.to_string()));
        }

        let out_of_range = || MoneyError::Parse("Out of range", string.to_string());

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let fraction: String = fraction.chars().take(FRACTION_DIGITS).collect();
        let fraction: i64 = format!("{:0<width$}", fraction, width = FRACTION_DIGITS)
            .parse()
            .map_err(|_| out_of_range())?;

        let value = whole
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(out_of_range)?;

        Ok(Money(if negative { -value } else { value }))
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        self.0.checked_add(other.0).map(Money).ok_or_else(|| {
            if other.0 > 0 {
                MoneyError::Overflow("add", self, other)
            } else {
                MoneyError::Underflow("add", self, other)
            }
        })
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        self.0.checked_sub(other.0).map(Money).ok_or_else(|| {
            if other.0 < 0 {
                MoneyError::Overflow("sub", self, other)
            } else {
                MoneyError::Underflow("sub", self, other)
            }
        })
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

/// Displays with two decimal places, rounding half away from zero
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let step = (SCALE / 100) as u64;
        let cents = (self.0.unsigned_abs() + step / 2) / step;
        let sign = if self.0 < 0 && cents != 0 { "-" } else { "" };

        return write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100);
    }
}
