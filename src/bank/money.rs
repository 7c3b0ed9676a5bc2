use crate::Result;

use std::fmt;

use serde::{Serialize, Serializer};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

const SCALE: i64 = 10_000;
const FRACTION_DIGITS: usize = 4;

/// Fixed-point decimal amount with four fractional digits: `Money(12_345)` is `1.2345`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Builds an amount from whole currency units
    pub const fn units(units: i64) -> Self {
        Self(units * SCALE)
    }

    /// Parses a plain decimal string such as `"250"`, `"-3.5"` or `".75"`.
    ///
    /// Digits past the fourth fractional place are truncated.
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = digits.split('.');
        let units = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if parts.next().is_some() {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        if units.is_empty() && fraction.is_empty() {
            Err(MoneyError::Parse("No digits found", string.to_string()))?
        }

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(units) || !all_digits(fraction) {
            Err(MoneyError::Parse("Invalid character", string.to_string()))?
        }

        let units: i64 = if units.is_empty() {
            0
        } else {
            units
                .parse()
                .map_err(|_| MoneyError::Parse("Amount too large", string.to_string()))?
        };

        let fraction: i64 = format!("{:0<width$}", fraction, width = FRACTION_DIGITS)
            [..FRACTION_DIGITS]
            .parse()?;

        let value = units
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Amount too large", string.to_string()))?;

        return Ok(Money(if negative { -value } else { value }));
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds `other` in place. On error `self` is left untouched.
    pub fn add(&mut self, other: &Self) -> Result {
        let sum = self.0.checked_add(other.0).ok_or_else(|| {
            if other.0 > 0 {
                MoneyError::Overflow("add", *self, *other)
            } else {
                MoneyError::Underflow("add", *self, *other)
            }
        })?;

        self.0 = sum;

        return Ok(());
    }

    /// Subtracts `other` in place. On error `self` is left untouched.
    pub fn sub(&mut self, other: &Self) -> Result {
        let difference = self.0.checked_sub(other.0).ok_or_else(|| {
            if other.0 < 0 {
                MoneyError::Overflow("sub", *self, *other)
            } else {
                MoneyError::Underflow("sub", *self, *other)
            }
        })?;

        self.0 = difference;

        return Ok(());
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };

        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;

        let mut fraction = format!("{:0width$}", abs % scale, width = FRACTION_DIGITS);
        while fraction.len() > 2 && fraction.ends_with('0') {
            fraction.pop();
        }

        return write!(f, "{sign}{}.{fraction}", abs / scale);
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
