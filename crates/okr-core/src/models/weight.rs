//! Key result weight, a percentage in `[0, 100]`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Relative weight of a key result within its objective.
///
/// Weights of sibling key results are not required to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Weight(u8);

impl Weight {
    /// Upper bound, inclusive.
    pub const MAX: u8 = 100;

    /// Weight given to every newly created key result.
    pub const DEFAULT: Weight = Weight(25);

    /// Returns the weight as a plain percentage.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Weight {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            // Range checked above.
            Ok(Weight(value as u8))
        } else {
            Err(format!("Weight must be between 0 and 100, got {value}"))
        }
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl FromStr for Weight {
    type Err = String;

    /// Parses the leading integer of the input: optional whitespace, an
    /// optional sign, then a run of digits. Trailing text such as `%` or a
    /// fractional part is ignored, so `"50%"` is 50 and `"12.5"` is 12.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.trim_start();
        let (negative, rest) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .map_or(rest, |end| &rest[..end]);
        if digits.is_empty() {
            return Err(format!("Weight does not start with a number: {s}"));
        }
        let value = digits
            .parse::<i64>()
            .map_err(|_| format!("Weight must be between 0 and 100, got {s}"))?;
        Weight::try_from(if negative { -value } else { value })
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
