//! Type-safe money representation for Chilean pesos.
//!
//! Prices in the catalog are whole-peso amounts (CLP has no circulating
//! fractional unit), so amounts are plain `i64` pesos rather than decimals.

use serde::{Deserialize, Serialize};

/// An amount of money in Chilean pesos.
///
/// Serializes as a bare integer, matching the stored catalog format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero pesos.
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole pesos.
    #[must_use]
    pub const fn from_pesos(pesos: i64) -> Self {
        Self(pesos)
    }

    /// Get the amount in whole pesos.
    #[must_use]
    pub const fn as_pesos(&self) -> i64 {
        self.0
    }

    /// Saturating addition.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiply by a line quantity, saturating on overflow.
    #[must_use]
    pub const fn saturating_mul_quantity(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }
}

/// Formats as Chilean currency with dot thousands separators, e.g. `$1.490`.
impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        if negative {
            write!(f, "-${grouped}")
        } else {
            write!(f, "${grouped}")
        }
    }
}

impl From<i64> for Money {
    fn from(pesos: i64) -> Self {
        Self(pesos)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}
