//! Rupee amounts for display
//!
//! Calculator results are whole-rupee values. They are stored as `i64` and
//! formatted with Indian digit grouping (`12,34,567`) and the lakh/crore
//! compact notation used on the results chart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Rupees in one lakh
pub const LAKH: i64 = 100_000;

/// Rupees in one crore
pub const CRORE: i64 = 10_000_000;

/// A whole-rupee amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(i64);

impl Rupees {
    /// Create an amount from whole rupees
    ///
    /// # Examples
    /// ```
    /// use fcsons::models::Rupees;
    /// let amount = Rupees::new(5000);
    /// assert_eq!(amount.value(), 5000);
    /// ```
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Round a fractional amount to the nearest rupee
    ///
    /// Halves round toward positive infinity, so `-2.5` becomes `-2` and
    /// `2.5` becomes `3`. Values beyond the `i64` range saturate.
    pub fn round_from(value: f64) -> Self {
        Self((value + 0.5).floor() as i64)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the whole-rupee value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Digits with Indian grouping, e.g. `4,12,432`
    pub fn grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let sign = if self.0 < 0 { "-" } else { "" };

        if digits.len() <= 3 {
            return format!("{}{}", sign, digits);
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();

        format!("{}{},{}", sign, groups.join(","), tail)
    }

    /// Format with a currency symbol, e.g. `₹ 4,12,432`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{} {}", symbol, self.grouped())
    }

    /// Lakh/crore shorthand, e.g. `4.12L` or `1.05Cr`
    pub fn compact(&self) -> String {
        if self.0 >= CRORE {
            format!("{:.2}Cr", self.0 as f64 / CRORE as f64)
        } else {
            format!("{:.2}L", self.0 as f64 / LAKH as f64)
        }
    }

    /// Lakh/crore shorthand with a currency symbol, e.g. `₹ 4.12L`
    pub fn compact_with_symbol(&self, symbol: &str) -> String {
        format!("{} {}", symbol, self.compact())
    }
}

impl Default for Rupees {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹ {}", self.grouped())
    }
}

impl Add for Rupees {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Rupees {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Rupees {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Rupees {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Rupees {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rupees::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_from() {
        assert_eq!(Rupees::round_from(412431.6).value(), 412432);
        assert_eq!(Rupees::round_from(2.5).value(), 3);
        assert_eq!(Rupees::round_from(-2.5).value(), -2);
        assert_eq!(Rupees::round_from(-2.6).value(), -3);
        assert_eq!(Rupees::round_from(0.0).value(), 0);
    }

    #[test]
    fn test_grouped() {
        assert_eq!(Rupees::new(0).grouped(), "0");
        assert_eq!(Rupees::new(999).grouped(), "999");
        assert_eq!(Rupees::new(1000).grouped(), "1,000");
        assert_eq!(Rupees::new(100000).grouped(), "1,00,000");
        assert_eq!(Rupees::new(412432).grouped(), "4,12,432");
        assert_eq!(Rupees::new(10000000).grouped(), "1,00,00,000");
        assert_eq!(Rupees::new(123456789).grouped(), "12,34,56,789");
        assert_eq!(Rupees::new(-76234).grouped(), "-76,234");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rupees::new(300000)), "₹ 3,00,000");
        assert_eq!(Rupees::new(5000).format_with_symbol("Rs."), "Rs. 5,000");
    }

    #[test]
    fn test_compact() {
        assert_eq!(Rupees::new(412432).compact(), "4.12L");
        assert_eq!(Rupees::new(176234).compact_with_symbol("₹"), "₹ 1.76L");
        assert_eq!(Rupees::new(9_999_999).compact(), "100.00L");
        assert_eq!(Rupees::new(10_000_000).compact(), "1.00Cr");
        assert_eq!(Rupees::new(25_500_000).compact(), "2.55Cr");
    }

    #[test]
    fn test_arithmetic() {
        let a = Rupees::new(1000);
        let b = Rupees::new(400);

        assert_eq!((a + b).value(), 1400);
        assert_eq!((a - b).value(), 600);
        assert_eq!((-a).value(), -1000);

        let total: Rupees = vec![a, b, b].into_iter().sum();
        assert_eq!(total.value(), 1800);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Rupees::new(412432)).unwrap();
        assert_eq!(json, "412432");
    }
}
