//! Coin Balance Value Object
//!
//! Never negative. Arithmetic is checked and returns `None` instead of
//! wrapping or going below zero.

use derive_more::Display;

use super::amount::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct CoinBalance(i64);

impl CoinBalance {
    /// Balance of a freshly registered user
    pub const ZERO: CoinBalance = CoinBalance(0);

    /// Create from a stored value; `None` if negative
    pub const fn new(value: i64) -> Option<Self> {
        if value >= 0 { Some(Self(value)) } else { None }
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Add coins; `None` on overflow
    pub fn credit(&self, amount: Amount) -> Option<Self> {
        self.0.checked_add(amount.value()).map(Self)
    }

    /// Remove coins; `None` if the balance would go negative
    pub fn debit(&self, amount: Amount) -> Option<Self> {
        if self.0 < amount.value() {
            return None;
        }
        Some(Self(self.0 - amount.value()))
    }
}

impl Default for CoinBalance {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(v: i64) -> Amount {
        Amount::new(v).unwrap()
    }

    #[test]
    fn test_credit() {
        let balance = CoinBalance::new(10).unwrap();
        assert_eq!(balance.credit(amount(5)).unwrap().value(), 15);
    }

    #[test]
    fn test_credit_overflow() {
        let balance = CoinBalance::new(i64::MAX).unwrap();
        assert!(balance.credit(amount(1)).is_none());
    }

    #[test]
    fn test_debit_exact_balance() {
        let balance = CoinBalance::new(10).unwrap();
        assert_eq!(balance.debit(amount(10)).unwrap(), CoinBalance::ZERO);
    }

    #[test]
    fn test_debit_insufficient() {
        let balance = CoinBalance::new(10).unwrap();
        assert!(balance.debit(amount(11)).is_none());
    }

    #[test]
    fn test_negative_rejected() {
        assert!(CoinBalance::new(-1).is_none());
        assert_eq!(CoinBalance::default(), CoinBalance::ZERO);
    }
}
