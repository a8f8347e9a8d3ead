//! Amount Value Object
//!
//! A strictly positive number of coins moved by one operation.
//! The sign of the movement lives in [`super::operation::Operation`].

use derive_more::Display;

use crate::error::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Amount(i64);

impl Amount {
    /// Create from a raw value; `None` unless strictly positive
    pub const fn new(value: i64) -> Option<Self> {
        if value > 0 { Some(Self(value)) } else { None }
    }

    /// Parse a client-supplied digit string
    ///
    /// Rejects empty input, signs, whitespace, decimals, zero and values
    /// beyond `i64::MAX`.
    pub fn parse(field: &'static str, raw: &str) -> LedgerResult<Self> {
        if raw.is_empty() {
            return Err(LedgerError::validation(field, "is required"));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LedgerError::validation(field, "must contain digits only"));
        }
        let value: i64 = raw
            .parse()
            .map_err(|_| LedgerError::validation(field, "is too large"))?;
        Self::new(value).ok_or_else(|| LedgerError::validation(field, "must be greater than zero"))
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Amount::parse("amount", "150").unwrap().value(), 150);
        assert_eq!(Amount::parse("amount", "007").unwrap().value(), 7);
    }

    #[test]
    fn test_parse_rejects() {
        for raw in ["", "0", "-5", "1.5", " 3", "abc", "99999999999999999999"] {
            assert!(
                matches!(
                    Amount::parse("amount", raw),
                    Err(LedgerError::Validation { field: "amount", .. })
                ),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_requires_positive() {
        assert!(Amount::new(1).is_some());
        assert!(Amount::new(0).is_none());
        assert!(Amount::new(-1).is_none());
    }
}
