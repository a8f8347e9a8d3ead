//! Operation Value Object
//!
//! The kind of balance movement recorded in a coin history row.

use derive_more::Display;
use serde::Serialize;
use std::str::FromStr;

use super::amount::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// Coins added to the user's own balance
    #[display("ADD")]
    Add,
    /// Coins consumed from the user's own balance
    #[display("USE")]
    Use,
    /// Sender side of a transfer
    #[display("SEND")]
    Send,
    /// Receiver side of a transfer
    #[display("RECEIVE")]
    Receive,
}

impl Operation {
    /// Wire and storage code
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Use => "USE",
            Self::Send => "SEND",
            Self::Receive => "RECEIVE",
        }
    }

    /// Whether this operation lowers the balance
    #[inline]
    pub const fn is_debit(&self) -> bool {
        matches!(self, Self::Use | Self::Send)
    }

    /// Operations a user may request directly (not via a transfer)
    #[inline]
    pub const fn is_self_service(&self) -> bool {
        matches!(self, Self::Add | Self::Use)
    }

    /// Signed history amount: negative for debits
    #[inline]
    pub const fn signed(&self, amount: Amount) -> i64 {
        if self.is_debit() {
            -amount.value()
        } else {
            amount.value()
        }
    }
}

/// Error returned for an unrecognised operation code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation '{0}'")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Case-sensitive, matching the stored codes exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(Self::Add),
            "USE" => Ok(Self::Use),
            "SEND" => Ok(Self::Send),
            "RECEIVE" => Ok(Self::Receive),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_codes() {
        for op in [
            Operation::Add,
            Operation::Use,
            Operation::Send,
            Operation::Receive,
        ] {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
            assert_eq!(op.to_string(), op.as_str());
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("add".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_signed_amount() {
        let amount = Amount::new(30).unwrap();
        assert_eq!(Operation::Add.signed(amount), 30);
        assert_eq!(Operation::Receive.signed(amount), 30);
        assert_eq!(Operation::Use.signed(amount), -30);
        assert_eq!(Operation::Send.signed(amount), -30);
    }

    #[test]
    fn test_self_service() {
        assert!(Operation::Add.is_self_service());
        assert!(Operation::Use.is_self_service());
        assert!(!Operation::Send.is_self_service());
        assert!(!Operation::Receive.is_self_service());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&Operation::Receive).unwrap(),
            r#""RECEIVE""#
        );
    }
}
