//! Common ID Types
//!
//! Type-safe wrappers around the numeric primary keys the database assigns.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
///
/// let id: UserId = "42".parse().unwrap();
/// assert_eq!(id.as_i64(), 42);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

/// ID の文字列表現が不正な場合のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    /// 空文字列
    Empty,
    /// 数字以外の文字を含む
    NotDigits,
    /// 範囲外（0 または i64 を超える値）
    OutOfRange,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIdError::Empty => write!(f, "id is required"),
            ParseIdError::NotDigits => write!(f, "id must contain digits only"),
            ParseIdError::OutOfRange => write!(f, "id is out of range"),
        }
    }
}

impl std::error::Error for ParseIdError {}

impl<T> Id<T> {
    /// Wrap a database-assigned key
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying key
    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

// Manual impls so that marker types need no derives of their own.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = ParseIdError;

    /// Accepts ASCII digits only (no sign, no whitespace)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIdError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIdError::NotDigits);
        }
        match s.parse::<i64>() {
            Ok(value) if value > 0 => Ok(Self::from_i64(value)),
            _ => Err(ParseIdError::OutOfRange),
        }
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> serde::Serialize for Id<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for CoinHistory IDs
    pub struct CoinHistory;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type CoinHistoryId = Id<markers::CoinHistory>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!("".parse::<UserId>(), Err(ParseIdError::Empty));
        assert_eq!("abc".parse::<UserId>(), Err(ParseIdError::NotDigits));
        assert_eq!("-1".parse::<UserId>(), Err(ParseIdError::NotDigits));
        assert_eq!(" 1".parse::<UserId>(), Err(ParseIdError::NotDigits));
        assert_eq!("0".parse::<UserId>(), Err(ParseIdError::OutOfRange));
        assert_eq!(
            "99999999999999999999".parse::<UserId>(),
            Err(ParseIdError::OutOfRange)
        );
    }

    #[test]
    fn test_id_equality_and_serialize() {
        let a = UserId::from_i64(7);
        let b = UserId::from_i64(7);
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), "7");
    }

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::from_i64(1);
        let history_id: CoinHistoryId = Id::from_i64(1);

        // Different types, only comparable through the raw key
        assert_eq!(i64::from(user_id), i64::from(history_id));
    }
}
