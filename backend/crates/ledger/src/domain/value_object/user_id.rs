use crate::error::{LedgerError, LedgerResult};

pub use kernel::id::{CoinHistoryId, UserId};

/// Parse a user id supplied by the client as a digit string
pub fn parse_user_id(field: &'static str, raw: &str) -> LedgerResult<UserId> {
    raw.parse()
        .map_err(|e: kernel::id::ParseIdError| LedgerError::validation(field, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        let user_id = parse_user_id("userid", "12").unwrap();
        assert_eq!(user_id.as_i64(), 12);
    }

    #[test]
    fn test_parse_user_id_reports_field() {
        let err = parse_user_id("sender", "abc").unwrap_err();
        assert!(matches!(err, LedgerError::Validation { field: "sender", .. }));
    }
}
