use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates are stored in `DATE` columns, no time zone.
pub type Date = chrono::NaiveDate;

/// Parse a raw path segment into a [`DbId`].
///
/// Surrounding whitespace is not trimmed: `" 7"` is rejected just like `"abc"`.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>().map_err(|_| CoreError::InvalidId {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-3").unwrap(), -3);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_matches!(parse_id("abc"), Err(CoreError::InvalidId { raw }) if raw == "abc");
        assert_matches!(parse_id(""), Err(CoreError::InvalidId { .. }));
        assert_matches!(parse_id("1.5"), Err(CoreError::InvalidId { .. }));
        assert_matches!(parse_id(" 7"), Err(CoreError::InvalidId { .. }));
    }

    #[test]
    fn rejects_ids_out_of_range() {
        assert_matches!(
            parse_id("99999999999999999999"),
            Err(CoreError::InvalidId { .. })
        );
    }
}
