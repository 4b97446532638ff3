//! Parsing of product identifiers received as text.
//!
//! Identifiers reach the system as URL path segments on the server and as
//! element attributes on the client. Both sides go through
//! [`parse_product_id`] so they agree on what a valid identifier is.

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a base-10 product identifier.
///
/// Surrounding whitespace is ignored. Anything that is not a whole decimal
/// number, or is zero or negative, is rejected with
/// [`CoreError::InvalidIdentifier`] carrying the raw input.
///
/// ```
/// use padaria_core::identifier::parse_product_id;
///
/// assert_eq!(parse_product_id("4").unwrap(), 4);
/// assert!(parse_product_id("abc").is_err());
/// assert!(parse_product_id("0").is_err());
/// ```
pub fn parse_product_id(raw: &str) -> Result<DbId, CoreError> {
    let trimmed = raw.trim();

    // `i64::from_str` would also accept a leading '+'.
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return Err(CoreError::InvalidIdentifier(raw.to_string()));
    }

    match trimmed.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::InvalidIdentifier(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_product_id("1").unwrap(), 1);
        assert_eq!(parse_product_id("999").unwrap(), 999);
        assert_eq!(parse_product_id(" 42 ").unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric() {
        assert_matches!(
            parse_product_id("abc"),
            Err(CoreError::InvalidIdentifier(raw)) if raw == "abc"
        );
        assert!(parse_product_id("12abc").is_err());
        assert!(parse_product_id("1.5").is_err());
        assert!(parse_product_id("+7").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(parse_product_id("").is_err());
        assert!(parse_product_id("   ").is_err());
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(parse_product_id("0").is_err());
        assert!(parse_product_id("-3").is_err());
        assert!(parse_product_id("--3").is_err());
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_product_id("99999999999999999999").is_err());
    }
}
