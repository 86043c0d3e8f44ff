//! Text rules applied to addresses and order notes
//!
//! The carrier expects the building number as a separate field and caps the
//! free-text comment at 100 characters.

use crate::validation::ValidationError;

/// Maximum comment length accepted by the carrier
pub const MAX_COMMENT_LENGTH: usize = 100;

/// Marker appended to truncated comments
pub const ELLIPSIS: &str = "...";

/// Extract the house number from a street line
///
/// The house number is the last whitespace-separated token, so
/// `"Al. Jana Pawła II 15A"` yields `"15A"`.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the street has no tokens at all.
pub fn house_number(street: &str) -> Result<&str, ValidationError> {
    street.split_whitespace().last().ok_or_else(|| {
        ValidationError::new(
            "street",
            "INVALID_FORMAT",
            format!(
                "Street \"{street}\" is invalid. The street format must be something like \"Opolska 45\", where 45 is the house number."
            ),
        )
        .with_expected("\"Opolska 45\"")
        .with_actual(street)
    })
}

/// Resolve the shipment comment from order notes
///
/// Missing notes become an empty comment. Notes of [`MAX_COMMENT_LENGTH`] characters
/// or more are cut so that the result, ellipsis included, is exactly that long.
#[must_use]
pub fn resolve_comment(notes: Option<&str>) -> String {
    let notes = notes.unwrap_or_default();

    if notes.chars().count() < MAX_COMMENT_LENGTH {
        return notes.to_string();
    }

    let keep = MAX_COMMENT_LENGTH - ELLIPSIS.len();
    let mut comment: String = notes.chars().take(keep).collect();
    comment.push_str(ELLIPSIS);
    comment
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_house_number_simple() {
        assert_eq!(house_number("Opolska 45").unwrap(), "45");
    }

    #[test]
    fn test_house_number_multi_word_street() {
        assert_eq!(house_number("Al. Jana Pawła II 15A").unwrap(), "15A");
    }

    #[test]
    fn test_house_number_single_token() {
        assert_eq!(house_number("Rynek").unwrap(), "Rynek");
    }

    #[test]
    fn test_house_number_empty_street() {
        let error = house_number("").unwrap_err();

        assert_eq!(error.field, "street");
        assert!(error.message.contains("Street \"\""));
        assert!(error.message.contains("\"Opolska 45\""));
    }

    #[test]
    fn test_house_number_blank_street() {
        let error = house_number("   ").unwrap_err();
        assert!(error.message.contains("\"   \""));
    }

    #[test]
    fn test_comment_missing() {
        assert_eq!(resolve_comment(None), "");
    }

    #[test]
    fn test_comment_short_unchanged() {
        let notes = "a".repeat(99);
        assert_eq!(resolve_comment(Some(&notes)), notes);
    }

    #[test]
    fn test_comment_exactly_limit_is_truncated() {
        let notes = "b".repeat(100);
        let comment = resolve_comment(Some(&notes));

        assert_eq!(comment.chars().count(), 100);
        assert!(comment.ends_with("..."));
        assert_eq!(&comment[..97], &"b".repeat(97));
    }

    #[test]
    fn test_comment_long_multibyte() {
        let notes = "ż".repeat(250);
        let comment = resolve_comment(Some(&notes));

        assert_eq!(comment.chars().count(), 100);
        assert!(comment.starts_with("żżż"));
        assert!(comment.ends_with("..."));
    }

    proptest! {
        #[test]
        fn prop_house_number_is_last_token(
            tokens in prop::collection::vec("[A-Za-z0-9./-]{1,8}", 1..6)
        ) {
            let street = tokens.join(" ");
            let last = tokens.last().unwrap();
            prop_assert_eq!(house_number(&street).unwrap(), last.as_str());
        }

        #[test]
        fn prop_comment_never_exceeds_limit(notes in ".{0,300}") {
            let comment = resolve_comment(Some(&notes));
            prop_assert!(comment.chars().count() <= MAX_COMMENT_LENGTH);
            if notes.chars().count() < MAX_COMMENT_LENGTH {
                prop_assert_eq!(comment, notes);
            } else {
                prop_assert_eq!(comment.chars().count(), MAX_COMMENT_LENGTH);
            }
        }
    }
}
