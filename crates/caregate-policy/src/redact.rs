//! String-level masking of sensitive scalar values.
//!
//! Independent of field projection: a field that survives projection may
//! still be displayed partially obscured for non-admin roles. The masker
//! knows exactly two shapes, international phone numbers and email
//! addresses; anything else passes through unchanged. It is not a
//! generic PII scrubber.

use caregate_core::Role;

/// The character used to obscure masked positions.
pub const MASK_CHAR: char = '*';

/// Maximum number of country-code digits kept visible on a phone number.
const COUNTRY_CODE_DIGITS: usize = 3;

/// Minimum number of digits that must remain after the country code for
/// a value to be recognized as a phone number.
const MIN_MASKED_DIGITS: usize = 6;

/// Mask a sensitive scalar for a role.
///
/// Admin sees the value unchanged, including values that are already
/// masked. For everyone else, recognized phone numbers keep their `+`
/// and country code, recognized emails keep the first two characters of
/// the local part and the whole domain. Unrecognized input is returned
/// unchanged; there is no error case.
pub fn mask(value: &str, role: Option<Role>) -> String {
    if role == Some(Role::Admin) {
        return value.to_owned();
    }

    if let Some(masked) = mask_phone(value) {
        return masked;
    }
    if let Some(masked) = mask_email(value) {
        return masked;
    }

    value.to_owned()
}

/// Mask an international phone number, if `value` looks like one.
///
/// Recognized shape: a leading `+`, then digits only, long enough to
/// split into a country code (up to [`COUNTRY_CODE_DIGITS`]) and at
/// least [`MIN_MASKED_DIGITS`] remaining digits. Each masked digit is
/// replaced one for one, so the length of the number stays recognizable
/// while the digits are not recoverable.
fn mask_phone(value: &str) -> Option<String> {
    let digits = value.strip_prefix('+')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() < 1 + MIN_MASKED_DIGITS {
        return None;
    }

    let keep = COUNTRY_CODE_DIGITS.min(digits.len() - MIN_MASKED_DIGITS);
    let mut masked = String::with_capacity(value.len());
    masked.push('+');
    masked.push_str(&digits[..keep]);
    masked.extend(std::iter::repeat(MASK_CHAR).take(digits.len() - keep));
    Some(masked)
}

/// Mask an email address, if `value` looks like one.
///
/// Recognized shape: exactly one `@`. The first two characters of the
/// local part stay visible; the rest of the local part is masked; the
/// domain is untouched. Local parts of two characters or fewer are left
/// as they are.
fn mask_email(value: &str) -> Option<String> {
    let (local, domain) = value.split_once('@')?;
    if domain.contains('@') {
        return None;
    }

    let visible: String = local.chars().take(2).collect();
    let hidden = local.chars().count().saturating_sub(2);
    if hidden == 0 {
        return Some(value.to_owned());
    }

    let mut masked = String::with_capacity(value.len());
    masked.push_str(&visible);
    masked.extend(std::iter::repeat(MASK_CHAR).take(hidden));
    masked.push('@');
    masked.push_str(domain);
    Some(masked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_admin_mask_is_identity() {
        for value in ["+15551234567", "johndoe@example.com", "+155********", "plain"] {
            assert_eq!(mask(value, Some(Role::Admin)), value);
        }
    }

    #[test]
    fn test_phone_masking_keeps_country_code() {
        let masked = mask("+15551234567", Some(Role::Doctor));
        assert!(masked.starts_with("+155"));
        // One mask character per hidden digit.
        assert_eq!(masked.len(), "+15551234567".len());
        assert_eq!(masked, "+155********");
    }

    #[test]
    fn test_short_number_is_not_recognized() {
        // Too few digits after the country code to be a phone number.
        assert_eq!(mask("+12345", Some(Role::Patient)), "+12345");
    }

    #[test]
    fn test_email_masking_keeps_prefix_and_domain() {
        let masked = mask("johndoe@example.com", Some(Role::Patient));
        assert_eq!(masked, "jo*****@example.com");
    }

    #[test]
    fn test_short_local_part_unchanged() {
        assert_eq!(mask("jo@example.com", Some(Role::Patient)), "jo@example.com");
        assert_eq!(mask("j@example.com", Some(Role::Doctor)), "j@example.com");
    }

    #[test]
    fn test_double_at_is_not_an_email() {
        assert_eq!(mask("a@b@c", Some(Role::Patient)), "a@b@c");
    }

    #[test]
    fn test_unrecognized_input_is_identity() {
        for value in ["John Doe", "555-1234", "", "+", "+1a234567890"] {
            assert_eq!(mask(value, Some(Role::Doctor)), value);
        }
    }

    #[test]
    fn test_unknown_role_is_masked_like_non_admin() {
        assert_eq!(mask("+15551234567", None), "+155********");
    }

    proptest! {
        #[test]
        fn test_admin_identity_holds_for_any_string(value in ".*") {
            prop_assert_eq!(mask(&value, Some(Role::Admin)), value);
        }

        #[test]
        fn test_mask_preserves_length_for_phones(digits in "[0-9]{7,15}") {
            let value = format!("+{digits}");
            let masked = mask(&value, Some(Role::Doctor));
            prop_assert_eq!(masked.len(), value.len());
            prop_assert!(masked.starts_with('+'));
        }

        #[test]
        fn test_masking_is_idempotent_for_emails(local in "[a-z]{3,12}", domain in "[a-z]{2,8}") {
            let value = format!("{local}@{domain}.com");
            let once = mask(&value, Some(Role::Patient));
            let twice = mask(&once, Some(Role::Patient));
            prop_assert_eq!(once, twice);
        }
    }
}
