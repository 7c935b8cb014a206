//! Input masks applied by views before an edit reaches the wizard.
//!
//! Masks are a convenience for the person typing. Validation re-checks
//! everything they guard, so a value that bypasses a mask is still caught.

/// Digits required in a contact number.
pub const CONTACT_NUMBER_DIGITS: usize = 10;

/// Number of ASCII digits in `input`, ignoring every other character.
pub fn digit_count(input: &str) -> usize {
    input.chars().filter(char::is_ascii_digit).count()
}

/// Accepts blank input or plain digits. Signs, exponents and decimals are
/// rejected, so the edit should be dropped when this returns `None`.
pub fn mask_member_count(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// Strips non-digits and refuses anything longer than ten digits.
pub fn mask_contact_number(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() <= CONTACT_NUMBER_DIGITS {
        Some(digits)
    } else {
        None
    }
}
