//! Phone number normalization and display formatting.
//!
//! Users are keyed by their WhatsApp number in canonical form: digits only,
//! prefixed with the Brazilian country code. Both functions are total —
//! input that does not look like a local number passes through unchanged.

/// Country code prepended to 10- and 11-digit local numbers.
const COUNTRY_CODE: &str = "55";

fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Canonical storage key for a phone number.
///
/// Strips everything that is not a digit; a 10- or 11-digit remainder (a
/// local number with area code, with or without the mobile ninth digit) gets
/// the `55` country code prepended. Anything else is returned as stripped.
pub fn normalize_phone(input: &str) -> String {
    let cleaned = strip_non_digits(input);
    if cleaned.len() == 10 || cleaned.len() == 11 {
        format!("{COUNTRY_CODE}{cleaned}")
    } else {
        cleaned
    }
}

/// Display form of a local phone number: `(DD) DDDDD-DDDD` for 11 digits,
/// `(DD) DDDD-DDDD` for 10. Other lengths return the input unchanged.
pub fn format_phone(input: &str) -> String {
    let cleaned = strip_non_digits(input);
    match cleaned.len() {
        11 => format!("({}) {}-{}", &cleaned[..2], &cleaned[2..7], &cleaned[7..]),
        10 => format!("({}) {}-{}", &cleaned[..2], &cleaned[2..6], &cleaned[6..]),
        _ => input.to_owned(),
    }
}
