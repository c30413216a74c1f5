//! Brazilian phone display mask.

/// Digits kept by the mask: two for the area code plus up to nine.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Strip everything but ASCII digits.
pub fn phone_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reformat raw input into the progressive `(DD) NNNNN-NNNN` mask.
///
/// Landlines (10 digits) render as `(DD) NNNN-NNNN`, mobiles (11 digits) as
/// `(DD) NNNNN-NNNN`. Digits past the eleventh are dropped.
pub fn format_phone(value: &str) -> String {
    let mut digits = phone_digits(value);
    digits.truncate(MAX_PHONE_DIGITS);
    let d = digits.as_str();

    match d.len() {
        0 => String::new(),
        1..=2 => format!("({}", d),
        3..=7 => format!("({}) {}", &d[..2], &d[2..]),
        8..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}
