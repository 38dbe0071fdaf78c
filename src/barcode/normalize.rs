//! Input normalization

/// Distance between a full-width digit (U+FF10..=U+FF19) and its ASCII form
const FULLWIDTH_DIGIT_OFFSET: u32 = 0xFEE0;

/// Normalize raw barcode input.
///
/// Full-width digits become ASCII digits and outer whitespace is trimmed.
/// Internal whitespace, hyphens and letters are left for the extractors.
pub fn normalize(input: &str) -> String {
    input.trim().chars().map(to_ascii_digit).collect()
}

fn to_ascii_digit(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' => char::from_u32(c as u32 - FULLWIDTH_DIGIT_OFFSET).unwrap_or(c),
        _ => c,
    }
}
