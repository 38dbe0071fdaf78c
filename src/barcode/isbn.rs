//! ISBN (JAN) candidate extraction
//!
//! Rules are tried in order and the first match wins. A clean 13-digit input
//! must never reach the looser rules, so their order is significant.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::normalize;

const ISBN_LEN: usize = 13;

static EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^97[89][0-9]{10}$").expect("valid exact ISBN pattern"));

static LOOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"97[89][0-9\- ]{10,17}").expect("valid loose ISBN pattern"));

static EMBEDDED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"97[89][0-9]{10}").expect("valid embedded ISBN pattern"));

type Rule = fn(&str) -> Option<String>;

/// Extraction rules, most specific first
const RULES: [(&str, Rule); 3] = [
    ("exact", exact_match),
    ("loose", loose_match),
    ("embedded", embedded_match),
];

/// Extract a 13-digit ISBN candidate (978/979 prefix) from raw input.
///
/// The check digit is not validated.
pub fn extract_isbn(text: &str) -> Option<String> {
    let text = normalize(text);
    RULES.iter().find_map(|(name, rule)| {
        let isbn = rule(&text)?;
        tracing::trace!("ISBN rule '{}' matched: {}", name, isbn);
        Some(isbn)
    })
}

fn exact_match(text: &str) -> Option<String> {
    EXACT.is_match(text).then(|| text.to_string())
}

/// Hyphen or space separated form ("978-4-10-100101-2").
///
/// Separators are dropped and the first 13 digits of the run are kept; a run
/// holding fewer than 13 digits is not a candidate.
fn loose_match(text: &str) -> Option<String> {
    LOOSE.find_iter(text).find_map(|m| {
        let digits: String = m
            .as_str()
            .chars()
            .filter(char::is_ascii_digit)
            .take(ISBN_LEN)
            .collect();
        (digits.len() == ISBN_LEN).then_some(digits)
    })
}

fn embedded_match(text: &str) -> Option<String> {
    EMBEDDED.find(text).map(|m| m.as_str().to_string())
}
