//! C-code (Japanese book classification code) candidate extraction
//!
//! Scanners and people emit the code in many shapes: after the JAN code with
//! or without a separator, with a "C" prefix, with a trailing check digit, or
//! inside the second book barcode ("192" + code + price + check digit).
//! Rules are evaluated in the order below and the first match wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::normalize::normalize;
use crate::classification::ClassificationCode;

/// Extraction behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractorOptions {
    /// Fall back to the last four consecutive digits anywhere in the text.
    /// Older scan formats relied on it, it also accepts a lot of noise.
    pub lenient_fallback: bool,
}

/// A single extraction rule; capture group 1 holds the code
struct Rule {
    name: &'static str,
    pattern: Regex,
}

impl Rule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid C-code pattern"),
        }
    }

    fn apply(&self, text: &str) -> Option<ClassificationCode> {
        let code = self.pattern.captures(text)?.get(1)?;
        tracing::trace!("C-code rule '{}' matched: {}", self.name, code.as_str());
        ClassificationCode::parse(code.as_str())
    }
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // 9784101001012-0091
        Rule::new("jan_separated", r"^[0-9]{13}[- ]([0-9]{4})$"),
        // 9784101001012C0091
        Rule::new("jan_prefixed", r"^[0-9]{13}C*([0-9]{4})$"),
        // 0091
        Rule::new("bare", r"^([0-9]{4})$"),
        // C0091
        Rule::new("prefixed", r"^C*([0-9]{4})$"),
        // 00912
        Rule::new("check_digit", r"^([0-9]{4})[0-9]$"),
        // 1920093005804
        Rule::new("second_jan", r"^192([0-9]{4})"),
    ]
});

// Last four digits of the last run of at least four digits
static LENIENT: Lazy<Rule> = Lazy::new(|| {
    Rule::new("last_digits", r"([0-9]{4})(?:[^0-9]+[0-9]{0,3})*[^0-9]*$")
});

/// Extract a C-code candidate with the default options.
pub fn extract_ccode(text: &str) -> Option<ClassificationCode> {
    extract_ccode_with(text, &ExtractorOptions::default())
}

/// Extract a C-code candidate from raw input.
pub fn extract_ccode_with(text: &str, options: &ExtractorOptions) -> Option<ClassificationCode> {
    let text = normalize(text);
    let fallback = options.lenient_fallback.then_some(&*LENIENT);

    RULES
        .iter()
        .chain(fallback)
        .find_map(|rule| rule.apply(&text))
}
