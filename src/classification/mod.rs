//! C-code decoding
//!
//! A C-code is four digits: the sales target, the publication format and a
//! two-digit content category. Each axis is looked up in the static tables
//! of the [`tables`] module.

pub mod tables;

use serde::{Serialize, Serializer};
use std::fmt;
use utoipa::ToSchema;

/// A syntactically valid C-code: exactly four ASCII digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassificationCode([u8; 4]);

impl ClassificationCode {
    /// Parse a code, returning `None` unless the input is exactly four ASCII digits
    pub fn parse(code: &str) -> Option<Self> {
        let bytes: [u8; 4] = code.as_bytes().try_into().ok()?;
        bytes.iter().all(u8::is_ascii_digit).then_some(Self(bytes))
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// First digit (販売対象)
    pub fn target_digit(&self) -> usize {
        usize::from(self.0[0] - b'0')
    }

    /// Second digit (発行形態)
    pub fn format_digit(&self) -> usize {
        usize::from(self.0[1] - b'0')
    }

    /// Last two digits (内容), 0..=99
    pub fn content_code(&self) -> usize {
        usize::from(self.0[2] - b'0') * 10 + usize::from(self.0[3] - b'0')
    }

    /// Decode the three axes. Infallible, every table covers its whole domain.
    pub fn decode(&self) -> DecodedClassification {
        DecodedClassification {
            code: self.to_string(),
            target: tables::target_label(self.target_digit()),
            format: tables::format_label(self.format_digit()),
            content: tables::content_label(self.target_digit(), self.content_code()),
        }
    }
}

impl fmt::Display for ClassificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ClassificationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Human-readable meaning of a C-code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DecodedClassification {
    /// The decoded code
    #[schema(example = "0093")]
    pub code: String,
    /// Sales target (販売対象)
    #[schema(value_type = String, example = "一般")]
    pub target: &'static str,
    /// Publication format (発行形態)
    #[schema(value_type = String, example = "単行本")]
    pub format: &'static str,
    /// Content category (内容)
    #[schema(value_type = String, example = "日本文学、小説・物語")]
    pub content: &'static str,
}

/// Decode a C-code given as text.
///
/// Returns `None` when the input is not exactly four ASCII digits.
pub fn decode(code: &str) -> Option<DecodedClassification> {
    ClassificationCode::parse(code).map(|code| code.decode())
}
