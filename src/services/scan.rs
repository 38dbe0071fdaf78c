//! Scan service
//!
//! Routes the raw form fields through the extractors and the decoder.

use crate::{
    barcode::{self, ExtractorOptions},
    classification::{self, ClassificationCode, DecodedClassification},
    error::{AppError, AppResult},
    models::{ScanRequest, ScanResult},
};

#[derive(Clone)]
pub struct ScanService {
    options: ExtractorOptions,
}

impl ScanService {
    pub fn new(options: ExtractorOptions) -> Self {
        Self { options }
    }

    /// Extract and decode barcode data from one or two input fields.
    ///
    /// With two fields the ISBN is read from `primary` and the C-code from
    /// `secondary`, each falling back to the other field. With a single field
    /// both values come from it, the C-code also being searched line by line
    /// when a scanner put both barcodes on separate lines. Lines that only
    /// repeat digits of the extracted ISBN are never read as a C-code.
    pub fn scan(&self, request: &ScanRequest) -> AppResult<ScanResult> {
        let primary = field(&request.primary);
        let secondary = field(&request.secondary);

        let (isbn, ccode) = match (primary, secondary) {
            (None, None) => {
                return Err(AppError::Validation("No barcode input given".to_string()));
            }
            (Some(primary), Some(secondary)) => (
                barcode::extract_isbn(primary).or_else(|| barcode::extract_isbn(secondary)),
                self.extract_ccode(secondary)
                    .or_else(|| self.extract_ccode(primary)),
            ),
            (Some(text), None) | (None, Some(text)) => {
                let isbn = barcode::extract_isbn(text);
                let ccode = self.extract_ccode_combined(text, isbn.as_deref());
                (isbn, ccode)
            }
        };

        tracing::debug!("Scan extracted isbn={:?} ccode={:?}", isbn, ccode);

        let decoded = match ccode {
            Some(code) => Some(self.decode(code.as_str())?),
            None => None,
        };

        Ok(ScanResult {
            isbn,
            ccode,
            decoded,
        })
    }

    /// Decode a C-code given as text
    pub fn decode(&self, code: &str) -> AppResult<DecodedClassification> {
        classification::decode(code).ok_or_else(|| AppError::Decode(code.to_string()))
    }

    fn extract_ccode(&self, text: &str) -> Option<ClassificationCode> {
        barcode::extract_ccode_with(text, &self.options)
    }

    fn extract_ccode_combined(&self, text: &str, isbn: Option<&str>) -> Option<ClassificationCode> {
        self.extract_ccode(text).or_else(|| {
            text.lines()
                .filter(|line| !repeats_isbn(line, isbn))
                .find_map(|line| self.extract_ccode(line))
        })
    }
}

/// A form field counts as given when it holds more than whitespace
fn field(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !barcode::normalize(v).is_empty())
}

/// A line whose digits all belong to the ISBN is the ISBN barcode itself
fn repeats_isbn(line: &str, isbn: Option<&str>) -> bool {
    let digits: String = barcode::normalize(line)
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    match isbn {
        Some(isbn) => !digits.is_empty() && isbn.contains(digits.as_str()),
        None => false,
    }
}
