//! Barcode text recognition
//!
//! Turns raw scanner or keyboard input into a canonical digit string and
//! extracts the JAN/ISBN and C-code candidates printed on Japanese books.

pub mod ccode;
pub mod isbn;
pub mod normalize;

pub use ccode::{extract_ccode, extract_ccode_with, ExtractorOptions};
pub use isbn::extract_isbn;
pub use normalize::normalize;
