//! Text extraction from uploaded bytes

use crate::error::ExtractorError;
use std::path::Path;
use tracing::warn;

/// Supported upload kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// PDF document
    Pdf,

    /// UTF-8 plain text
    Text,
}

impl FileKind {
    /// Determine the file kind from a filename extension (case-insensitive)
    ///
    /// Unsupported extensions are rejected here, before extraction is
    /// attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use blackstone_extractor::FileKind;
    ///
    /// assert_eq!(FileKind::from_filename("lease.PDF").unwrap(), FileKind::Pdf);
    /// assert!(FileKind::from_filename("lease.docx").is_err());
    /// ```
    pub fn from_filename(filename: &str) -> Result<Self, ExtractorError> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("pdf") => Ok(FileKind::Pdf),
            Some("txt") => Ok(FileKind::Text),
            _ => Err(ExtractorError::UnsupportedFileType(filename.to_string())),
        }
    }
}

/// Extract text from raw uploaded bytes
///
/// Extraction failures are soft: a corrupt PDF or a non-UTF-8 text file
/// yields an empty string and a warning log line, and the pipeline continues
/// with empty text. Only the unsupported-extension case (handled by
/// [`FileKind::from_filename`]) is a hard client error.
pub fn extract_text(bytes: &[u8], kind: FileKind) -> String {
    match kind {
        FileKind::Pdf => match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("Error extracting text from PDF: {}", e);
                String::new()
            }
        },
        FileKind::Text => match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(e) => {
                warn!("Error extracting text from TXT: {}", e);
                String::new()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_extension() {
        assert_eq!(FileKind::from_filename("contract.pdf").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_filename("contract.txt").unwrap(), FileKind::Text);
    }

    #[test]
    fn test_file_kind_case_insensitive() {
        assert_eq!(FileKind::from_filename("CONTRACT.PDF").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_filename("notes.Txt").unwrap(), FileKind::Text);
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let err = FileKind::from_filename("contract.docx").unwrap_err();
        assert!(matches!(err, ExtractorError::UnsupportedFileType(_)));

        assert!(FileKind::from_filename("no_extension").is_err());
        assert!(FileKind::from_filename("").is_err());
    }

    #[test]
    fn test_plain_text_extraction() {
        let text = extract_text("This Agreement is made.".as_bytes(), FileKind::Text);
        assert_eq!(text, "This Agreement is made.");
    }

    #[test]
    fn test_invalid_utf8_degrades_to_empty() {
        let text = extract_text(&[0xff, 0xfe, 0x00, 0x80], FileKind::Text);
        assert_eq!(text, "");
    }

    #[test]
    fn test_corrupt_pdf_degrades_to_empty() {
        let text = extract_text(b"not a pdf at all", FileKind::Pdf);
        assert_eq!(text, "");
    }
}
