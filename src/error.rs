//! Error types for the quiz extraction pipeline.
//!
//! Failures split into two classes: unreadable source documents abort the
//! whole parse and surface here; malformed per-annotation data never does
//! (offending annotations are dropped by the collector instead).

/// Result type alias for quiz extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting a quiz from a PDF.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source stream could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source bytes could not be decoded as a PDF document
    #[error("PDF decode error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The document decoded but its structure is unusable
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pdf_error_message() {
        let err = Error::InvalidPdf("missing page tree".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid PDF"));
        assert!(msg.contains("missing page tree"));
    }

    #[test]
    fn test_io_error_message() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let msg = format!("{}", err);
        assert!(msg.contains("IO error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
