//! # quizmark
//!
//! Extract quiz content from color-highlighted PDFs.
//!
//! A marked-up document carries highlight annotations whose fill color
//! encodes a semantic role: magenta/pink marks a question, orange/red marks
//! an answer. This crate reads the per-page annotation geometry and color,
//! recovers the exact text under each highlighted region, orders the
//! fragments deterministically (page index, then vertical offset) and folds
//! them into question/answer-set records for a quiz engine.
//!
//! ## Pipeline
//!
//! - **Geometry**: each highlight quad becomes a top-left-origin rectangle
//!   (degenerate quads floored to a minimum extent).
//! - **Classification**: annotation colors resolve to normalized RGB and map
//!   to [`Role::Question`] or [`Role::Answer`]; anything else is dropped.
//! - **Collection**: per-page region-based text extraction, whitespace
//!   cleanup, positioned [`HighlightEntry`] records.
//! - **Assembly**: a stable sort and a two-state fold produce the final
//!   [`QuizItem`] list. By the source material's authoring convention the
//!   first answer after a question is the correct one.
//!
//! The whole parse is one synchronous pass: it returns the full result list
//! or fails atomically, never partially. An empty result means "no questions
//! found" and is distinct from failure.
//!
//! ## Quick Start
//!
//! ```no_run
//! use quizmark::QuizDocument;
//!
//! let doc = QuizDocument::open("marked-up.pdf")?;
//! for item in doc.extract_quiz()? {
//!     println!("{} ({} answers)", item.question, item.answers.len());
//! }
//! # Ok::<(), quizmark::Error>(())
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Object helpers over lopdf
mod object;

// Geometry and classification
pub mod color;
pub mod geometry;

// Annotation access
pub mod annotations;

// Rectangle-addressed text extraction
pub mod extract;

// Document model and pipeline
pub mod collector;
pub mod document;
pub mod quiz;

// Quiz progression (consumes the finished item list)
pub mod session;

// Re-exports
pub use annotations::MarkupAnnotation;
pub use color::Role;
pub use document::{
    extract_quiz_from_bytes, extract_quiz_from_file, extract_quiz_from_reader, QuizDocument,
};
pub use error::{Error, Result};
pub use quiz::{HighlightEntry, QuizItem};
pub use session::QuizSession;

use std::sync::Once;

static INIT: Once = Once::new();

/// One-time library initialization: installs the `env_logger` backend.
///
/// Idempotent and safe to call from multiple threads; if another logger is
/// already installed the call is a no-op.
pub fn init() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_default_env().try_init();
    });
}

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting never panics on NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).unwrap(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f32::NAN), Ordering::Less);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "quizmark");
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
