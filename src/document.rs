//! Quiz document model.
//!
//! [`QuizDocument`] owns a decoded `lopdf` document and exposes the page
//! access the pipeline needs: ordered page ids and per-page media-box
//! heights. It is also the public entry point: [`QuizDocument::extract_quiz`]
//! runs collection, ordering and assembly in one synchronous pass.

use crate::collector::collect_highlights;
use crate::error::Result;
use crate::object::{number_array, resolve};
use crate::quiz::{assemble, QuizItem};
use lopdf::{Document, ObjectId};
use std::io::Read;
use std::path::Path;

/// Maximum page-tree depth walked for inherited attributes.
const MAX_TREE_DEPTH: u32 = 32;

/// An open PDF document, ready for quiz extraction.
///
/// The decoded document is held for the lifetime of this value and released
/// on drop, on every exit path.
///
/// # Example
///
/// ```no_run
/// let doc = quizmark::QuizDocument::open("marked-up.pdf")?;
/// let items = doc.extract_quiz()?;
/// if items.is_empty() {
///     println!("no questions found");
/// }
/// # Ok::<(), quizmark::Error>(())
/// ```
pub struct QuizDocument {
    doc: Document,
    pages: Vec<ObjectId>,
}

impl QuizDocument {
    /// Open a document from a file path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_document(Document::load(path)?)
    }

    /// Decode a document from in-memory bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_document(Document::load_mem(bytes)?)
    }

    /// Decode a document from a byte stream. The stream is consumed whole;
    /// the pipeline yields no partial results.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_document(Document::load_from(reader)?)
    }

    fn from_document(doc: Document) -> Result<Self> {
        let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        log::debug!("opened document with {} pages", pages.len());
        Ok(Self { doc, pages })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page object ids in document order.
    pub(crate) fn pages(&self) -> &[ObjectId] {
        &self.pages
    }

    /// The underlying decoded document.
    pub(crate) fn inner(&self) -> &Document {
        &self.doc
    }

    /// Media-box height of a page, walking the page tree for inherited
    /// boxes. `None` when no usable box exists; such pages are skipped by
    /// the collector, since vertical offsets cannot be computed without a
    /// height.
    pub(crate) fn page_height(&self, page_id: ObjectId) -> Option<f32> {
        let media_box = self.media_box(page_id)?;
        let height = media_box[3] - media_box[1];
        (height > 0.0).then_some(height)
    }

    fn media_box(&self, page_id: ObjectId) -> Option<[f32; 4]> {
        let mut dict = self.doc.get_dictionary(page_id).ok()?;
        for _ in 0..MAX_TREE_DEPTH {
            if let Ok(obj) = dict.get(b"MediaBox") {
                let nums = number_array(&self.doc, obj)?;
                return <[f32; 4]>::try_from(nums.as_slice()).ok();
            }
            // MediaBox is inheritable from the parent Pages node.
            dict = match dict.get(b"Parent").map(|p| resolve(&self.doc, p)) {
                Ok(lopdf::Object::Dictionary(parent)) => parent,
                Ok(lopdf::Object::Reference(id)) => self.doc.get_dictionary(*id).ok()?,
                _ => return None,
            };
        }
        None
    }

    /// Extract the quiz: collect classified highlights, order them by page
    /// and vertical offset, and fold them into question/answer items.
    ///
    /// Returns an empty list when no valid question/answer pairs exist;
    /// callers should treat that as "nothing found", not as failure.
    pub fn extract_quiz(&self) -> Result<Vec<QuizItem>> {
        let entries = collect_highlights(self)?;
        Ok(assemble(entries))
    }
}

/// Extract a quiz straight from in-memory PDF bytes.
pub fn extract_quiz_from_bytes(bytes: &[u8]) -> Result<Vec<QuizItem>> {
    QuizDocument::from_bytes(bytes)?.extract_quiz()
}

/// Extract a quiz from a PDF file on disk.
pub fn extract_quiz_from_file(path: impl AsRef<Path>) -> Result<Vec<QuizItem>> {
    QuizDocument::open(path)?.extract_quiz()
}

/// Extract a quiz from a byte stream.
pub fn extract_quiz_from_reader<R: Read>(reader: R) -> Result<Vec<QuizItem>> {
    QuizDocument::from_reader(reader)?.extract_quiz()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Object};

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(QuizDocument::from_bytes(b"not a pdf at all").is_err());
    }

    #[test]
    fn test_media_box_inherited_from_parent() {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), 612.0f32.into(), 792.0f32.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let quiz_doc = QuizDocument::from_document(doc).unwrap();
        assert_eq!(quiz_doc.page_count(), 1);
        let page_id = quiz_doc.pages()[0];
        assert_eq!(quiz_doc.page_height(page_id), Some(792.0));
    }

    #[test]
    fn test_page_without_media_box_has_no_height() {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let quiz_doc = QuizDocument::from_document(doc).unwrap();
        let page_id = quiz_doc.pages()[0];
        assert_eq!(quiz_doc.page_height(page_id), None);
    }
}
