//! Highlight collection.
//!
//! Walks every page and every annotation of a document, keeps the highlight
//! markup annotations whose color classifies into a role, extracts and
//! cleans the text under each one, and records a positioned
//! [`HighlightEntry`] per survivor.
//!
//! Everything per-annotation is fail-soft: a bad color space, degenerate
//! geometry or empty extraction drops that annotation and nothing else.

use crate::annotations::{page_annotations, MarkupAnnotation};
use crate::color::{classify_rgb, resolve_rgb};
use crate::document::QuizDocument;
use crate::error::Result;
use crate::extract::RegionExtractor;
use crate::geometry::quad_bounds;
use crate::quiz::HighlightEntry;

/// Collect every usable highlight of the document, in encounter order
/// (pre-sort).
pub fn collect_highlights(doc: &QuizDocument) -> Result<Vec<HighlightEntry>> {
    let mut entries = Vec::new();

    for (page_index, &page_id) in doc.pages().iter().enumerate() {
        let Some(page_height) = doc.page_height(page_id) else {
            log::debug!("page {}: no usable media box height, skipping", page_index);
            continue;
        };

        let annotations = page_annotations(doc.inner(), page_id);
        if annotations.is_empty() {
            continue;
        }

        // One extraction context per page; content is decoded once. If the
        // content stream itself is broken, highlights on this page degrade
        // to their literal contents fallback.
        let mut extractor = match RegionExtractor::for_page(doc.inner(), page_id, page_height) {
            Ok(extractor) => Some(extractor),
            Err(err) => {
                log::warn!(
                    "page {}: content stream unusable ({}), falling back to annotation contents",
                    page_index,
                    err
                );
                None
            },
        };

        let mut region_counter = 0usize;

        for annotation in annotations.iter().filter(|a| a.is_highlight()) {
            let Some(rgb) = annotation.color.as_deref().and_then(resolve_rgb) else {
                log::debug!("page {}: highlight without resolvable color, dropped", page_index);
                continue;
            };
            let Some(role) = classify_rgb(rgb) else {
                log::debug!("page {}: highlight color unrecognized, dropped", page_index);
                continue;
            };

            let raw = annotation_text(
                annotation,
                extractor.as_mut(),
                &mut region_counter,
                page_height,
            );
            let text = clean_text(&raw);
            if text.is_empty() {
                log::debug!("page {}: highlight covers no text, dropped", page_index);
                continue;
            }

            let top = annotation
                .top_edge_y()
                .map(|y| page_height - y)
                .unwrap_or(0.0);

            entries.push(HighlightEntry {
                role,
                text,
                page_index,
                top,
            });
        }
    }

    log::debug!("collected {} highlight entries", entries.len());
    Ok(entries)
}

/// Text under one highlight annotation.
///
/// Registers one region per quad, extracts once, reads the regions back in
/// submission order (trimmed, empties skipped, joined by newline) and
/// releases them. Annotations without quad geometry, and pages whose content
/// could not be decoded, fall back to the annotation's literal contents.
fn annotation_text(
    annotation: &MarkupAnnotation,
    extractor: Option<&mut RegionExtractor>,
    region_counter: &mut usize,
    page_height: f32,
) -> String {
    let (quads, extractor) = match (&annotation.quad_points, extractor) {
        (Some(quads), Some(extractor)) if !quads.is_empty() => (quads, extractor),
        _ => return annotation.contents.clone().unwrap_or_default(),
    };

    let mut names = Vec::with_capacity(quads.len());
    for quad in quads {
        let name = format!("highlight_{}", *region_counter);
        *region_counter += 1;
        extractor.add_region(name.clone(), quad_bounds(quad, page_height));
        names.push(name);
    }

    extractor.extract_regions();

    let mut text = String::new();
    for name in &names {
        if let Some(value) = extractor.text_for_region(name) {
            let value = value.trim();
            if !value.is_empty() {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(value);
            }
        }
    }

    extractor.release_regions();
    text
}

/// Normalize highlight text into one sentence-like string.
///
/// Carriage returns become newlines, every line is trimmed, empty lines are
/// dropped and the remainder is rejoined with single spaces. A highlight
/// spanning wrapped lines collapses to one string with no embedded newlines.
pub(crate) fn clean_text(raw: &str) -> String {
    raw.replace('\r', "\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_wrapped_lines() {
        let raw = "  What is the\n   capital of  \n\n France?  ";
        assert_eq!(clean_text(raw), "What is the capital of France?");
    }

    #[test]
    fn test_clean_text_normalizes_carriage_returns() {
        assert_eq!(clean_text("one\r\ntwo\rthree"), "one two three");
    }

    #[test]
    fn test_clean_text_empty_inputs() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \r\n \n "), "");
    }

    #[test]
    fn test_clean_text_keeps_inner_spacing() {
        assert_eq!(clean_text("a  b"), "a  b");
    }

    #[test]
    fn test_annotation_text_contents_fallback() {
        let annotation = MarkupAnnotation {
            subtype: "Highlight".to_string(),
            contents: Some("literal".to_string()),
            rect: None,
            quad_points: None,
            color: Some(vec![1.0, 0.0, 1.0]),
        };
        let mut counter = 0;
        let text = annotation_text(&annotation, None, &mut counter, 792.0);
        assert_eq!(text, "literal");
        assert_eq!(counter, 0);
    }

    #[test]
    fn test_annotation_text_no_contents_no_quads() {
        let annotation = MarkupAnnotation {
            subtype: "Highlight".to_string(),
            contents: None,
            rect: None,
            quad_points: None,
            color: None,
        };
        let mut counter = 0;
        assert_eq!(annotation_text(&annotation, None, &mut counter, 792.0), "");
    }
}
