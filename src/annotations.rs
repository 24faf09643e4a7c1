//! Markup annotation access.
//!
//! Reads the `/Annots` array of a page and parses each entry into a typed
//! [`MarkupAnnotation`]: subtype, bounding rectangle, quad points, fill
//! color components and literal contents. Only the fields the highlight
//! pipeline consumes are parsed; everything else stays in the document.
//!
//! Per PDF spec (ISO 32000-1:2008, §12.5.6.10) a text markup annotation
//! carries one quad per covered text run, 8 values each:
//! `x1,y1, x2,y2, x3,y3, x4,y4`.

use crate::object::{number_array, resolve, string_value};
use lopdf::{Document, Object, ObjectId};

/// A parsed page annotation.
#[derive(Debug, Clone)]
pub struct MarkupAnnotation {
    /// Annotation subtype name (`Highlight`, `Underline`, `Link`, ...)
    pub subtype: String,

    /// Literal contents of the annotation (`/Contents`), if any
    pub contents: Option<String>,

    /// Bounding rectangle `[x1, y1, x2, y2]` in PDF user space
    pub rect: Option<[f32; 4]>,

    /// Quad points, one 8-value group per covered text run
    pub quad_points: Option<Vec<[f32; 8]>>,

    /// Fill color components (`/C`), meaning depends on component count
    pub color: Option<Vec<f32>>,
}

impl MarkupAnnotation {
    /// Whether this is a highlight text-markup annotation.
    pub fn is_highlight(&self) -> bool {
        self.subtype == "Highlight"
    }

    /// The upper edge of the annotation rectangle in PDF user space.
    pub fn top_edge_y(&self) -> Option<f32> {
        self.rect.map(|r| r[1].max(r[3]))
    }
}

/// List all annotations of a page, in array order.
///
/// Pages without an `/Annots` entry yield an empty list. Entries that are
/// not dictionaries (or reference nothing) are skipped.
pub fn page_annotations(doc: &Document, page_id: ObjectId) -> Vec<MarkupAnnotation> {
    let Ok(page_dict) = doc.get_dictionary(page_id) else {
        return Vec::new();
    };

    let annots = match page_dict.get(b"Annots").map(|obj| resolve(doc, obj)) {
        Ok(Object::Array(arr)) => arr,
        _ => return Vec::new(),
    };

    annots
        .iter()
        .filter_map(|obj| match resolve(doc, obj) {
            Object::Dictionary(dict) => parse_annotation(doc, dict),
            _ => None,
        })
        .collect()
}

/// Parse one annotation dictionary.
///
/// Returns `None` when the dictionary has no `/Subtype`, which is the only
/// entry an annotation cannot do without.
fn parse_annotation(doc: &Document, dict: &lopdf::Dictionary) -> Option<MarkupAnnotation> {
    let subtype = match dict.get(b"Subtype").ok().and_then(|s| s.as_name().ok()) {
        Some(name) => String::from_utf8_lossy(name).to_string(),
        None => return None,
    };

    let contents = dict
        .get(b"Contents")
        .ok()
        .and_then(|c| string_value(resolve(doc, c)));

    let rect = dict
        .get(b"Rect")
        .ok()
        .and_then(|r| number_array(doc, r))
        .and_then(|nums| <[f32; 4]>::try_from(nums.as_slice()).ok());

    let quad_points = dict
        .get(b"QuadPoints")
        .ok()
        .and_then(|q| number_array(doc, q))
        .map(|nums| parse_quad_points(&nums));

    let color = dict.get(b"C").ok().and_then(|c| number_array(doc, c));

    Some(MarkupAnnotation {
        subtype,
        contents,
        rect,
        quad_points,
        color,
    })
}

/// Group a flat QuadPoints array into 8-value quads.
///
/// A trailing partial group (list length not a multiple of 8) is malformed
/// data; complete groups are kept and the remainder is ignored.
fn parse_quad_points(nums: &[f32]) -> Vec<[f32; 8]> {
    nums.chunks_exact(8)
        .map(|chunk| {
            let mut quad = [0.0; 8];
            quad.copy_from_slice(chunk);
            quad
        })
        .collect()
}
