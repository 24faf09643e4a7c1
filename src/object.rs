//! Helpers over raw `lopdf` objects.
//!
//! Annotation dictionaries routinely mix direct values and indirect
//! references, and numeric entries can be integers or reals. These helpers
//! keep that noise out of the parsing code.

use lopdf::{Document, Object};

/// Maximum reference-chain length followed by [`resolve`].
const MAX_RESOLVE_DEPTH: u32 = 16;

/// Follow indirect references until a direct object is reached.
///
/// Broken references and over-long chains return the last object reached;
/// callers treat whatever comes back as best-effort data.
pub(crate) fn resolve<'a>(doc: &'a Document, mut obj: &'a Object) -> &'a Object {
    let mut depth = 0;
    while let Object::Reference(id) = obj {
        if depth >= MAX_RESOLVE_DEPTH {
            log::warn!("reference chain exceeds {} hops, giving up", MAX_RESOLVE_DEPTH);
            break;
        }
        match doc.get_object(*id) {
            Ok(next) => obj = next,
            Err(_) => break,
        }
        depth += 1;
    }
    obj
}

/// Read a PDF number (integer or real) as f32.
pub(crate) fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(n) => Some(*n as f32),
        Object::Real(f) => Some(*f),
        _ => None,
    }
}

/// Read an array of PDF numbers, skipping non-numeric elements.
///
/// Returns `None` when the object is not an array or holds no numbers.
pub(crate) fn number_array(doc: &Document, obj: &Object) -> Option<Vec<f32>> {
    match resolve(doc, obj) {
        Object::Array(arr) => {
            let nums: Vec<f32> = arr.iter().filter_map(number).collect();
            if nums.is_empty() {
                None
            } else {
                Some(nums)
            }
        },
        _ => None,
    }
}

/// Read a PDF string as UTF-8 (lossy).
pub(crate) fn string_value(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).to_string()),
        _ => None,
    }
}
