//! Highlight color resolution and role classification.
//!
//! The fill color of a highlight annotation is the sole semantic signal:
//! a magenta/pink highlight marks a question, an orange/red highlight marks
//! an answer. Any other color is unrecognized and the annotation is dropped.
//!
//! The thresholds below are fixed cut points. Existing marked-up documents
//! depend on them, so they are deliberately not configurable.

use serde::{Deserialize, Serialize};

/// Semantic role of a highlight, derived purely from its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Magenta/pink highlight: the text is a question
    Question,
    /// Orange/red highlight: the text is one of the question's answers
    Answer,
}

/// Resolve an annotation's color components to a normalized RGB triple.
///
/// PDF annotation colors (`/C` entry) carry 0, 1, 3 or 4 components in
/// [0, 1], interpreted by count: 1 = DeviceGray, 3 = DeviceRGB,
/// 4 = DeviceCMYK. Any other component count is a resolution failure and
/// yields `None`, never an error; the caller drops the annotation silently.
pub fn resolve_rgb(components: &[f32]) -> Option<[f32; 3]> {
    match components {
        [gray] => Some([*gray, *gray, *gray]),
        [r, g, b] => Some([*r, *g, *b]),
        [c, m, y, k] => Some([
            1.0 - (c + k).min(1.0),
            1.0 - (m + k).min(1.0),
            1.0 - (y + k).min(1.0),
        ]),
        _ => None,
    }
}

/// Classify a normalized RGB triple into a highlight [`Role`].
///
/// Channels are scaled to 8-bit and clamped to [0, 255] before the
/// threshold check:
/// - Question (magenta/pink band): r >= 220, g <= 140, b >= 200
/// - Answer (orange/red band): r >= 220, 60 <= g <= 160, b <= 80
///
/// Everything else is unrecognized (`None`).
pub fn classify_rgb(rgb: [f32; 3]) -> Option<Role> {
    let r = to_byte(rgb[0]);
    let g = to_byte(rgb[1]);
    let b = to_byte(rgb[2]);

    if r >= 220 && g <= 140 && b >= 200 {
        Some(Role::Question)
    } else if r >= 220 && (60..=160).contains(&g) && b <= 80 {
        Some(Role::Answer)
    } else {
        None
    }
}

fn to_byte(channel: f32) -> i32 {
    ((channel * 255.0) as i32).clamp(0, 255)
}
