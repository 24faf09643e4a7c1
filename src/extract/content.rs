//! Positioned-character extraction from page content streams.
//!
//! Interprets the text operators of a decoded content stream (BT/ET, Tf,
//! Td/TD/Tm/T*/TL, Tj/'/"/TJ) and emits one [`PositionedChar`] per shown
//! character, carrying its baseline origin in PDF user space.
//!
//! Glyph metrics are approximated: without font programs there are no real
//! advance widths, so each character advances by a fixed fraction of the
//! font size. That is accurate enough to decide which highlight rectangle a
//! character falls under, which is all the pipeline asks of it.

use crate::error::Result;
use crate::object::number;
use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

/// Approximate character advance as a fraction of the font size.
const WIDTH_FACTOR: f32 = 0.5;

/// Font size assumed before the first `Tf` operator.
const DEFAULT_FONT_SIZE: f32 = 12.0;

const IDENTITY: [f32; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// One character shown by the page, at its baseline origin.
#[derive(Debug, Clone, Copy)]
pub struct PositionedChar {
    /// The character
    pub ch: char,
    /// Baseline origin x, PDF user space
    pub x: f32,
    /// Baseline origin y, PDF user space (bottom-left origin)
    pub y: f32,
    /// Approximate advance width
    pub width: f32,
}

/// Extract every positioned character of a page, in stream order.
///
/// Fails only when the page content stream cannot be read or decoded; the
/// caller decides whether that is fatal for the page or for the parse.
pub fn page_characters(doc: &Document, page_id: ObjectId) -> Result<Vec<PositionedChar>> {
    let data = doc.get_page_content(page_id)?;
    let content = Content::decode(&data)?;

    let mut chars = Vec::new();
    let mut state = TextState::new();

    for op in &content.operations {
        let operands = &op.operands;
        match op.operator.as_str() {
            "BT" => state.begin_text(),
            "Tf" => {
                if let Some(size) = operands.get(1).and_then(number) {
                    state.font_size = size;
                }
            },
            "TL" => {
                if let Some(leading) = operands.first().and_then(number) {
                    state.leading = leading;
                }
            },
            "Td" => {
                if let (Some(tx), Some(ty)) = (
                    operands.first().and_then(number),
                    operands.get(1).and_then(number),
                ) {
                    state.next_line_offset(tx, ty);
                }
            },
            "TD" => {
                // Like Td, but also sets the leading to -ty.
                if let (Some(tx), Some(ty)) = (
                    operands.first().and_then(number),
                    operands.get(1).and_then(number),
                ) {
                    state.leading = -ty;
                    state.next_line_offset(tx, ty);
                }
            },
            "Tm" => {
                let m: Vec<f32> = operands.iter().filter_map(number).collect();
                if let Ok(matrix) = <[f32; 6]>::try_from(m.as_slice()) {
                    state.set_matrix(matrix);
                }
            },
            "T*" => state.next_line(),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = operands.first() {
                    state.show(bytes, &mut chars);
                }
            },
            "'" => {
                state.next_line();
                if let Some(Object::String(bytes, _)) = operands.first() {
                    state.show(bytes, &mut chars);
                }
            },
            "\"" => {
                // Operands: word spacing, char spacing, string.
                state.next_line();
                if let Some(Object::String(bytes, _)) = operands.get(2) {
                    state.show(bytes, &mut chars);
                }
            },
            "TJ" => {
                if let Some(Object::Array(items)) = operands.first() {
                    for item in items {
                        match item {
                            Object::String(bytes, _) => state.show(bytes, &mut chars),
                            other => {
                                if let Some(adjust) = number(other) {
                                    state.adjust(adjust);
                                }
                            },
                        }
                    }
                }
            },
            _ => {},
        }
    }

    log::trace!("page {:?}: {} positioned characters", page_id, chars.len());
    Ok(chars)
}

/// Text-positioning state of the content stream interpreter.
struct TextState {
    /// Text matrix
    tm: [f32; 6],
    /// Text line matrix (start of the current line)
    lm: [f32; 6],
    font_size: f32,
    leading: f32,
}

impl TextState {
    fn new() -> Self {
        Self {
            tm: IDENTITY,
            lm: IDENTITY,
            font_size: DEFAULT_FONT_SIZE,
            leading: 0.0,
        }
    }

    fn begin_text(&mut self) {
        self.tm = IDENTITY;
        self.lm = IDENTITY;
    }

    fn set_matrix(&mut self, m: [f32; 6]) {
        self.tm = m;
        self.lm = m;
    }

    /// `Td`: move to the start of the next line, offset from the current one.
    fn next_line_offset(&mut self, tx: f32, ty: f32) {
        self.lm = translate(self.lm, tx, ty);
        self.tm = self.lm;
    }

    /// `T*`: move down by the leading.
    fn next_line(&mut self) {
        self.next_line_offset(0.0, -self.leading);
    }

    /// `TJ` numeric element: move the pen by `-n / 1000` text-space units.
    fn adjust(&mut self, n: f32) {
        self.tm = translate(self.tm, -n / 1000.0 * self.font_size, 0.0);
    }

    /// Show a string, emitting one positioned character per char.
    fn show(&mut self, bytes: &[u8], out: &mut Vec<PositionedChar>) {
        let text = String::from_utf8_lossy(bytes);
        let advance = WIDTH_FACTOR * self.font_size;
        for ch in text.chars() {
            // Device-space width scales with the matrix.
            let width = advance * self.tm[0];
            out.push(PositionedChar {
                ch,
                x: self.tm[4],
                y: self.tm[5],
                width,
            });
            self.tm = translate(self.tm, advance, 0.0);
        }
    }
}

/// Pre-concatenate a translation onto an affine matrix.
fn translate(m: [f32; 6], tx: f32, ty: f32) -> [f32; 6] {
    [
        m[0],
        m[1],
        m[2],
        m[3],
        tx * m[0] + ty * m[2] + m[4],
        tx * m[1] + ty * m[3] + m[5],
    ]
}
