//! Scoped, per-page named-region text extraction.
//!
//! A [`RegionExtractor`] is acquired once per page, used for every highlight
//! annotation on that page, and dropped at page end. Each annotation
//! registers its quad rectangles as named regions, runs one extraction pass,
//! reads each region back in submission order, and releases the
//! registrations so the next annotation starts clean. The positioned
//! characters of the page are decoded once and survive across releases.

use crate::error::Result;
use crate::extract::content::{page_characters, PositionedChar};
use crate::geometry::Rect;
use lopdf::{Document, ObjectId};

/// Characters whose baselines differ by no more than this are one line.
const LINE_TOLERANCE: f32 = 2.0;

struct Region {
    name: String,
    rect: Rect,
    text: Option<String>,
}

/// Per-page extraction context resolving named rectangles to text.
///
/// Region rectangles use top-left origin; the extractor converts character
/// baselines from PDF user space with the page height given at creation.
pub struct RegionExtractor {
    chars: Vec<PositionedChar>,
    page_height: f32,
    regions: Vec<Region>,
}

impl RegionExtractor {
    /// Decode the page content once and build an extractor for it.
    pub fn for_page(doc: &Document, page_id: ObjectId, page_height: f32) -> Result<Self> {
        let chars = page_characters(doc, page_id)?;
        Ok(Self {
            chars,
            page_height,
            regions: Vec::new(),
        })
    }

    /// Register a named region. Names are the caller's responsibility;
    /// the collector derives them from a per-page counter so they never
    /// collide within a page.
    pub fn add_region(&mut self, name: impl Into<String>, rect: Rect) {
        self.regions.push(Region {
            name: name.into(),
            rect,
            text: None,
        });
    }

    /// Resolve the text of every registered region.
    pub fn extract_regions(&mut self) {
        for region in &mut self.regions {
            region.text = Some(region_text(&self.chars, &region.rect, self.page_height));
        }
    }

    /// Read back a region's text. `None` until [`extract_regions`] runs or
    /// for names that were never registered.
    ///
    /// [`extract_regions`]: Self::extract_regions
    pub fn text_for_region(&self, name: &str) -> Option<&str> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .and_then(|r| r.text.as_deref())
    }

    /// Drop all region registrations, keeping the page's character data.
    pub fn release_regions(&mut self) {
        self.regions.clear();
    }
}

/// Collect the text under one rectangle.
///
/// Characters whose anchor point (horizontal center of the glyph cell,
/// baseline) falls inside the rectangle are kept, ordered top-to-bottom then
/// left-to-right, with distinct baselines joined by newlines.
fn region_text(chars: &[PositionedChar], rect: &Rect, page_height: f32) -> String {
    let mut hits: Vec<(f32, f32, char)> = chars
        .iter()
        .filter_map(|c| {
            let anchor_x = c.x + c.width / 2.0;
            let top_y = page_height - c.y;
            rect.contains(anchor_x, top_y).then_some((top_y, c.x, c.ch))
        })
        .collect();

    hits.sort_by(|a, b| {
        crate::utils::safe_float_cmp(a.0, b.0).then(crate::utils::safe_float_cmp(a.1, b.1))
    });

    let mut text = String::new();
    let mut line_y: Option<f32> = None;
    for (y, _x, ch) in hits {
        match line_y {
            Some(prev) if (y - prev).abs() <= LINE_TOLERANCE => {},
            Some(_) => text.push('\n'),
            None => {},
        }
        line_y = Some(y);
        text.push(ch);
    }
    text
}
