//! Rectangle-addressed text extraction.
//!
//! `lopdf` only exposes whole-page text, so this module interprets the page
//! content stream into positioned characters ([`content`]) and resolves
//! named rectangular regions against them ([`regions`]). The result is the
//! primitive the highlight pipeline needs: "the text whose glyphs sit under
//! this rectangle".

pub mod content;
pub mod regions;

pub use content::{page_characters, PositionedChar};
pub use regions::RegionExtractor;
