#![forbid(unsafe_code)]

//! Glyph rendering for greenmix.
//!
//! Turns a [`PercentageMap`](greenmix_alloc::PercentageMap) into a block of
//! emoji, one glyph per percentage point:
//! - [`Glyph`] - one display slot (one or two code points)
//! - [`GlyphSpec`] - category to glyph table
//! - [`RenderedMessage`] - the wrapped lines
//! - [`render`] - ordering, repetition and wrapping
//!
//! # Example
//! ```
//! use greenmix_alloc::{Categories, PercentageMap};
//! use greenmix_render::{GlyphSpec, render};
//!
//! let cats: Categories = ["B01", "B16"].into_iter().collect();
//! let pct: PercentageMap = [("B01", 3_u8), ("B16", 12)].into_iter().collect();
//! let mut glyphs = GlyphSpec::new();
//! glyphs.insert("B01", "a").unwrap();
//! glyphs.insert("B16", "b").unwrap();
//!
//! let msg = render(&pct, &cats, &glyphs, 20).unwrap();
//! assert_eq!(msg.to_string(), "bbbbbbbbbb\nbbaaa");
//! ```

pub mod error;
pub mod glyph;
pub mod message;
pub mod render;

pub use error::{GlyphError, RenderError};
pub use glyph::{Glyph, GlyphSpec};
pub use message::RenderedMessage;
pub use render::{DEFAULT_LINE_WIDTH, UNITS_PER_GLYPH, render};
