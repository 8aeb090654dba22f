#![forbid(unsafe_code)]

use std::fmt;

use greenmix_alloc::CategoryCode;

/// Why a string cannot serve as a single glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    /// No code points at all.
    Empty,
    /// More code points than one slot holds.
    TooManyCodePoints(usize),
    /// A numeric code point that is not a Unicode scalar value.
    InvalidCodePoint(u32),
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "glyph is empty"),
            Self::TooManyCodePoints(n) => {
                write!(f, "glyph has {n} code points, at most 2 are allowed")
            }
            Self::InvalidCodePoint(cp) => write!(f, "invalid code point U+{cp:04X}"),
        }
    }
}

impl std::error::Error for GlyphError {}

/// Errors reported by glyph tables and [`render`](crate::render).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A category with a non-zero percentage has no glyph.
    MissingGlyph(CategoryCode),
    /// Line width is zero or not a whole number of glyph slots.
    InvalidLineWidth(usize),
    /// A glyph table entry was rejected.
    InvalidGlyph {
        category: CategoryCode,
        reason: GlyphError,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGlyph(code) => write!(f, "no glyph configured for category {code}"),
            Self::InvalidLineWidth(width) => write!(
                f,
                "line width {width} must be a positive multiple of {} units",
                crate::UNITS_PER_GLYPH
            ),
            Self::InvalidGlyph { category, reason } => {
                write!(f, "invalid glyph for category {category}: {reason}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::InvalidGlyph { reason, .. } = self {
            return Some(reason);
        }
        None
    }
}
