#![forbid(unsafe_code)]

//! Glyphs and the category glyph table.
//!
//! A glyph is what one percentage point looks like: one or two code points.
//! Emoji that need a variation selector (`☀` + U+FE0F) take two and plain
//! pictographs (`🌿`) take one. Either way a glyph fills exactly one slot
//! when lines are wrapped. Tables written for the two-unit layout may pad a
//! single code point with a trailing space; the pad is dropped on parse.

use std::collections::BTreeMap;
use std::fmt;

use greenmix_alloc::CategoryCode;
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::error::{GlyphError, RenderError};

/// U+FE0F, requests emoji presentation for the preceding character.
pub const EMOJI_PRESENTATION: char = '\u{FE0F}';

/// Filler after a one code point glyph in two-unit tables. Never rendered.
pub const PAD: char = ' ';

/// One display slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph {
    units: SmallVec<[char; 2]>,
}

impl Glyph {
    /// Upper bound on code points per glyph.
    pub const MAX_CODE_POINTS: usize = 2;

    /// Parse a glyph from text.
    ///
    /// Any one or two code points are accepted. A trailing [`PAD`] after the
    /// first code point is stripped.
    pub fn new(text: &str) -> Result<Self, GlyphError> {
        let mut units: SmallVec<[char; 2]> = text.chars().collect();
        if units.is_empty() {
            return Err(GlyphError::Empty);
        }
        if units.len() > Self::MAX_CODE_POINTS {
            return Err(GlyphError::TooManyCodePoints(units.len()));
        }
        if units.len() == 2 && units[1] == PAD {
            units.truncate(1);
        }
        let glyph = Self { units };
        let clusters = glyph.grapheme_count();
        if clusters > 1 {
            tracing::debug!(
                glyph = %glyph,
                clusters,
                "glyph shows more than one grapheme in its slot"
            );
        }
        Ok(glyph)
    }

    /// Build a glyph from numeric code points (`[9728, 65039]` is `☀️`).
    pub fn from_code_points(code_points: &[u32]) -> Result<Self, GlyphError> {
        let mut text = String::with_capacity(code_points.len() * 4);
        for &cp in code_points {
            text.push(char::from_u32(cp).ok_or(GlyphError::InvalidCodePoint(cp))?);
        }
        Self::new(&text)
    }

    /// A glyph made of one character.
    #[must_use]
    pub fn single(c: char) -> Self {
        Self {
            units: SmallVec::from_buf_and_len([c, '\0'], 1),
        }
    }

    /// `c` followed by the emoji presentation selector.
    #[must_use]
    pub fn presentation(c: char) -> Self {
        Self {
            units: SmallVec::from_buf([c, EMOJI_PRESENTATION]),
        }
    }

    /// The code points, in order.
    #[must_use]
    pub fn code_points(&self) -> &[char] {
        &self.units
    }

    /// Number of grapheme clusters the glyph displays as.
    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.to_string().graphemes(true).count()
    }

    /// Terminal cell width of the glyph.
    #[must_use]
    pub fn width(&self) -> usize {
        self.to_string().width()
    }

    /// Append the glyph to `out`.
    pub fn push_to(&self, out: &mut String) {
        out.extend(self.units.iter());
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::with_capacity(8);
        self.push_to(&mut text);
        f.write_str(&text)
    }
}

/// Category to glyph lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphSpec {
    glyphs: BTreeMap<CategoryCode, Glyph>,
}

impl GlyphSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` as the glyph for `code`.
    pub fn insert(
        &mut self,
        code: impl Into<CategoryCode>,
        text: &str,
    ) -> Result<Option<Glyph>, RenderError> {
        let category = code.into();
        match Glyph::new(text) {
            Ok(glyph) => Ok(self.glyphs.insert(category, glyph)),
            Err(reason) => Err(RenderError::InvalidGlyph { category, reason }),
        }
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Glyph> {
        self.glyphs.get(code)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.glyphs.contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryCode, &Glyph)> + '_ {
        self.glyphs.iter()
    }
}

impl<C: Into<CategoryCode>> FromIterator<(C, Glyph)> for GlyphSpec {
    fn from_iter<I: IntoIterator<Item = (C, Glyph)>>(iter: I) -> Self {
        Self {
            glyphs: iter.into_iter().map(|(c, g)| (c.into(), g)).collect(),
        }
    }
}
