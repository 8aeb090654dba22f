#![forbid(unsafe_code)]

//! Percentage map to wrapped glyph lines.
//!
//! Every glyph counts as [`UNITS_PER_GLYPH`] units of line width whether it
//! holds one code point or two, so a line of width 20 always carries ten
//! glyphs. Nothing is padded in the output.

use greenmix_alloc::{Categories, CategoryCode, PercentageMap};

use crate::error::RenderError;
use crate::glyph::{Glyph, GlyphSpec};
use crate::message::RenderedMessage;

/// Line-width units occupied by one glyph.
pub const UNITS_PER_GLYPH: usize = 2;

/// Ten glyphs per line.
pub const DEFAULT_LINE_WIDTH: usize = 20;

/// Render `percentages` as repeated glyphs wrapped at `line_width` units.
///
/// Categories are ordered by descending percentage with a stable sort, so
/// equal percentages keep their order in `categories`. Each category then
/// contributes `percentage` copies of its glyph. Categories at 0% are skipped
/// and need no glyph; entries of `percentages` outside `categories` are not
/// rendered.
///
/// # Errors
///
/// - [`RenderError::InvalidLineWidth`] if `line_width` is zero or not a
///   multiple of [`UNITS_PER_GLYPH`].
/// - [`RenderError::MissingGlyph`] if a category with a non-zero percentage
///   has no entry in `glyphs`.
pub fn render(
    percentages: &PercentageMap,
    categories: &Categories,
    glyphs: &GlyphSpec,
    line_width: usize,
) -> Result<RenderedMessage, RenderError> {
    if line_width == 0 || line_width % UNITS_PER_GLYPH != 0 {
        return Err(RenderError::InvalidLineWidth(line_width));
    }
    let glyphs_per_line = line_width / UNITS_PER_GLYPH;

    let _span = tracing::debug_span!("render", categories = categories.len(), line_width);
    let _guard = _span.enter();

    let ranked = rank(percentages, categories);

    let capacity = ranked.iter().map(|(_, n)| usize::from(*n)).sum();
    let mut slots: Vec<&Glyph> = Vec::with_capacity(capacity);
    for (code, count) in ranked {
        if count == 0 {
            continue;
        }
        let glyph = glyphs
            .get(code.as_str())
            .ok_or_else(|| RenderError::MissingGlyph(code.clone()))?;
        slots.extend(std::iter::repeat_n(glyph, usize::from(count)));
    }

    let lines: Vec<String> = slots
        .chunks(glyphs_per_line)
        .map(|chunk| {
            let mut line = String::with_capacity(chunk.len() * 8);
            for glyph in chunk {
                glyph.push_to(&mut line);
            }
            line
        })
        .collect();

    tracing::trace!(glyphs = slots.len(), lines = lines.len(), "message rendered");

    Ok(RenderedMessage::new(lines, glyphs_per_line, slots.len()))
}

/// Categories with their percentages, highest first, ties in set order.
fn rank<'a>(
    percentages: &PercentageMap,
    categories: &'a Categories,
) -> Vec<(&'a CategoryCode, u8)> {
    let mut ranked: Vec<(&CategoryCode, u8)> = categories
        .iter()
        .map(|code| (code, percentages.get(code.as_str())))
        .collect();
    // `sort_by` is stable: equal percentages stay in category order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
