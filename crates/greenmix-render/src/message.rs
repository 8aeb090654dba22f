#![forbid(unsafe_code)]

use std::fmt;

use unicode_width::UnicodeWidthStr;

/// Wrapped glyph lines, ready to publish.
///
/// `Display` joins the lines with `\n` and writes no separator after the
/// last line, so the text carries no trailing newline. Callers printing the
/// message to a terminal or a line-oriented stream add one themselves, the
/// way `writeln!` does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedMessage {
    lines: Vec<String>,
    glyphs_per_line: usize,
    glyph_count: usize,
}

impl RenderedMessage {
    pub(crate) fn new(lines: Vec<String>, glyphs_per_line: usize, glyph_count: usize) -> Self {
        Self {
            lines,
            glyphs_per_line,
            glyph_count,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total glyph slots across all lines.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    /// Glyph slots on every line but the last.
    #[must_use]
    pub fn glyphs_per_line(&self) -> usize {
        self.glyphs_per_line
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Width in terminal cells of the widest line.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.lines.iter().map(|l| l.width()).max().unwrap_or(0)
    }
}

impl fmt::Display for RenderedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
