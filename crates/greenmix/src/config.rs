#![forbid(unsafe_code)]

//! Category and glyph tables.
//!
//! A configuration is an ordered list of categories, each with a
//! human-readable name and a glyph, plus the line width used for wrapping.
//! The on-disk form is JSON:
//!
//! ```json
//! {
//!   "line_width": 20,
//!   "categories": [
//!     { "code": "B16", "name": "Solar", "glyph": "☀️" },
//!     { "code": "B19", "name": "Wind Onshore", "glyph": "🌬️" }
//!   ]
//! }
//! ```
//!
//! The order of `categories` is the tie-break order for both allocation and
//! rendering.

use std::collections::BTreeMap;
use std::path::Path;

use greenmix_alloc::{Categories, CategoryCode};
use greenmix_render::{DEFAULT_LINE_WIDTH, Glyph, GlyphSpec, RenderError, UNITS_PER_GLYPH};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One category row of the JSON config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryEntry {
    pub code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub glyph: String,
}

/// Serialized config, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default = "default_line_width")]
    pub line_width: usize,
    pub categories: Vec<CategoryEntry>,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    categories: Categories,
    glyphs: GlyphSpec,
    names: BTreeMap<CategoryCode, String>,
    line_width: usize,
}

impl Config {
    /// Validate a deserialized config.
    ///
    /// Rejects duplicate codes, invalid glyphs and line widths that are not a
    /// positive multiple of [`UNITS_PER_GLYPH`].
    pub fn from_file_model(file: ConfigFile) -> Result<Self> {
        let line_width = check_line_width(file.line_width)?;
        let categories = Categories::try_new(file.categories.iter().map(|e| e.code.as_str()))?;
        let mut glyphs = GlyphSpec::new();
        let mut names = BTreeMap::new();
        for entry in file.categories {
            glyphs.insert(entry.code.as_str(), &entry.glyph)?;
            if !entry.name.is_empty() {
                names.insert(CategoryCode::from(entry.code), entry.name);
            }
        }
        Ok(Self {
            categories,
            glyphs,
            names,
            line_width,
        })
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_file_model(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_json_str(&text)
    }

    /// Serializable form of this config.
    #[must_use]
    pub fn to_file_model(&self) -> ConfigFile {
        ConfigFile {
            line_width: self.line_width,
            categories: self
                .entries()
                .map(|(code, glyph, name)| CategoryEntry {
                    code: code.to_string(),
                    name: name.to_string(),
                    glyph: glyph.to_string(),
                })
                .collect(),
        }
    }

    /// Replace the line width.
    pub fn with_line_width(mut self, line_width: usize) -> Result<Self> {
        self.line_width = check_line_width(line_width)?;
        Ok(self)
    }

    #[must_use]
    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    #[must_use]
    pub fn glyphs(&self) -> &GlyphSpec {
        &self.glyphs
    }

    #[must_use]
    pub fn line_width(&self) -> usize {
        self.line_width
    }

    /// Human-readable name of `code`, if configured.
    #[must_use]
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Rows in category order: code, glyph, name (empty when unnamed).
    pub fn entries(&self) -> impl Iterator<Item = (&CategoryCode, &Glyph, &str)> + '_ {
        self.categories.iter().filter_map(|code| {
            let glyph = self.glyphs.get(code.as_str())?;
            Some((code, glyph, self.name(code.as_str()).unwrap_or_default()))
        })
    }
}

fn check_line_width(line_width: usize) -> Result<usize> {
    if line_width == 0 || line_width % UNITS_PER_GLYPH != 0 {
        return Err(Error::Render(RenderError::InvalidLineWidth(line_width)));
    }
    Ok(line_width)
}

/// Renewable technologies reported for the Czech control area (CEPS).
impl Default for Config {
    fn default() -> Self {
        let table = [
            ("B01", "Biomass", Glyph::single('\u{1F33F}')),
            ("B09", "Geothermal", Glyph::single('\u{1F30D}')),
            (
                "B11",
                "Hydro Run-of-river and poundage",
                Glyph::single('\u{1F4A6}'),
            ),
            ("B12", "Hydro Water Reservoir", Glyph::single('\u{1F4A7}')),
            ("B15", "Other renewable", Glyph::presentation('\u{267B}')),
            ("B16", "Solar", Glyph::presentation('\u{2600}')),
            ("B19", "Wind Onshore", Glyph::presentation('\u{1F32C}')),
        ];
        let categories = table.iter().map(|(code, _, _)| *code).collect();
        let names = table
            .iter()
            .map(|(code, name, _)| (CategoryCode::from(*code), (*name).to_string()))
            .collect();
        let glyphs = table.into_iter().map(|(code, _, glyph)| (code, glyph)).collect();
        Self {
            categories,
            glyphs,
            names,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}
