#![forbid(unsafe_code)]

//! greenmix public facade crate.
//!
//! Glues the allocator and the renderer together behind a configuration
//! table, and hosts the pieces the `greenmix` binary needs: measurement
//! ingestion, argument parsing and log setup.
//!
//! # Example
//! ```
//! use greenmix::{Config, Measurement, compose};
//!
//! let config = Config::default();
//! let measurement: Measurement = [("B16", 867_u64), ("B19", 24)].into_iter().collect();
//! let composition = compose(&measurement, &config).unwrap();
//! assert_eq!(composition.percentages.sum(), 100);
//! assert_eq!(composition.message.glyph_count(), 100);
//! ```

use std::fmt;
use std::path::PathBuf;

pub mod cli;
pub mod config;
pub mod logging;
pub mod source;

// --- Re-exports ------------------------------------------------------------

pub use greenmix_alloc::{
    AllocError, Categories, CategoryCode, Measurement, PercentageMap, TOTAL_UNITS, allocate,
};
pub use greenmix_render::{
    DEFAULT_LINE_WIDTH, Glyph, GlyphError, GlyphSpec, RenderError, RenderedMessage,
    UNITS_PER_GLYPH, render,
};

pub use config::{CategoryEntry, Config, ConfigFile};
pub use source::{MeasurementInput, Quantity, SeriesPoint, read_measurement};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for greenmix.
#[derive(Debug)]
pub enum Error {
    /// Reading a file or stdin failed.
    Io {
        path: Option<PathBuf>,
        source: std::io::Error,
    },
    /// A config or measurement document did not match its schema.
    Json(serde_json::Error),
    /// Category or measurement data was rejected.
    Alloc(AllocError),
    /// Glyph data or line width was rejected.
    Render(RenderError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "{}: {source}", path.display()),
            Self::Io { path: None, source } => write!(f, "{source}"),
            Self::Json(err) => write!(f, "invalid JSON: {err}"),
            Self::Alloc(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Alloc(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<AllocError> for Error {
    fn from(err: AllocError) -> Self {
        Self::Alloc(err)
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

/// Standard result type for greenmix APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Pipeline -------------------------------------------------------------

/// The allocation together with the message rendered from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub percentages: PercentageMap,
    pub message: RenderedMessage,
}

/// Allocate `measurement` over the configured categories and render it.
///
/// # Errors
///
/// Every category named in `measurement` must have a glyph in `config`, even
/// one whose quantity is zero; the first one without is reported as
/// [`RenderError::MissingGlyph`] before anything is allocated. Allocation and
/// rendering errors are passed through.
pub fn compose(measurement: &Measurement, config: &Config) -> Result<Composition> {
    if let Some((code, quantity)) = measurement
        .iter()
        .find(|(code, _)| !config.glyphs().contains(code.as_str()))
    {
        tracing::warn!(category = %code, quantity, "measurement names a category with no glyph");
        return Err(RenderError::MissingGlyph(code.clone()).into());
    }
    let percentages = allocate(measurement, config.categories())?;
    for (code, percent) in percentages.iter().filter(|(_, p)| *p > 0) {
        tracing::debug!(
            category = %code,
            name = config.name(code.as_str()).unwrap_or_default(),
            percent,
            "share"
        );
    }
    let message = render(
        &percentages,
        config.categories(),
        config.glyphs(),
        config.line_width(),
    )?;
    tracing::info!(
        lines = message.line_count(),
        glyphs = message.glyph_count(),
        "message composed"
    );
    Ok(Composition {
        percentages,
        message,
    })
}
