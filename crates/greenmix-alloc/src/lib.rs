#![forbid(unsafe_code)]

//! Percentage allocation for greenmix.
//!
//! This crate turns per-category counts into integer percentages that sum to
//! exactly 100:
//! - [`CategoryCode`] - opaque category identifier (`"B16"`, ...)
//! - [`Categories`] - ordered category set; its order breaks every tie
//! - [`Measurement`] - category to non-negative quantity
//! - [`PercentageMap`] - category to integer percentage, in category order
//! - [`allocate`] - the largest-remainder allocator
//!
//! # Example
//! ```
//! use greenmix_alloc::{Categories, Measurement, allocate};
//!
//! let categories: Categories = ["B01", "B16", "B19"].into_iter().collect();
//! let measurement: Measurement = [("B01", 1_u64), ("B16", 1), ("B19", 1)]
//!     .into_iter()
//!     .collect();
//!
//! let percentages = allocate(&measurement, &categories).unwrap();
//! assert_eq!(percentages.sum(), 100);
//! // 33.3 each; the single leftover unit goes to the first category.
//! assert_eq!(percentages.get("B01"), 34);
//! assert_eq!(percentages.get("B16"), 33);
//! ```

pub mod allocate;
pub mod category;
pub mod error;
pub mod measurement;

pub use allocate::{PercentageMap, TOTAL_UNITS, allocate};
pub use category::{Categories, CategoryCode};
pub use error::AllocError;
pub use measurement::Measurement;
