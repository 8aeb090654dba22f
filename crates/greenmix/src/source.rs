#![forbid(unsafe_code)]

//! Measurement ingestion.
//!
//! The upstream adapter (which queries the transparency platform and parses
//! its market document) hands over one point per generation series. This
//! module accepts those points, or a plain code-to-quantity object, as JSON:
//!
//! ```json
//! [{ "psr_type": "B16", "quantity": 867 }, { "psr_type": "B19", "quantity": 24 }]
//! ```
//!
//! ```json
//! { "B16": 867, "B19": 24 }
//! ```

use std::collections::BTreeMap;
use std::io::Read;

use greenmix_alloc::{Categories, Measurement};
use serde::{Deserialize, Serialize};

use crate::Result;

/// One reporting point of a generation series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Production type code (`B01`, `B16`, ...).
    pub psr_type: String,
    /// Generated quantity over the period.
    pub quantity: Quantity,
}

/// A JSON integer quantity: any `u64`, or a negative `i64`.
///
/// Negatives parse so that validation can name the offending category
/// instead of failing as a schema mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Unsigned(u64),
    Signed(i64),
}

impl From<Quantity> for i128 {
    fn from(quantity: Quantity) -> Self {
        match quantity {
            Quantity::Unsigned(q) => i128::from(q),
            Quantity::Signed(q) => i128::from(q),
        }
    }
}

/// Accepted measurement documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MeasurementInput {
    Points(Vec<SeriesPoint>),
    Map(BTreeMap<String, Quantity>),
}

impl MeasurementInput {
    /// Convert into a measurement over `categories`.
    ///
    /// Codes outside `categories` are dropped; for repeated codes the last
    /// point wins; negative quantities are rejected.
    pub fn into_measurement(self, categories: &Categories) -> Result<Measurement> {
        let measurement = match self {
            Self::Points(points) => Measurement::from_points(
                points
                    .into_iter()
                    .map(|p| (p.psr_type, i128::from(p.quantity))),
                categories,
            )?,
            Self::Map(map) => Measurement::from_points(
                map.into_iter().map(|(code, q)| (code, i128::from(q))),
                categories,
            )?,
        };
        Ok(measurement)
    }
}

/// Read a JSON measurement document from `reader`.
pub fn read_measurement<R: Read>(reader: R, categories: &Categories) -> Result<Measurement> {
    let input: MeasurementInput = serde_json::from_reader(reader)?;
    let measurement = input.into_measurement(categories)?;
    tracing::debug!(entries = measurement.len(), "measurement read");
    Ok(measurement)
}
