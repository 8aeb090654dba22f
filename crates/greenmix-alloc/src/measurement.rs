#![forbid(unsafe_code)]

//! Per-category quantities for one reporting period.

use std::collections::BTreeMap;

use crate::category::{Categories, CategoryCode};
use crate::error::AllocError;

/// Mapping from category to a non-negative quantity.
///
/// Categories that were never inserted read as zero. Iteration is in code
/// order, never in hash order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurement {
    values: BTreeMap<CategoryCode, u64>,
}

impl Measurement {
    /// Create an empty measurement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity for `code`, returning the previous one.
    pub fn insert(&mut self, code: impl Into<CategoryCode>, quantity: u64) -> Option<u64> {
        self.values.insert(code.into(), quantity)
    }

    /// Set a quantity coming from a signed source.
    ///
    /// Negative quantities are rejected, as are quantities above `u64::MAX`.
    /// Either way the measurement is left untouched.
    pub fn try_insert(
        &mut self,
        code: impl Into<CategoryCode>,
        quantity: i128,
    ) -> Result<Option<u64>, AllocError> {
        let category = code.into();
        if quantity < 0 {
            return Err(AllocError::NegativeQuantity { category, quantity });
        }
        let quantity = u64::try_from(quantity).map_err(|_| AllocError::Overflow)?;
        Ok(self.values.insert(category, quantity))
    }

    /// Build a measurement from upstream `(code, quantity)` points.
    ///
    /// Points for codes outside `categories` are skipped. When a code repeats,
    /// the later point replaces the earlier one.
    pub fn from_points<I, C>(points: I, categories: &Categories) -> Result<Self, AllocError>
    where
        I: IntoIterator<Item = (C, i128)>,
        C: AsRef<str>,
    {
        let mut measurement = Self::new();
        for (code, quantity) in points {
            let code = code.as_ref();
            if !categories.contains(code) {
                tracing::debug!(category = code, quantity, "skipping point outside category set");
                continue;
            }
            measurement.try_insert(code, quantity)?;
        }
        Ok(measurement)
    }

    /// Quantity for `code`, zero when absent.
    #[must_use]
    pub fn get(&self, code: &str) -> u64 {
        self.values.get(code).copied().unwrap_or(0)
    }

    /// Number of entries (including explicit zeros).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no entries were inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryCode, u64)> + '_ {
        self.values.iter().map(|(code, quantity)| (code, *quantity))
    }

    /// Sum of quantities over `categories` only.
    pub fn total_over(&self, categories: &Categories) -> Result<u128, AllocError> {
        categories.iter().try_fold(0_u128, |acc, code| {
            acc.checked_add(u128::from(self.get(code.as_str())))
                .ok_or(AllocError::Overflow)
        })
    }
}

impl<C: Into<CategoryCode>> FromIterator<(C, u64)> for Measurement {
    fn from_iter<I: IntoIterator<Item = (C, u64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(c, q)| (c.into(), q)).collect(),
        }
    }
}
