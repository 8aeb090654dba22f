#![forbid(unsafe_code)]

use std::fmt;

use crate::category::CategoryCode;

/// Errors reported by category construction, measurement ingestion and
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// A non-empty measurement was allocated over an empty category set.
    NoCategories,
    /// The same code appeared twice while building a category set.
    DuplicateCategory(CategoryCode),
    /// A quantity below zero was offered for a category.
    NegativeQuantity { category: CategoryCode, quantity: i128 },
    /// A quantity or the category total exceeded the arithmetic range.
    Overflow,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCategories => {
                write!(f, "measurement is not empty but no categories were given")
            }
            Self::DuplicateCategory(code) => write!(f, "duplicate category code {code}"),
            Self::NegativeQuantity { category, quantity } => {
                write!(f, "negative quantity {quantity} for category {category}")
            }
            Self::Overflow => write!(f, "quantity out of range"),
        }
    }
}

impl std::error::Error for AllocError {}
