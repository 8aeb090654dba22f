#![forbid(unsafe_code)]

//! Category identifiers and the ordered category set.

use std::borrow::Borrow;
use std::fmt;

use crate::error::AllocError;

/// Opaque identifier of a generation category (for example `B16`, solar).
///
/// Implements `Borrow<str>` so keyed collections can be queried with `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryCode(Box<str>);

impl CategoryCode {
    /// Create a category code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().into_boxed_str())
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CategoryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CategoryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CategoryCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

/// Ordered set of category codes.
///
/// Position in the set is the secondary sort key used by both allocation and
/// rendering, so two runs over the same set always resolve ties identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    codes: Vec<CategoryCode>,
}

impl Categories {
    /// Build a category set, rejecting duplicate codes.
    pub fn try_new<I, C>(codes: I) -> Result<Self, AllocError>
    where
        I: IntoIterator<Item = C>,
        C: Into<CategoryCode>,
    {
        let mut set = Self::default();
        for code in codes {
            let code = code.into();
            if set.contains(code.as_str()) {
                return Err(AllocError::DuplicateCategory(code));
            }
            set.codes.push(code);
        }
        Ok(set)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether `code` is part of the set.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// Position of `code` in the set.
    #[must_use]
    pub fn position(&self, code: &str) -> Option<usize> {
        self.codes.iter().position(|c| c.as_str() == code)
    }

    /// Iterate codes in set order.
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryCode> {
        self.codes.iter()
    }

    /// Codes as a slice, in set order.
    #[must_use]
    pub fn as_slice(&self) -> &[CategoryCode] {
        &self.codes
    }
}

/// Collecting keeps the first occurrence of each code and drops repeats.
impl<C: Into<CategoryCode>> FromIterator<C> for Categories {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut set = Self::default();
        for code in iter {
            let code = code.into();
            if !set.contains(code.as_str()) {
                set.codes.push(code);
            }
        }
        set
    }
}

impl<'a> IntoIterator for &'a Categories {
    type Item = &'a CategoryCode;
    type IntoIter = std::slice::Iter<'a, CategoryCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
