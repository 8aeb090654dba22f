#![forbid(unsafe_code)]

//! Largest-remainder allocation of counts into integer percentages.

use crate::category::{Categories, CategoryCode};
use crate::error::AllocError;
use crate::measurement::Measurement;

/// Number of units distributed across categories when the total is positive.
pub const TOTAL_UNITS: u8 = 100;

/// Integer percentage per category, kept in category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PercentageMap {
    entries: Vec<(CategoryCode, u8)>,
}

impl PercentageMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the percentage for `code`. An existing entry keeps its position.
    pub fn insert(&mut self, code: impl Into<CategoryCode>, percent: u8) -> Option<u8> {
        let code = code.into();
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| *c == code) {
            return Some(std::mem::replace(&mut entry.1, percent));
        }
        self.entries.push((code, percent));
        None
    }

    /// Percentage for `code`, zero when absent.
    #[must_use]
    pub fn get(&self, code: &str) -> u8 {
        self.entries
            .iter()
            .find(|(c, _)| c.as_str() == code)
            .map_or(0, |(_, p)| *p)
    }

    /// Sum of all percentages.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.entries.iter().map(|(_, p)| u32::from(*p)).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion (category) order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryCode, u8)> + '_ {
        self.entries.iter().map(|(c, p)| (c, *p))
    }
}

impl<C: Into<CategoryCode>> FromIterator<(C, u8)> for PercentageMap {
    fn from_iter<I: IntoIterator<Item = (C, u8)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (code, percent) in iter {
            map.insert(code, percent);
        }
        map
    }
}

/// One category's exact share, split into floor and remainder numerator.
///
/// All remainders share the denominator `total`, so comparing numerators
/// compares the fractional parts exactly.
#[derive(Debug, Clone, Copy)]
struct Share {
    position: usize,
    base: u8,
    remainder: u128,
}

/// Allocate [`TOTAL_UNITS`] percentage points across `categories`.
///
/// # Algorithm: Largest Remainder (Hamilton's method)
///
/// 1. **Total**: sum the measurement over `categories`; entries for other
///    codes are ignored. A zero total maps every category to 0.
/// 2. **Floor phase**: each category gets `floor(value * 100 / total)`.
/// 3. **Deficit**: `D = 100 − Σ floor`, always in `0..categories.len()`.
/// 4. **Priority sort**: rank by remainder descending, then by position in
///    `categories` ascending.
/// 5. **Distribute**: the top `D` categories get one extra point.
///
/// # Properties
///
/// 1. **Sum conservation**: the result sums to exactly 100 when the total is
///    positive, and to 0 otherwise.
/// 2. **Bounded displacement**: every value is the floor or the ceiling of
///    its exact share.
/// 3. **Deterministic**: the position tie-break gives a total order, and the
///    integer remainders make equal shares compare equal.
///
/// # Errors
///
/// [`AllocError::NoCategories`] when `categories` is empty but the measurement
/// is not; [`AllocError::Overflow`] when the total exceeds `u128`.
///
/// # Example
///
/// ```
/// use greenmix_alloc::{Categories, Measurement, allocate};
///
/// let cats: Categories = ["B01", "B11", "B16"].into_iter().collect();
/// let m: Measurement = [("B01", 247_u64), ("B11", 122), ("B16", 867)]
///     .into_iter()
///     .collect();
/// let p = allocate(&m, &cats).unwrap();
/// assert_eq!(p.sum(), 100);
/// ```
pub fn allocate(
    measurement: &Measurement,
    categories: &Categories,
) -> Result<PercentageMap, AllocError> {
    let _span = tracing::debug_span!(
        "allocate",
        categories = categories.len(),
        entries = measurement.len()
    );
    let _guard = _span.enter();

    if categories.is_empty() {
        if measurement.is_empty() {
            return Ok(PercentageMap::new());
        }
        return Err(AllocError::NoCategories);
    }

    for (code, quantity) in measurement.iter() {
        if !categories.contains(code.as_str()) {
            tracing::debug!(
                category = %code,
                quantity,
                "ignoring measurement outside category set"
            );
        }
    }

    let total = measurement.total_over(categories)?;
    if total == 0 {
        tracing::trace!("zero total, all categories get 0");
        return Ok(categories.iter().map(|c| (c.clone(), 0_u8)).collect());
    }

    // Step 1: floor phase
    let scale = u128::from(TOTAL_UNITS);
    let mut shares = Vec::with_capacity(categories.len());
    for (position, code) in categories.iter().enumerate() {
        let scaled = u128::from(measurement.get(code.as_str())) * scale;
        let base = u8::try_from(scaled / total).map_err(|_| AllocError::Overflow)?;
        shares.push(Share {
            position,
            base,
            remainder: scaled % total,
        });
    }

    let floored_sum: u32 = shares.iter().map(|s| u32::from(s.base)).sum();

    // Step 2: deficit
    let deficit = u32::from(TOTAL_UNITS).saturating_sub(floored_sum) as usize;
    debug_assert!(deficit < categories.len(), "deficit {deficit} out of range");

    // Step 3: remainder descending, then caller order
    let mut priority = shares.clone();
    priority.sort_by(|a, b| {
        b.remainder
            .cmp(&a.remainder)
            .then_with(|| a.position.cmp(&b.position))
    });

    // Step 4: distribute
    for share in priority.iter().take(deficit) {
        shares[share.position].base += 1;
    }

    tracing::trace!(%total, floored_sum, deficit, "percentages allocated");

    Ok(categories
        .iter()
        .zip(shares)
        .map(|(code, share)| (code.clone(), share.base))
        .collect())
}
