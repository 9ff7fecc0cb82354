//! Per-category flag vector.

use serde::{Deserialize, Serialize};

use crate::constants::CATEGORY_COUNT;

use super::category::BreachCategory;

/// Ten independent 0/1 flags, one per breach category.
///
/// Indexed by `BreachCategory::index()`, so iteration and serialization
/// always follow the canonical category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryFlags([bool; CATEGORY_COUNT]);

impl CategoryFlags {
    /// All flags unset.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn set(&mut self, category: BreachCategory) {
        self.0[category.index()] = true;
    }

    pub fn get(&self, category: BreachCategory) -> bool {
        self.0[category.index()]
    }

    /// Number of flags set.
    pub fn count_set(&self) -> u32 {
        self.0.iter().filter(|&&f| f).count() as u32
    }

    /// True if at least one flag is set.
    pub fn any(&self) -> bool {
        self.0.iter().any(|&f| f)
    }

    /// Iterate `(category, flag)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (BreachCategory, bool)> + '_ {
        BreachCategory::all().iter().map(move |&c| (c, self.get(c)))
    }

    /// Categories whose flag is set, in canonical order.
    pub fn set_categories(&self) -> Vec<BreachCategory> {
        self.iter().filter(|(_, f)| *f).map(|(c, _)| c).collect()
    }
}

impl FromIterator<BreachCategory> for CategoryFlags {
    fn from_iter<I: IntoIterator<Item = BreachCategory>>(iter: I) -> Self {
        let mut flags = Self::none();
        for cat in iter {
            flags.set(cat);
        }
        flags
    }
}
