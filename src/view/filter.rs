//! Stage 1: Filtering - search, status and category predicates.
//!
//! All predicates are ANDed. Filtering never reorders: the output keeps the
//! input's relative order so the sort stage can stay stable.

use super::state::ViewState;
use crate::catalog::Product;

/// Statistics about filtered records.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub filtered_by_search: usize,
    pub filtered_by_status: usize,
    pub filtered_by_category: usize,
}

impl FilterStats {
    pub fn total(&self) -> usize {
        self.filtered_by_search + self.filtered_by_status + self.filtered_by_category
    }
}

/// Lowercased search needle, built once per recomputation.
#[derive(Debug, Clone)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// Case-insensitive substring match on product name or category.
    pub fn matches(&self, product: &Product) -> bool {
        self.needle.is_empty()
            || product.product_name.to_lowercase().contains(&self.needle)
            || product.category.to_lowercase().contains(&self.needle)
    }
}

/// Filters records, returning the survivors and counts of rejections.
///
/// Rejections are attributed to the first predicate that fails, checked in
/// the order search, status, category.
pub fn filter_records<'a>(
    records: &'a [Product],
    state: &ViewState,
) -> (Vec<&'a Product>, FilterStats) {
    let search = SearchTerm::new(&state.search);
    let mut stats = FilterStats::default();

    let filtered = records
        .iter()
        .filter(|product| {
            if !search.matches(product) {
                stats.filtered_by_search += 1;
                return false;
            }
            if !state.status.matches(product) {
                stats.filtered_by_status += 1;
                return false;
            }
            if !state.category.matches(product) {
                stats.filtered_by_category += 1;
                return false;
            }
            true
        })
        .collect();

    (filtered, stats)
}
