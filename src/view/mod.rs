//! Table view engine: pure transformation from records to visible rows.
//!
//! # Architecture
//!
//! ```text
//! &[Product] + ViewState
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  compute_view()  │
//! └──────────────────┘
//!        │
//!        ├─→ filter_records()  ← search, status, category (ANDed)
//!        └─→ sort_rows()       ← stable, by field and direction
//!        │
//!        ▼
//! Vec<&Product>
//! ```
//!
//! # Purity Guarantee
//!
//! Every call is a projection of its inputs: no I/O, no hidden state, and
//! identical inputs give identical outputs. Rows are borrowed from the input
//! slice, so the output can never contain a record the input did not.
//!
//! View state arrives already validated. Raw strings go through
//! [`RawViewState::resolve`] first, which is where `InvalidViewState` is
//! raised; the engine itself has no error conditions.

pub mod collate;
pub mod filter;
pub mod sort;
pub mod state;

#[cfg(test)]
mod tests;

pub use collate::locale_cmp;
pub use filter::{filter_records, FilterStats, SearchTerm};
pub use sort::{compare_by_field, sort_rows};
pub use state::{
    CategoryFilter, RawViewState, SortDirection, SortField, StatusFilter, ViewState,
};

use crate::catalog::Product;
use serde::Serialize;
use tracing::debug;

/// Produces the ordered, filtered rows to display.
///
/// # Examples
///
/// ```
/// use shelfscope::catalog::Product;
/// use shelfscope::view::{compute_view, ViewState};
///
/// let mut low = Product::new("1", "Rice Cake");
/// low.score = 40;
/// let mut high = Product::new("2", "Oat Milk");
/// high.score = 85;
///
/// let records = vec![low, high];
/// let rows = compute_view(&records, &ViewState::default());
///
/// assert_eq!(rows[0].id, "2");
/// ```
pub fn compute_view<'a>(records: &'a [Product], state: &ViewState) -> Vec<&'a Product> {
    filter_and_sort(records, state).0
}

/// Both pipeline stages, shared by [`compute_view`] and [`compute_page`].
fn filter_and_sort<'a>(
    records: &'a [Product],
    state: &ViewState,
) -> (Vec<&'a Product>, FilterStats) {
    let (mut rows, stats) = filter_records(records, state);
    sort_rows(&mut rows, state.sort_field, state.sort_direction);

    debug!(
        total = records.len(),
        shown = rows.len(),
        filtered_by_search = stats.filtered_by_search,
        filtered_by_status = stats.filtered_by_status,
        filtered_by_category = stats.filtered_by_category,
        sort_field = state.sort_field.name(),
        sort_direction = state.sort_direction.as_str(),
        "Computed table view"
    );

    (rows, stats)
}

/// Rows plus the counts needed for "Showing N of M products".
#[derive(Debug, Clone, Serialize)]
pub struct ViewPage<'a> {
    pub rows: Vec<&'a Product>,
    /// Rows that passed the filters, before any limit.
    pub shown: usize,
    /// Records in the catalog.
    pub total: usize,
    #[serde(skip)]
    pub stats: FilterStats,
}

impl ViewPage<'_> {
    /// Whether a limit dropped rows that passed the filters.
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.shown
    }
}

/// Like [`compute_view`], with result counts and an optional row limit.
///
/// The limit applies after sorting, so it keeps the top rows.
pub fn compute_page<'a>(
    records: &'a [Product],
    state: &ViewState,
    limit: Option<usize>,
) -> ViewPage<'a> {
    let (mut rows, stats) = filter_and_sort(records, state);
    let shown = rows.len();

    if let Some(n) = limit {
        rows.truncate(n);
    }

    ViewPage {
        rows,
        shown,
        total: records.len(),
        stats,
    }
}
