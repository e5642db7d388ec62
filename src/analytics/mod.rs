//! Aggregation engine: portfolio statistics over the full record set.
//!
//! All functions are total. The empty record set is valid input and yields
//! zeros and empty rankings. Nothing here depends on the table view; the
//! summary always describes the whole catalog, not the filtered rows.

mod accumulator;
pub mod overview;
pub mod summary;

pub use overview::{compute_overview, PortfolioOverview, DEFAULT_HIGH_TRANSPARENCY_THRESHOLD};
pub use summary::{
    compute_summary, compute_summary_auto, compute_summary_parallel, compute_summary_with,
    AggregateSummary, CategoryMean, FlagCount, SummaryOptions, DEFAULT_TOP_FLAGS,
};
