// Export modules for library usage
pub mod analytics;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod observability;
pub mod output;
pub mod view;

// Re-export commonly used types
pub use crate::analytics::{
    compute_overview, compute_summary, compute_summary_parallel, AggregateSummary, CategoryMean,
    FlagCount, PortfolioOverview, SummaryOptions,
};
pub use crate::catalog::{Catalog, Ingredient, Product, ScoreBand, Status};
pub use crate::config::ShelfscopeConfig;
pub use crate::errors::{Error, Result, ViewStateError};
pub use crate::view::{
    compute_page, compute_view, CategoryFilter, RawViewState, SortDirection, SortField,
    StatusFilter, ViewPage, ViewState,
};
