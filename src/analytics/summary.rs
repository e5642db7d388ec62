//! Aggregate summary: mean score, category ranking, top flags, certifications.

use super::accumulator::{FlagTally, ScoreTally, SummaryAccumulator};
use crate::catalog::Product;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Number of flags kept in [`AggregateSummary::top_flags`] by default.
pub const DEFAULT_TOP_FLAGS: usize = 5;

/// Portfolio-wide statistics, recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    /// Mean score over all records. 0.0 for an empty set, which means
    /// "no data" rather than a real zero score.
    pub mean_score: f64,
    pub record_count: usize,
    /// Sorted by rounded mean descending, then category name ascending.
    pub category_means: Vec<CategoryMean>,
    /// Sorted by count descending, then first appearance. Truncated.
    pub top_flags: Vec<FlagCount>,
    /// Not deduplicated: one label on two products counts twice.
    pub certification_count: usize,
}

impl AggregateSummary {
    /// Mean rounded half-up for display.
    pub fn rounded_mean(&self) -> u32 {
        round_half_up(self.mean_score)
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Sum of the reported flag counts. Only the top flags contribute.
    pub fn total_issues(&self) -> usize {
        self.top_flags.iter().map(|f| f.count).sum()
    }

    /// Number of distinct categories.
    pub fn category_count(&self) -> usize {
        self.category_means.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMean {
    pub category: String,
    pub mean: f64,
    /// Records in the category.
    pub count: usize,
}

impl CategoryMean {
    pub fn rounded_mean(&self) -> u32 {
        round_half_up(self.mean)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagCount {
    pub flag: String,
    pub count: usize,
}

/// Options for summary computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// How many flags to keep.
    pub top_flags: usize,
    /// Record count at which [`compute_summary_auto`] switches to rayon.
    pub parallel_threshold: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            top_flags: DEFAULT_TOP_FLAGS,
            parallel_threshold: 10_000,
        }
    }
}

/// Computes the aggregate summary with default options.
///
/// # Examples
///
/// ```
/// use shelfscope::analytics::compute_summary;
///
/// let summary = compute_summary(&[]);
/// assert_eq!(summary.mean_score, 0.0);
/// assert!(summary.category_means.is_empty());
/// ```
pub fn compute_summary(records: &[Product]) -> AggregateSummary {
    compute_summary_with(records, &SummaryOptions::default())
}

/// Computes the aggregate summary in a single sequential pass.
pub fn compute_summary_with(records: &[Product], options: &SummaryOptions) -> AggregateSummary {
    let acc = records
        .iter()
        .enumerate()
        .fold(SummaryAccumulator::default(), |acc, (i, p)| acc.add(i, p));
    finish(acc, options.top_flags)
}

/// Computes the aggregate summary on the rayon pool.
///
/// Produces exactly the same result as [`compute_summary_with`].
pub fn compute_summary_parallel(
    records: &[Product],
    options: &SummaryOptions,
) -> AggregateSummary {
    let acc = records
        .par_iter()
        .enumerate()
        .fold(SummaryAccumulator::default, |acc, (i, p)| acc.add(i, p))
        .reduce(SummaryAccumulator::default, SummaryAccumulator::merge);
    finish(acc, options.top_flags)
}

/// Picks the sequential or parallel path by record count.
pub fn compute_summary_auto(records: &[Product], options: &SummaryOptions) -> AggregateSummary {
    let parallel = records.len() >= options.parallel_threshold;
    debug!(records = records.len(), parallel, "Computing aggregate summary");
    if parallel {
        compute_summary_parallel(records, options)
    } else {
        compute_summary_with(records, options)
    }
}

fn finish(acc: SummaryAccumulator, top_flags: usize) -> AggregateSummary {
    AggregateSummary {
        mean_score: acc.scores.mean(),
        record_count: acc.scores.count,
        category_means: rank_categories(acc.categories.into_iter().collect()),
        top_flags: rank_flags(acc.flags.into_iter().collect(), top_flags),
        certification_count: acc.certifications,
    }
}

/// Rounded mean descending; equal displayed means break by category name
/// ascending.
fn rank_categories(groups: Vec<(String, ScoreTally)>) -> Vec<CategoryMean> {
    let mut means: Vec<CategoryMean> = groups
        .into_iter()
        .map(|(category, tally)| CategoryMean {
            category,
            mean: tally.mean(),
            count: tally.count,
        })
        .collect();

    means.sort_by(|a, b| {
        b.rounded_mean()
            .cmp(&a.rounded_mean())
            .then_with(|| a.category.cmp(&b.category))
    });
    means
}

/// Count descending; equal counts break by first appearance.
fn rank_flags(flags: Vec<(String, FlagTally)>, limit: usize) -> Vec<FlagCount> {
    let mut ranked = flags;
    ranked.sort_by(|(_, a), (_, b)| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(flag, tally)| FlagCount {
            flag,
            count: tally.count,
        })
        .collect()
}

/// Half-up rounding for non-negative display values.
pub(crate) fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}
