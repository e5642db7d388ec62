//! Partial aggregation state.
//!
//! Every field reduces with an associative, commutative merge (sums, counts,
//! and a minimum for first-seen positions), so any sharding of the records
//! merges to the same state as a single sequential pass.

use crate::catalog::Product;
use std::collections::HashMap;

/// Position of a flag occurrence: (record index, index within its flags).
pub(crate) type FirstSeen = (usize, usize);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScoreTally {
    pub total: u64,
    pub count: usize,
}

impl ScoreTally {
    fn add(&mut self, score: u32) {
        self.total += u64::from(score);
        self.count += 1;
    }

    fn merge(&mut self, other: ScoreTally) {
        self.total += other.total;
        self.count += other.count;
    }

    /// Arithmetic mean; 0.0 for an empty tally.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total as f64 / self.count as f64
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlagTally {
    pub count: usize,
    pub first_seen: FirstSeen,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SummaryAccumulator {
    pub scores: ScoreTally,
    pub categories: HashMap<String, ScoreTally>,
    pub flags: HashMap<String, FlagTally>,
    pub certifications: usize,
}

impl SummaryAccumulator {
    /// Fold one record in. `index` is the record's position in the full set.
    pub fn add(mut self, index: usize, product: &Product) -> Self {
        self.scores.add(product.score);
        self.categories
            .entry(product.category.clone())
            .or_default()
            .add(product.score);

        for (flag_index, flag) in product.flags.iter().enumerate() {
            let seen = (index, flag_index);
            self.flags
                .entry(flag.clone())
                .and_modify(|tally| {
                    tally.count += 1;
                    tally.first_seen = tally.first_seen.min(seen);
                })
                .or_insert(FlagTally {
                    count: 1,
                    first_seen: seen,
                });
        }

        self.certifications += product.certifications.len();
        self
    }

    pub fn merge(mut self, other: SummaryAccumulator) -> Self {
        self.scores.merge(other.scores);

        for (category, tally) in other.categories {
            self.categories.entry(category).or_default().merge(tally);
        }

        for (flag, tally) in other.flags {
            self.flags
                .entry(flag)
                .and_modify(|mine| {
                    mine.count += tally.count;
                    mine.first_seen = mine.first_seen.min(tally.first_seen);
                })
                .or_insert(tally);
        }

        self.certifications += other.certifications;
        self
    }
}
