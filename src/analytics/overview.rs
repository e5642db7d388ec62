//! Portfolio overview: the headline numbers shown above the product table.

use super::summary::round_half_up;
use crate::catalog::{Product, ScoreBand};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub total_products: usize,
    /// Rounded half-up; 0 for an empty catalog.
    pub average_score: u32,
    /// Records scoring at or above the high-transparency threshold.
    pub high_transparency: usize,
    /// Records carrying at least one flag.
    pub needs_attention: usize,
}

/// Default high-transparency threshold, the lower bound of the Excellent band.
pub const DEFAULT_HIGH_TRANSPARENCY_THRESHOLD: u32 = ScoreBand::EXCELLENT_MIN;

pub fn compute_overview(records: &[Product], high_threshold: u32) -> PortfolioOverview {
    let total: u64 = records.iter().map(|p| u64::from(p.score)).sum();
    let average_score = if records.is_empty() {
        0
    } else {
        round_half_up(total as f64 / records.len() as f64)
    };

    PortfolioOverview {
        total_products: records.len(),
        average_score,
        high_transparency: records.iter().filter(|p| p.score >= high_threshold).count(),
        needs_attention: records.iter().filter(|p| p.needs_attention()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(score: u32, flags: &[&str]) -> Product {
        let mut p = Product::new("id", "name");
        p.score = score;
        p.flags = flags.iter().map(|f| f.to_string()).collect();
        p
    }

    #[test]
    fn test_empty_overview() {
        let overview = compute_overview(&[], DEFAULT_HIGH_TRANSPARENCY_THRESHOLD);
        assert_eq!(
            overview,
            PortfolioOverview {
                total_products: 0,
                average_score: 0,
                high_transparency: 0,
                needs_attention: 0,
            }
        );
    }

    #[test]
    fn test_overview_counts() {
        let records = vec![
            product(92, &[]),
            product(80, &["sugar"]),
            product(45, &["palm oil", "additives"]),
        ];

        let overview = compute_overview(&records, DEFAULT_HIGH_TRANSPARENCY_THRESHOLD);

        assert_eq!(overview.total_products, 3);
        assert_eq!(overview.average_score, 72);
        assert_eq!(overview.high_transparency, 2);
        assert_eq!(overview.needs_attention, 2);
    }

    #[test]
    fn test_custom_threshold() {
        let records = vec![product(92, &[]), product(80, &[])];
        assert_eq!(compute_overview(&records, 90).high_transparency, 1);
    }
}
