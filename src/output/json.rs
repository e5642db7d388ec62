use crate::analytics::{AggregateSummary, PortfolioOverview};
use crate::catalog::{Product, ScoreBand, ALL};
use crate::view::{CategoryFilter, StatusFilter, ViewPage, ViewState};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewReport<'a> {
    sort_field: &'static str,
    sort_direction: &'static str,
    search: &'a str,
    status: String,
    category: String,
    shown: usize,
    total: usize,
    rows: &'a [&'a Product],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailReport<'a> {
    #[serde(flatten)]
    product: &'a Product,
    status_label: &'static str,
    score_band: ScoreBand,
    score_label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport<'a> {
    overview: &'a PortfolioOverview,
    category_count: usize,
    total_issues: usize,
    summary: &'a AggregateSummary,
}

pub fn view_to_json(page: &ViewPage<'_>, state: &ViewState) -> serde_json::Result<String> {
    let status = match state.status {
        StatusFilter::All => ALL.to_string(),
        StatusFilter::Only(s) => s.as_str().to_string(),
    };
    let category = match &state.category {
        CategoryFilter::All => ALL.to_string(),
        CategoryFilter::Only(c) => c.clone(),
    };

    serde_json::to_string_pretty(&ViewReport {
        sort_field: state.sort_field.name(),
        sort_direction: state.sort_direction.as_str(),
        search: &state.search,
        status,
        category,
        shown: page.shown,
        total: page.total,
        rows: &page.rows,
    })
}

pub fn product_to_json(product: &Product) -> serde_json::Result<String> {
    let status = product.status();
    let band = product.score_band();
    serde_json::to_string_pretty(&DetailReport {
        product,
        status_label: status.label(),
        score_band: band,
        score_label: band.label(),
    })
}

pub fn summary_to_json(
    summary: &AggregateSummary,
    overview: &PortfolioOverview,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SummaryReport {
        overview,
        category_count: summary.category_count(),
        total_issues: summary.total_issues(),
        summary,
    })
}
