use crate::analytics::{AggregateSummary, PortfolioOverview};
use crate::catalog::{Product, ScoreBand};
use crate::formatting::OutputFormatter;
use crate::view::{SortDirection, SortField, ViewPage, ViewState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 16;
const SCORE_WIDTH: usize = 5;
const STATUS_WIDTH: usize = 8;
const UPDATED_WIDTH: usize = 12;

/// Pad or truncate to a display width, counting wide characters correctly.
fn fit(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    if current <= width {
        return format!("{}{}", text, " ".repeat(width - current));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn sort_marker(state: &ViewState, field: SortField) -> &'static str {
    match (state.sort_field == field, state.sort_direction) {
        (false, _) => "",
        (true, SortDirection::Asc) => " ↑",
        (true, SortDirection::Desc) => " ↓",
    }
}

fn header_cell(state: &ViewState, field: SortField, label: &str, width: usize) -> String {
    fit(&format!("{}{}", label, sort_marker(state, field)), width)
}

/// Render the product table with its "Showing N of M" line.
pub fn render_view(page: &ViewPage<'_>, state: &ViewState, fmt: &dyn OutputFormatter) -> String {
    let mut lines = vec![fmt.header(&format!(
        "Showing {} of {} products",
        page.shown, page.total
    ))];
    if state.is_filtered() {
        let mut parts = Vec::new();
        if !state.search.is_empty() {
            parts.push(format!("Search: \"{}\"", state.search));
        }
        parts.push(state.status.display_name());
        parts.push(state.category.display_name());
        lines.push(fmt.dim(&parts.join(" | ")));
    }
    lines.push(String::new());

    if page.rows.is_empty() {
        lines.push(fmt.dim("No products match the current filters."));
        return finish(lines);
    }

    let header = [
        header_cell(state, SortField::ProductName, "Product Name", NAME_WIDTH),
        header_cell(state, SortField::Category, "Category", CATEGORY_WIDTH),
        header_cell(state, SortField::Score, "Score", SCORE_WIDTH + 2),
        header_cell(state, SortField::Status, "Status", STATUS_WIDTH),
        header_cell(state, SortField::LastUpdated, "Updated", UPDATED_WIDTH),
        format!("ID{}", sort_marker(state, SortField::Id)),
    ]
    .join("  ");
    lines.push(fmt.bold(header.trim_end()));

    lines.extend(page.rows.iter().map(|product| {
        let status = product.status();
        let score = fit(&product.score.to_string(), SCORE_WIDTH + 2);
        [
            fit(&product.product_name, NAME_WIDTH),
            fit(&product.category, CATEGORY_WIDTH),
            fmt.band(&score, product.score_band()),
            fmt.status(&fit(status.label(), STATUS_WIDTH), status),
            fit(&product.last_updated, UPDATED_WIDTH),
            fmt.dim(&product.id),
        ]
        .join("  ")
        .trim_end()
        .to_string()
    }));

    if page.is_truncated() {
        lines.push(fmt.dim(&format!(
            "... {} more",
            page.shown - page.rows.len()
        )));
    }

    finish(lines)
}

/// Render the drill-in view of one product.
pub fn render_product_detail(product: &Product, fmt: &dyn OutputFormatter) -> String {
    let band = product.score_band();
    let status = product.status();

    let mut lines = vec![
        fmt.header(&product.product_name),
        format!(
            "{} · {} · updated {}",
            product.category,
            fmt.status(status.label(), status),
            product.last_updated
        ),
        String::new(),
        format!(
            "Transparency score: {}  ({} Transparency)",
            fmt.band(&format!("{}/100", product.score), band),
            band.label()
        ),
    ];
    if !product.explanation.is_empty() {
        lines.push(product.explanation.clone());
    }

    if !product.flags.is_empty() {
        lines.push(String::new());
        lines.push(fmt.bold("Flags"));
        lines.extend(
            product
                .flags
                .iter()
                .map(|flag| format!("  {} {}", fmt.warning("!"), flag)),
        );
    }

    if !product.suggestions.is_empty() {
        lines.push(String::new());
        lines.push(fmt.bold("Suggestions"));
        lines.extend(
            product
                .suggestions
                .iter()
                .enumerate()
                .map(|(i, suggestion)| format!("  {}. {}", i + 1, suggestion)),
        );
    }

    lines.push(String::new());
    lines.push(fmt.bold(&format!(
        "Ingredients ({} of {} verified)",
        product.verified_ingredient_count(),
        product.ingredients.len()
    )));
    if product.ingredients.is_empty() {
        lines.push(format!("  {}", fmt.dim("none listed")));
    }
    lines.extend(product.ingredients.iter().map(|ingredient| {
        let mark = if ingredient.verified { "✓" } else { "?" };
        format!(
            "  {} {} {}",
            mark,
            ingredient.name,
            fmt.dim(&format!("({})", ingredient.source))
        )
    }));

    if !product.certifications.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            fmt.bold("Certifications:"),
            product.certifications.join(", ")
        ));
    }

    finish(lines)
}

/// Render the portfolio overview and aggregate summary.
pub fn render_summary(
    summary: &AggregateSummary,
    overview: &PortfolioOverview,
    fmt: &dyn OutputFormatter,
) -> String {
    let mut lines = vec![
        fmt.header("Portfolio Overview"),
        format!("  Total products:     {}", overview.total_products),
        format!("  Average score:      {}", overview.average_score),
        format!("  High transparency:  {}", overview.high_transparency),
        format!("  Need attention:     {}", overview.needs_attention),
        format!("  Categories:         {}", summary.category_count()),
        format!("  Total issues:       {}", summary.total_issues()),
        format!("  Certifications:     {}", summary.certification_count),
    ];

    if summary.is_empty() {
        lines.push(String::new());
        lines.push(fmt.dim("No products in catalog."));
        return finish(lines);
    }

    lines.push(String::new());
    lines.push(fmt.header("Category Performance"));
    lines.extend(summary.category_means.iter().map(|category| {
        let mean = category.rounded_mean();
        format!(
            "  {} {} {}",
            fit(&category.category, CATEGORY_WIDTH + 8),
            fmt.band(&format!("{:>3}", mean), ScoreBand::from_score(mean)),
            fmt.dim(&format!("({} products)", category.count))
        )
    }));

    if !summary.top_flags.is_empty() {
        lines.push(String::new());
        lines.push(fmt.header("Top Issues"));
        lines.extend(summary.top_flags.iter().map(|flag| {
            format!(
                "  {} {}",
                fit(&flag.flag, CATEGORY_WIDTH + 8),
                fmt.warning(&format!("{:>3}", flag.count))
            )
        }));
    }

    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render the category filter options, one per line.
pub fn render_category_options(options: &[&str]) -> String {
    options.join("\n")
}
