//! Tests for the table view pipeline.

use super::*;
use crate::catalog::Status;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ========================================================================
// TEST HELPERS
// ========================================================================

fn create_product(id: &str, name: &str, category: &str, score: u32) -> Product {
    let mut p = Product::new(id, name);
    p.category = category.into();
    p.score = score;
    p.status = "active".into();
    p
}

fn scores(rows: &[&Product]) -> Vec<u32> {
    rows.iter().map(|p| p.score).collect()
}

fn names<'a>(rows: &[&'a Product]) -> Vec<&'a str> {
    rows.iter().map(|p| p.product_name.as_str()).collect()
}

fn sample_records() -> Vec<Product> {
    vec![
        create_product("1", "Granola", "A", 90),
        create_product("2", "Trail Mix", "A", 50),
        create_product("3", "Cold Brew", "B", 70),
    ]
}

// ========================================================================
// SCENARIOS
// ========================================================================

#[test]
fn test_default_state_sorts_by_score_descending() {
    let records = sample_records();

    let rows = compute_view(&records, &ViewState::default());

    assert_eq!(scores(&rows), vec![90, 70, 50]);
}

#[test]
fn test_search_matches_substring_case_insensitively() {
    let records = vec![
        create_product("1", "Apple Bar", "Snacks", 60),
        create_product("2", "Banana Chip", "Snacks", 70),
        create_product("3", "Avocado Oil", "Pantry", 80),
    ];
    let state = ViewState::default().with_sort(SortField::Id, SortDirection::Asc);

    let rows = compute_view(&records, &state.clone().with_search("a"));
    // "banana chip" contains "a" too; substring matching includes it.
    assert_eq!(names(&rows), vec!["Apple Bar", "Banana Chip", "Avocado Oil"]);

    let rows = compute_view(&records, &state.clone().with_search("AV"));
    assert_eq!(names(&rows), vec!["Avocado Oil"]);

    let rows = compute_view(&records, &state.with_search("ap"));
    assert_eq!(names(&rows), vec!["Apple Bar"]);
}

#[test]
fn test_empty_input_yields_empty_output() {
    let rows = compute_view(&[], &ViewState::default().with_search("anything"));
    assert!(rows.is_empty());
}

#[test]
fn test_status_and_category_filters() {
    let mut records = sample_records();
    records[0].status = "pending".into();
    let state = ViewState::default()
        .with_status(StatusFilter::Only(Status::Active))
        .with_category(CategoryFilter::Only("A".into()));

    let rows = compute_view(&records, &state);

    assert_eq!(names(&rows), vec!["Trail Mix"]);
}

#[test]
fn test_header_clicks_reorder_rows() {
    let records = sample_records();
    let mut state = ViewState::default();

    state.toggle_sort(SortField::ProductName);
    assert_eq!(
        names(&compute_view(&records, &state)),
        vec!["Trail Mix", "Granola", "Cold Brew"]
    );

    state.toggle_sort(SortField::ProductName);
    assert_eq!(
        names(&compute_view(&records, &state)),
        vec!["Cold Brew", "Granola", "Trail Mix"]
    );
}

#[test]
fn test_compute_page_counts_and_limit() {
    let records = sample_records();
    let state = ViewState::default().with_category(CategoryFilter::Only("A".into()));

    let page = compute_page(&records, &state, Some(1));

    assert_eq!(page.total, 3);
    assert_eq!(page.shown, 2);
    assert_eq!(scores(&page.rows), vec![90]);
    assert!(page.is_truncated());
    assert_eq!(page.stats.filtered_by_category, 1);
}

#[test]
fn test_compute_page_without_limit_matches_compute_view() {
    let records = sample_records();
    let state = ViewState::default();

    let page = compute_page(&records, &state, None);

    assert_eq!(page.rows, compute_view(&records, &state));
    assert!(!page.is_truncated());
}

#[test]
fn test_resolved_raw_state_drives_view() {
    let records = sample_records();
    let raw = RawViewState {
        sort_field: "score".into(),
        sort_direction: "asc".into(),
        category: "A".into(),
        ..Default::default()
    };

    let state = raw.resolve(&records).unwrap();
    let rows = compute_view(&records, &state);

    assert_eq!(scores(&rows), vec![50, 90]);
}

// ========================================================================
// PROPERTIES
// ========================================================================

fn arb_product() -> impl Strategy<Value = (String, String, u32, String)> {
    (
        "[a-zA-Z ]{0,8}",
        prop::sample::select(vec!["Snacks", "Dairy", "Beverages"]),
        0u32..=100,
        prop::sample::select(vec!["active", "pending", "draft", "archived"]),
    )
        .prop_map(|(name, category, score, status)| {
            (name, category.to_string(), score, status.to_string())
        })
}

fn arb_records() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, category, score, status))| {
                let mut p = create_product(&i.to_string(), &name, &category, score);
                p.status = status;
                p
            })
            .collect()
    })
}

fn arb_state() -> impl Strategy<Value = ViewState> {
    (
        prop::sample::select(SortField::all().to_vec()),
        prop::bool::ANY,
        "[a-z]{0,2}",
        prop::option::of(prop::sample::select(Status::all().to_vec())),
        prop::option::of(prop::sample::select(vec!["Snacks", "Dairy"])),
    )
        .prop_map(|(field, asc, search, status, category)| ViewState {
            sort_field: field,
            sort_direction: if asc {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            },
            search,
            status: status.map_or(StatusFilter::All, StatusFilter::Only),
            category: category.map_or(CategoryFilter::All, |c| CategoryFilter::Only(c.into())),
        })
}

proptest! {
    /// Property: identical inputs give identical outputs.
    #[test]
    fn view_is_idempotent(records in arb_records(), state in arb_state()) {
        let first = compute_view(&records, &state);
        let second = compute_view(&records, &state);
        prop_assert_eq!(first, second);
    }

    /// Property: output rows are distinct input records.
    #[test]
    fn view_never_invents_or_duplicates(records in arb_records(), state in arb_state()) {
        let rows = compute_view(&records, &state);
        let mut seen = std::collections::HashSet::new();
        for row in &rows {
            prop_assert!(records.iter().any(|r| std::ptr::eq(r, *row)));
            prop_assert!(seen.insert(row.id.clone()), "duplicate row {}", row.id);
        }
        prop_assert!(rows.len() <= records.len());
    }

    /// Property: score ordering follows the direction.
    #[test]
    fn score_sort_is_monotonic(records in arb_records(), asc in prop::bool::ANY) {
        let direction = if asc { SortDirection::Asc } else { SortDirection::Desc };
        let state = ViewState::default().with_sort(SortField::Score, direction);
        let rows = compute_view(&records, &state);
        for pair in rows.windows(2) {
            if asc {
                prop_assert!(pair[0].score <= pair[1].score);
            } else {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }

    /// Property: equal keys keep their input order in either direction.
    #[test]
    fn sort_is_stable(records in arb_records(), state in arb_state()) {
        let rows = compute_view(&records, &state);
        let position = |p: &Product| records.iter().position(|r| std::ptr::eq(r, p));
        for pair in rows.windows(2) {
            if compare_by_field(pair[0], pair[1], state.sort_field).is_eq() {
                prop_assert!(position(pair[0]) < position(pair[1]));
            }
        }
    }

    /// Property: every row satisfies every active predicate.
    #[test]
    fn rows_satisfy_filters(records in arb_records(), state in arb_state()) {
        let search = SearchTerm::new(&state.search);
        for row in compute_view(&records, &state) {
            prop_assert!(search.matches(row));
            prop_assert!(state.status.matches(row));
            prop_assert!(state.category.matches(row));
        }
    }

    /// Property: a page is a prefix of the full view with consistent counts.
    #[test]
    fn page_is_prefix_of_view(
        records in arb_records(),
        state in arb_state(),
        limit in prop::option::of(0usize..10),
    ) {
        let rows = compute_view(&records, &state);
        let page = compute_page(&records, &state, limit);

        prop_assert_eq!(page.shown, rows.len());
        prop_assert_eq!(page.total, records.len());
        prop_assert_eq!(page.stats.total(), records.len() - rows.len());
        prop_assert_eq!(&page.rows[..], &rows[..page.rows.len()]);
        prop_assert_eq!(page.rows.len(), limit.map_or(rows.len(), |n| n.min(rows.len())));
    }
}
