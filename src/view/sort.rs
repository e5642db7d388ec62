//! Stage 2: Sorting - stable ordering by the selected field.

use super::collate::locale_cmp;
use super::state::{SortDirection, SortField};
use crate::catalog::Product;
use std::cmp::Ordering;

/// Sorts rows by field and direction.
///
/// `sort_by` is stable, and descending reverses the comparator rather than
/// the output, so equal keys keep their input order in both directions.
pub fn sort_rows(rows: &mut [&Product], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = compare_by_field(a, b, field);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Ascending comparison of two records on one field.
pub fn compare_by_field(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Score => a.score.cmp(&b.score),
        SortField::Id => locale_cmp(&a.id, &b.id),
        SortField::ProductName => locale_cmp(&a.product_name, &b.product_name),
        SortField::Category => locale_cmp(&a.category, &b.category),
        SortField::Status => locale_cmp(&a.status, &b.status),
        SortField::LastUpdated => locale_cmp(&a.last_updated, &b.last_updated),
    }
}
