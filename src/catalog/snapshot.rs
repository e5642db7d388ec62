//! Immutable catalog snapshot.
//!
//! A [`Catalog`] is the record set for one session. It is shared read-only
//! by the view and aggregation engines and replaced wholesale on reload,
//! never mutated in place.

use super::model::Product;
use crate::errors::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Sentinel used by filter controls to mean "no filter".
pub const ALL: &str = "all";

/// Read-only snapshot of product records.
///
/// Cloning is cheap: the records are behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Arc<[Product]>,
}

impl Catalog {
    /// Build a snapshot from records, rejecting duplicate ids.
    pub fn new(records: Vec<Product>) -> Result<Self> {
        if let Some(id) = first_duplicate_id(&records) {
            return Err(Error::DuplicateProductId { id: id.to_string() });
        }
        Ok(Self {
            records: records.into(),
        })
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Product> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a JSON snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let records: Vec<Product> =
            serde_json::from_str(&contents).map_err(|source| Error::Snapshot {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::new(records)?;
        info!(
            path = %path.display(),
            records = catalog.len(),
            "Loaded catalog snapshot"
        );
        Ok(catalog)
    }

    pub fn records(&self) -> &[Product] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record for the detail view.
    pub fn find(&self, id: &str) -> Option<&Product> {
        find_product(&self.records, id)
    }

    /// Filter dropdown entries: `"all"` then categories in first-seen order.
    pub fn category_options(&self) -> Vec<&str> {
        category_options(&self.records)
    }
}

/// Look up a record by id.
pub fn find_product<'a>(records: &'a [Product], id: &str) -> Option<&'a Product> {
    let found = records.iter().find(|p| p.id == id);
    if found.is_none() {
        debug!(id, "No product with this id");
    }
    found
}

/// Distinct categories in first-seen order.
pub fn distinct_categories(records: &[Product]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|p| p.category.as_str())
        .filter(|c| seen.insert(*c))
        .collect()
}

/// `"all"` followed by the distinct categories in first-seen order.
pub fn category_options(records: &[Product]) -> Vec<&str> {
    std::iter::once(ALL)
        .chain(distinct_categories(records))
        .collect()
}

fn first_duplicate_id(records: &[Product]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|p| p.id.as_str())
        .find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn product(id: &str, category: &str) -> Product {
        let mut p = Product::new(id, format!("Product {id}"));
        p.category = category.into();
        p
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![product("1", "A"), product("1", "B")]);
        match result {
            Err(Error::DuplicateProductId { id }) => assert_eq!(id, "1"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.category_options(), vec!["all"]);
        assert!(catalog.find("anything").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::new(vec![product("a", "X"), product("b", "Y")]).unwrap();
        assert_eq!(catalog.find("b").map(|p| p.category.as_str()), Some("Y"));
        assert!(catalog.find("c").is_none());
    }

    #[test]
    fn test_category_options_first_seen_order() {
        let records = vec![
            product("1", "Snacks"),
            product("2", "Beverages"),
            product("3", "Snacks"),
            product("4", "Dairy"),
        ];
        assert_eq!(
            category_options(&records),
            vec!["all", "Snacks", "Beverages", "Dairy"]
        );
    }

    #[test]
    fn test_clone_shares_records() {
        let catalog = Catalog::new(vec![product("1", "A")]).unwrap();
        let other = catalog.clone();
        assert!(std::ptr::eq(catalog.records(), other.records()));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"1","productName":"Tea","category":"Drinks","score":64}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].score, 64);
    }

    #[test]
    fn test_load_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Snapshot { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
