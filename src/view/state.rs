//! View state: the sort, filter and search configuration chosen by a user.
//!
//! The presentation layer owns this state and hands it to
//! [`compute_view`](super::compute_view) on every recomputation. Raw strings
//! from controls are resolved through [`RawViewState::resolve`], which is the
//! only place an `InvalidViewState` can be raised.

use crate::catalog::{distinct_categories, Product, Status, ALL};
use crate::errors::ViewStateError;
use serde::{Deserialize, Serialize};

/// Sortable record attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    ProductName,
    Category,
    Score,
    Status,
    LastUpdated,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Id,
            SortField::ProductName,
            SortField::Category,
            SortField::Score,
            SortField::Status,
            SortField::LastUpdated,
        ]
    }

    /// Canonical field names, as they appear in the record format.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|f| f.name()).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::ProductName => "productName",
            SortField::Category => "category",
            SortField::Score => "score",
            SortField::Status => "status",
            SortField::LastUpdated => "lastUpdated",
        }
    }

    /// Column header text.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::ProductName => "Product Name",
            SortField::Category => "Category",
            SortField::Score => "Transparency Score",
            SortField::Status => "Status",
            SortField::LastUpdated => "Last Updated",
        }
    }

    /// Parse a field name. Accepts the camelCase record name or snake_case.
    pub fn parse(raw: &str) -> Result<Self, ViewStateError> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.name() == raw || f.snake_name() == raw)
            .ok_or_else(|| ViewStateError::UnknownSortField(raw.to_string()))
    }

    /// Numeric fields compare arithmetically; the rest are collated text.
    pub fn is_numeric(&self) -> bool {
        matches!(self, SortField::Score)
    }

    fn snake_name(&self) -> &'static str {
        match self {
            SortField::ProductName => "product_name",
            SortField::LastUpdated => "last_updated",
            other => other.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Result<Self, ViewStateError> {
        match raw {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(ViewStateError::UnknownSortDirection(raw.to_string())),
        }
    }

    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Status filter: a status value or no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Result<Self, ViewStateError> {
        if raw == ALL {
            return Ok(StatusFilter::All);
        }
        Status::parse(raw)
            .map(StatusFilter::Only)
            .ok_or_else(|| ViewStateError::UnknownStatusFilter(raw.to_string()))
    }

    /// Exact match against the raw status string.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => product.status == status.as_str(),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            StatusFilter::All => "All statuses".to_string(),
            StatusFilter::Only(status) => format!("Status: {}", status.label()),
        }
    }
}

/// Category filter: a category value or no filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Exact match against the category.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            CategoryFilter::All => "All categories".to_string(),
            CategoryFilter::Only(category) => format!("Category: {category}"),
        }
    }
}

/// Resolved view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// Free-text search term; empty matches everything.
    pub search: String,
    pub status: StatusFilter,
    pub category: CategoryFilter,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_field: SortField::Score,
            sort_direction: SortDirection::Desc,
            search: String::new(),
            status: StatusFilter::All,
            category: CategoryFilter::All,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Column-header click behavior.
    ///
    /// Same field flips the direction. A new field starts descending; that is
    /// a UX default (highest scores first), not something ordering requires.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flip();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Desc;
        }
    }

    /// Whether any filter or search narrows the rows.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
            || self.status != StatusFilter::All
            || self.category != CategoryFilter::All
    }
}

/// View state as raw strings from controls, CLI flags or config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawViewState {
    pub sort_field: String,
    pub sort_direction: String,
    pub search: String,
    pub status: String,
    pub category: String,
}

impl Default for RawViewState {
    fn default() -> Self {
        Self {
            sort_field: SortField::Score.name().to_string(),
            sort_direction: SortDirection::Desc.as_str().to_string(),
            search: String::new(),
            status: ALL.to_string(),
            category: ALL.to_string(),
        }
    }
}

impl RawViewState {
    /// Validate every value against the record set.
    ///
    /// The category filter must be `"all"` or a category present in
    /// `records`; anything else could only come from a caller bug.
    pub fn resolve(&self, records: &[Product]) -> Result<ViewState, ViewStateError> {
        let category = if self.category == ALL {
            CategoryFilter::All
        } else if distinct_categories(records).contains(&self.category.as_str()) {
            CategoryFilter::Only(self.category.clone())
        } else {
            return Err(ViewStateError::UnknownCategoryFilter(self.category.clone()));
        };

        Ok(ViewState {
            sort_field: SortField::parse(&self.sort_field)?,
            sort_direction: SortDirection::parse(&self.sort_direction)?,
            search: self.search.clone(),
            status: StatusFilter::parse(&self.status)?,
            category,
        })
    }
}
