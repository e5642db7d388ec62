//! Product record types.
//!
//! Records arrive from the presentation layer (or a JSON snapshot) already
//! shaped. Nothing here validates or mutates them; optional fields that are
//! missing in the input default to empty values.

use serde::{Deserialize, Serialize};

/// One product entry in the catalog.
///
/// Field names serialize in camelCase to match the snapshot format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, stable across the session.
    pub id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    /// Raw status as supplied. Use [`Product::status`] for the display value.
    #[serde(default)]
    pub status: String,
    /// Transparency score. Upstream data clamps this to 0..=100.
    #[serde(default)]
    pub score: u32,
    /// Display-formatted date. Opaque to the engines.
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Product {
    /// Create a record with only the identifying fields set.
    pub fn new(id: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            product_name: product_name.into(),
            category: String::new(),
            status: String::new(),
            score: 0,
            last_updated: String::new(),
            explanation: String::new(),
            suggestions: Vec::new(),
            flags: Vec::new(),
            ingredients: Vec::new(),
            certifications: Vec::new(),
        }
    }

    /// Display status. Unrecognized raw values map to [`Status::Draft`].
    pub fn status(&self) -> Status {
        Status::from_raw(&self.status)
    }

    /// Score band used for coloring and the detail label.
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// Whether the record carries any issue flags.
    pub fn needs_attention(&self) -> bool {
        !self.flags.is_empty()
    }

    /// Number of ingredients with a verified source.
    pub fn verified_ingredient_count(&self) -> usize {
        self.ingredients.iter().filter(|i| i.verified).count()
    }
}

/// An ingredient and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub verified: bool,
}

/// Publication status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Pending,
    Draft,
}

impl Status {
    /// Total mapping from a raw status string. Anything unrecognized is a draft.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "active" => Status::Active,
            "pending" => Status::Pending,
            _ => Status::Draft,
        }
    }

    /// Strict parse, used for filter values where an unknown status is a bug.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(Status::Active),
            "pending" => Some(Status::Pending),
            "draft" => Some(Status::Draft),
            _ => None,
        }
    }

    /// Raw wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Pending => "pending",
            Status::Draft => "draft",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Pending => "Pending",
            Status::Draft => "Draft",
        }
    }

    pub fn all() -> &'static [Status] {
        &[Status::Active, Status::Pending, Status::Draft]
    }
}

/// Coarse bucket for a transparency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 80 and above
    Excellent,
    /// 60 to 79
    Good,
    /// Below 60
    NeedsImprovement,
}

impl ScoreBand {
    pub const EXCELLENT_MIN: u32 = 80;
    pub const GOOD_MIN: u32 = 60;

    pub fn from_score(score: u32) -> Self {
        if score >= Self::EXCELLENT_MIN {
            ScoreBand::Excellent
        } else if score >= Self::GOOD_MIN {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
        }
    }
}
