use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle label of a document variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantLabel {
    /// Working copy being edited
    Draft,
    /// Saved content not yet public
    Unpublished,
    /// Content as last published
    Published,
}

impl VariantLabel {
    /// Whether this variant carries the shared `state-summary` property
    pub fn carries_summary(&self) -> bool {
        matches!(self, Self::Unpublished | Self::Published)
    }
}

impl fmt::Display for VariantLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Unpublished => write!(f, "unpublished"),
            Self::Published => write!(f, "published"),
        }
    }
}

impl std::str::FromStr for VariantLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "unpublished" => Ok(Self::Unpublished),
            "published" => Ok(Self::Published),
            _ => Err(format!("Invalid variant label: {s}")),
        }
    }
}

/// Value of the `state-summary` property stored on the unpublished/published variants
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StateSummary {
    /// Never published
    New,
    /// Live, with unpublished modifications
    Changed,
    /// Live and identical to the unpublished variant
    Live,
    /// Anything the backend wrote that is not one of the above
    Other(String),
}

impl StateSummary {
    pub fn parse(value: &str) -> Self {
        match value {
            "new" => Self::New,
            "changed" => Self::Changed,
            "live" => Self::Live,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Changed | Self::Live)
    }

    pub fn has_unpublished_changes(&self) -> bool {
        matches!(self, Self::Changed)
    }
}

impl From<String> for StateSummary {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<StateSummary> for String {
    fn from(summary: StateSummary) -> Self {
        summary.to_string()
    }
}

impl fmt::Display for StateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Changed => write!(f, "changed"),
            Self::Live => write!(f, "live"),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// One lifecycle copy of a document's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub label: VariantLabel,
    /// Draft holds changes not yet copied to the unpublished variant
    #[serde(default)]
    pub retainable: bool,
    #[serde(default)]
    pub state_summary: Option<StateSummary>,
}

impl Variant {
    pub fn new(label: VariantLabel) -> Self {
        Self {
            label,
            retainable: false,
            state_summary: None,
        }
    }

    pub fn draft(retainable: bool) -> Self {
        Self {
            retainable,
            ..Self::new(VariantLabel::Draft)
        }
    }

    pub fn unpublished(summary: &str) -> Self {
        Self::new(VariantLabel::Unpublished).with_summary(summary)
    }

    pub fn published(summary: &str) -> Self {
        Self::new(VariantLabel::Published).with_summary(summary)
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.state_summary = Some(StateSummary::parse(summary));
        self
    }
}

/// Snapshot of a handle's direct variant children
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSet {
    pub variants: Vec<Variant>,
    /// Decided once when the snapshot is read; a branch-capable handle resolves
    /// live/modified status through a branch view instead of `state-summary`.
    #[serde(default)]
    pub branch_capable: bool,
}

impl VariantSet {
    pub fn new(variants: Vec<Variant>) -> Self {
        Self {
            variants,
            branch_capable: false,
        }
    }

    pub fn branch_capable(mut self, capable: bool) -> Self {
        self.branch_capable = capable;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
