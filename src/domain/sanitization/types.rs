use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::shared::error::{AppError, AppResult};

/// Scalar cleaning operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarFilter {
    Text,
    Email,
    Url,
    Integer,
    Float,
}

/// Whether a filter expects a single value or a sequence of values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterShape {
    Scalar,
    Sequence,
}

/// Resolved behaviour of a filter type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDescriptor {
    pub filter: ScalarFilter,
    pub shape: FilterShape,
}

/// Sanitization type tag, e.g. `string` or `int[]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterKind {
    String,
    StringArray,
    Email,
    Int,
    IntArray,
    Float,
    FloatArray,
    Url,
}

/// Tag table: name, kind, descriptor
const FILTERS: [(&str, FilterKind, FilterDescriptor); 8] = [
    ("string", FilterKind::String, scalar(ScalarFilter::Text)),
    ("string[]", FilterKind::StringArray, sequence(ScalarFilter::Text)),
    ("email", FilterKind::Email, scalar(ScalarFilter::Email)),
    ("int", FilterKind::Int, scalar(ScalarFilter::Integer)),
    ("int[]", FilterKind::IntArray, sequence(ScalarFilter::Integer)),
    ("float", FilterKind::Float, scalar(ScalarFilter::Float)),
    ("float[]", FilterKind::FloatArray, sequence(ScalarFilter::Float)),
    ("url", FilterKind::Url, scalar(ScalarFilter::Url)),
];

const fn scalar(filter: ScalarFilter) -> FilterDescriptor {
    FilterDescriptor { filter, shape: FilterShape::Scalar }
}

const fn sequence(filter: ScalarFilter) -> FilterDescriptor {
    FilterDescriptor { filter, shape: FilterShape::Sequence }
}

impl FilterKind {
    pub fn as_str(self) -> &'static str {
        FILTERS
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("string")
    }

    pub fn descriptor(self) -> FilterDescriptor {
        FILTERS
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .map(|(_, _, descriptor)| *descriptor)
            .unwrap_or(scalar(ScalarFilter::Text))
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        FILTERS
            .iter()
            .find(|(name, _, _)| *name == tag)
            .map(|(_, kind, _)| *kind)
            .ok_or_else(|| tag.to_string())
    }
}

impl TryFrom<String> for FilterKind {
    type Error = String;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse().map_err(|tag| format!("unknown filter '{}'", tag))
    }
}

impl From<FilterKind> for String {
    fn from(kind: FilterKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Filter type per field. An empty spec means "apply the default filter
/// to every input".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SanitizationSpec(IndexMap<String, FilterKind>);

impl SanitizationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>, kind: FilterKind) -> Self {
        self.0.insert(field.into(), kind);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, kind: FilterKind) {
        self.0.insert(field.into(), kind);
    }

    /// Build a spec from `field -> tag` pairs, rejecting unknown tags
    pub fn from_tags<I, K, V>(tags: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut spec = Self::new();
        for (field, tag) in tags {
            let field = field.into();
            let kind: FilterKind = tag.as_ref().parse().map_err(|filter| AppError::UnknownFilter {
                field: field.clone(),
                filter,
            })?;
            spec.insert(field, kind);
        }
        Ok(spec)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FilterKind)> {
        self.0.iter().map(|(field, kind)| (field.as_str(), *kind))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
