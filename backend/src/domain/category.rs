//! Question categories and the quiz category filter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A category such as "Science" or "History". Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    #[serde(rename = "type")]
    kind: String,
}

impl Category {
    /// Build a category from its identifier and display name.
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }

    /// Category identifier.
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display name, serialised as `type` on the wire.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// Category restriction for a quiz draw.
///
/// `Any` is an explicit variant so "all categories" can never be confused
/// with a category whose identifier happens to be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Draw from every category.
    #[default]
    Any,
    /// Draw only from the given category.
    Only(CategoryId),
}

impl CategoryFilter {
    /// Whether a question in `category` passes the filter.
    #[must_use]
    pub fn admits(self, category: CategoryId) -> bool {
        match self {
            Self::Any => true,
            Self::Only(id) => id == category,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for category serialisation and filtering.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn category_serialises_kind_as_type() {
        let value = serde_json::to_value(Category::new(CategoryId::new(1), "Science"))
            .expect("serialise category");
        assert_eq!(value, json!({"id": 1, "type": "Science"}));
    }

    #[rstest]
    #[case(CategoryFilter::Any, 3, true)]
    #[case(CategoryFilter::Only(CategoryId::new(3)), 3, true)]
    #[case(CategoryFilter::Only(CategoryId::new(3)), 4, false)]
    fn filter_admits_matching_categories(
        #[case] filter: CategoryFilter,
        #[case] category: u64,
        #[case] expected: bool,
    ) {
        assert_eq!(filter.admits(CategoryId::new(category)), expected);
    }
}
