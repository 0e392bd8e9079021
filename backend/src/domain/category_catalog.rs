//! Category lookup over a snapshot of the category store.

use std::collections::BTreeMap;

use thiserror::Error;

use super::{Category, CategoryId};

/// Raised when a category identifier has no matching category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("category {id} not found")]
pub struct CategoryNotFound {
    /// Identifier that failed to resolve.
    pub id: CategoryId,
}

/// Resolves category identifiers to display names.
///
/// Built from one repository read; lookups never fall back to a default
/// category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: BTreeMap<CategoryId, Category>,
}

impl CategoryCatalog {
    /// Index a category snapshot by identifier.
    ///
    /// Later duplicates replace earlier ones; the store guarantees unique
    /// identifiers so this only matters for malformed fixtures.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .map(|category| (category.id(), category))
                .collect(),
        }
    }

    /// Mapping from identifier to display name.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Category, CategoryCatalog, CategoryId};
    ///
    /// let catalog = CategoryCatalog::new([Category::new(CategoryId::new(1), "Science")]);
    /// let names = catalog.all_categories();
    /// assert_eq!(names.get(&CategoryId::new(1)).map(String::as_str), Some("Science"));
    /// ```
    pub fn all_categories(&self) -> BTreeMap<CategoryId, String> {
        self.categories
            .iter()
            .map(|(id, category)| (*id, category.kind().to_owned()))
            .collect()
    }

    /// Look up a category, failing when it does not exist.
    pub fn resolve(&self, id: CategoryId) -> Result<&Category, CategoryNotFound> {
        self.categories.get(&id).ok_or(CategoryNotFound { id })
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for category resolution.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> CategoryCatalog {
        CategoryCatalog::new([
            Category::new(CategoryId::new(1), "Science"),
            Category::new(CategoryId::new(2), "Art"),
            Category::new(CategoryId::new(4), "History"),
        ])
    }

    #[rstest]
    fn resolve_returns_existing_category(catalog: CategoryCatalog) {
        let category = catalog.resolve(CategoryId::new(4)).expect("history exists");
        assert_eq!(category.kind(), "History");
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(2000)]
    fn resolve_reports_missing_category(catalog: CategoryCatalog, #[case] raw: u64) {
        let id = CategoryId::new(raw);
        assert_eq!(catalog.resolve(id), Err(CategoryNotFound { id }));
    }

    #[rstest]
    fn all_categories_is_keyed_by_id(catalog: CategoryCatalog) {
        let names = catalog.all_categories();
        assert_eq!(names.len(), 3);
        assert_eq!(names.get(&CategoryId::new(2)).map(String::as_str), Some("Art"));
    }

    #[rstest]
    fn all_categories_serialises_as_object(catalog: CategoryCatalog) {
        let value = serde_json::to_value(catalog.all_categories()).expect("serialise map");
        assert_eq!(
            value,
            serde_json::json!({"1": "Science", "2": "Art", "4": "History"})
        );
    }
}
