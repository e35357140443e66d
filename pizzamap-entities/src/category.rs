use crate::id::Id;

/// A pizza style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Id,
    pub name: String,
    /// Unique, stable key used for lookups and filtering.
    pub slug: String,
    pub description: Option<String>,
}

/// Association between a place and a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    pub id: Id,
    pub place_id: Option<Id>,
    pub category_id: Id,
    pub is_primary: bool,
    /// The joined category, if the backend embedded it.
    pub category: Option<Category>,
}

impl Category {
    pub fn find_by_slug<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.slug == slug)
    }
}
