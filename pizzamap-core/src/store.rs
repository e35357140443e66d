//! View state shared by all rendering surfaces.

use crate::entities::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// The loaded collections together with the current
/// selection and filter.
#[derive(Debug, Default)]
pub struct ViewStore {
    places: Vec<Place>,
    categories: Vec<Category>,
    selected: Option<Id>,
    filter: Option<String>,
    status: LoadStatus,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn set_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Replace both collections at once and mark the store as ready.
    ///
    /// A selected place that is no longer part of the
    /// collection is deselected.
    pub fn set_collections(&mut self, places: Vec<Place>, categories: Vec<Category>) {
        self.places = places;
        self.categories = categories;
        if let Some(id) = &self.selected {
            if !self.places.iter().any(|p| p.id == *id) {
                self.selected = None;
            }
        }
        self.status = LoadStatus::Ready;
    }

    /// Keep whatever was loaded before and only record the failure.
    pub fn set_failed(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed(message.into());
    }

    pub fn select_place(&mut self, id: Option<Id>) {
        self.selected = id;
    }

    pub fn selected_place(&self) -> Option<&Place> {
        let id = self.selected.as_ref()?;
        self.places.iter().find(|p| p.id == *id)
    }

    /// `None` shows all places.
    pub fn set_filter(&mut self, slug: Option<String>) {
        self.filter = slug.filter(|s| !s.is_empty());
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// The category of the filter, if the filter matches any.
    pub fn active_filter(&self) -> Option<&Category> {
        Category::find_by_slug(&self.categories, self.filter.as_deref()?)
    }

    /// Places matching the filter in their original order.
    ///
    /// An unknown slug filters nothing.
    pub fn filtered_places(&self) -> Vec<&Place> {
        match self.active_filter() {
            None => self.places.iter().collect(),
            Some(category) => self
                .places
                .iter()
                .filter(|p| p.primary_category_id() == Some(&category.id))
                .collect(),
        }
    }

    pub fn style_for<'a>(&self, place: &'a Place) -> Option<&'a Category> {
        place.primary_category()
    }

    /// Number of places per category in category order,
    /// omitting categories without any place.
    pub fn category_counts(&self) -> Vec<(&Category, usize)> {
        self.categories
            .iter()
            .map(|c| {
                let count = self
                    .places
                    .iter()
                    .filter(|p| p.primary_category_id() == Some(&c.id))
                    .count();
                (c, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn total(&self) -> usize {
        self.places.len()
    }

    pub fn visible_count(&self) -> usize {
        self.filtered_places().len()
    }
}
