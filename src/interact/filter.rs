//! Category filtering for gallery and portfolio grids.

use crate::section::schema::{GalleryItem, PortfolioProject};

/// The synthetic chip that shows every item.
pub const ALL_CATEGORY: &str = "All";

/// Anything a category filter can sift.
pub trait Categorized {
    /// The category this item belongs to, if any.
    fn category(&self) -> Option<&str>;
}

impl Categorized for GalleryItem {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Categorized for PortfolioProject {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Selected-chip state for one filterable grid.
///
/// The chip row is the "All" chip followed by the configured categories
/// in their given order. The list is rendered as supplied; deduplication
/// is the config author's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    categories: Vec<String>,
    selected: String,
}

impl CategoryFilter {
    /// Creates a filter with "All" selected.
    #[must_use]
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            selected: ALL_CATEGORY.to_string(),
        }
    }

    /// The chip labels, "All" first.
    #[must_use]
    pub fn chips(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORY)
            .chain(self.categories.iter().map(String::as_str))
            .collect()
    }

    /// The selected chip label.
    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Returns `true` while "All" is selected.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.selected == ALL_CATEGORY
    }

    /// Selects a chip. Labels that are not in the chip row are ignored.
    pub fn select(&mut self, category: &str) {
        if category == ALL_CATEGORY || self.categories.iter().any(|c| c == category) {
            self.selected = category.to_string();
        }
    }

    /// Returns `true` when the item shows under the selected chip.
    pub fn shows<T: Categorized>(&self, item: &T) -> bool {
        self.is_all() || item.category() == Some(self.selected.as_str())
    }

    /// The items visible under the selected chip, in their given order.
    pub fn visible<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.shows(*item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged(Option<&'static str>);

    impl Categorized for Tagged {
        fn category(&self) -> Option<&str> {
            self.0
        }
    }

    fn filter(categories: &[&str]) -> CategoryFilter {
        CategoryFilter::new(categories.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn all_is_selected_initially() {
        let filter = filter(&["Web", "Print"]);
        assert!(filter.is_all());
        assert_eq!(filter.selected(), "All");
    }

    #[test]
    fn chips_start_with_all_and_keep_given_order() {
        let filter = filter(&["Web", "Print", "Brand"]);
        assert_eq!(filter.chips(), ["All", "Web", "Print", "Brand"]);
    }

    #[test]
    fn duplicate_categories_render_as_given() {
        let filter = filter(&["Web", "Web"]);
        assert_eq!(filter.chips(), ["All", "Web", "Web"]);
    }

    #[test]
    fn all_shows_everything() {
        let filter = filter(&["Web"]);
        let items = [Tagged(Some("Web")), Tagged(Some("Print")), Tagged(None)];
        assert_eq!(filter.visible(&items).len(), 3);
    }

    #[test]
    fn selecting_a_category_filters_by_equality() {
        let mut filter = filter(&["Web", "Print"]);
        filter.select("Web");

        let items = [Tagged(Some("Web")), Tagged(Some("Print")), Tagged(None)];
        let visible = filter.visible(&items);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category(), Some("Web"));
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let mut filter = filter(&["Web"]);
        filter.select("Cinema");
        assert!(filter.is_all());
    }

    #[test]
    fn selecting_all_again_clears_the_filter() {
        let mut filter = filter(&["Web"]);
        filter.select("Web");
        assert!(!filter.is_all());
        filter.select("All");
        assert!(filter.is_all());
    }

    #[test]
    fn uncategorized_items_only_show_under_all() {
        let mut filter = filter(&["Web"]);
        filter.select("Web");
        assert!(!filter.shows(&Tagged(None)));
        filter.select("All");
        assert!(filter.shows(&Tagged(None)));
    }
}
