//! Menu category switching

/// Tracks which menu category region is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTabs {
    categories: Vec<String>,
    active: Option<String>,
}

impl CategoryTabs {
    /// Create the tab set with the first category active.
    pub fn new(categories: Vec<String>) -> Self {
        let active = categories.first().cloned();

        CategoryTabs { categories, active }
    }

    /// Show `category` and hide every other region.
    ///
    /// An unknown category hides all regions. Returns whether a region is
    /// now visible.
    pub fn show(&mut self, category: &str) -> bool {
        self.active = self
            .categories
            .iter()
            .find(|key| key.as_str() == category)
            .cloned();

        self.active.is_some()
    }

    /// Whether a category region is visible.
    pub fn is_visible(&self, category: &str) -> bool {
        self.active.as_deref() == Some(category)
    }

    /// The visible category, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Every category with its visibility, in tab order.
    pub fn visibility(&self) -> impl Iterator<Item = (&str, bool)> {
        self.categories
            .iter()
            .map(|key| (key.as_str(), self.is_visible(key)))
    }

    /// Category keys in tab order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> CategoryTabs {
        CategoryTabs::new(vec!["main-course".to_string(), "sides".to_string()])
    }

    #[test]
    fn first_category_is_shown_initially() {
        let tabs = tabs();

        assert_eq!(tabs.active(), Some("main-course"));
    }

    #[test]
    fn show_leaves_exactly_one_visible() {
        let mut tabs = tabs();

        assert!(tabs.show("sides"));

        let visible: Vec<&str> = tabs
            .visibility()
            .filter(|(_key, visible)| *visible)
            .map(|(key, _visible)| key)
            .collect();

        assert_eq!(visible, vec!["sides"]);
        assert!(!tabs.is_visible("main-course"));
    }

    #[test]
    fn show_unknown_category_hides_all() {
        let mut tabs = tabs();

        assert!(!tabs.show("drinks"));
        assert_eq!(tabs.visibility().filter(|(_key, visible)| *visible).count(), 0);
    }

    #[test]
    fn empty_tab_set_has_no_active_category() {
        let tabs = CategoryTabs::new(Vec::new());

        assert!(tabs.active().is_none());
    }
}
