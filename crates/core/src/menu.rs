//! Menu

use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        ItemId(value)
    }
}

/// A dish that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Identifier used as the cart key.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Short description shown under the name.
    pub description: String,

    /// Price in minor units.
    pub price_minor: i64,

    /// Category key (e.g. `burgers`).
    pub category: String,
}

/// Items sharing a category, in menu order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCategory {
    /// Category key, also used as the DOM id of its region.
    pub key: String,

    /// Human readable title.
    pub title: String,

    /// Items in this category.
    pub items: Vec<MenuItem>,
}

/// The orderable menu, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    categories: Vec<MenuCategory>,
}

impl Menu {
    /// Group items by category, keeping the order in which categories first appear.
    pub fn from_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        let mut categories: Vec<MenuCategory> = Vec::new();

        for item in items {
            if let Some(category) = categories
                .iter_mut()
                .find(|category| category.key == item.category)
            {
                category.items.push(item);
                continue;
            }

            categories.push(MenuCategory {
                key: item.category.clone(),
                title: category_title(&item.category),
                items: vec![item],
            });
        }

        Menu { categories }
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Category keys in display order.
    pub fn category_keys(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|category| category.key.clone())
            .collect()
    }

    /// Look up an item by id.
    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.id == id)
    }

    /// Total number of items on the menu.
    pub fn len(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.items.len())
            .sum()
    }

    /// Whether the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Title-case a category key: `main-course` becomes `Main Course`.
pub fn category_title(key: &str) -> String {
    key.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();

            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
