use std::sync::Arc;

use bistro::{
    categories::CategoryTabs,
    menu::{Menu, MenuCategory, MenuItem},
    pricing::format_price,
    storefront::Storefront,
};
use leptos::prelude::*;

use crate::timers::{now, schedule_expiry};

/// `display` value for a category region.
pub(crate) fn region_display(tabs: &CategoryTabs, category: &str) -> &'static str {
    if tabs.is_visible(category) {
        "block"
    } else {
        "none"
    }
}

pub(crate) fn tab_class(tabs: &CategoryTabs, category: &str) -> &'static str {
    if tabs.is_visible(category) {
        "category-tab active"
    } else {
        "category-tab"
    }
}

#[component]
fn CategoryTabBar(categories: Vec<MenuCategory>, tabs: RwSignal<CategoryTabs>) -> impl IntoView {
    view! {
        <div class="category-tabs" role="tablist">
            {categories
                .into_iter()
                .map(|category| {
                    let key_for_class = category.key.clone();
                    let key_for_click = category.key.clone();

                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || tabs.with(|tabs| tab_class(tabs, &key_for_class))
                            data-category=category.key
                            on:click=move |_| {
                                tabs.update(|tabs| {
                                    tabs.show(&key_for_click);
                                });
                            }
                        >
                            {category.title}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MenuItemRow(item: MenuItem, storefront: RwSignal<Storefront>) -> impl IntoView {
    let price = format_price(item.price_minor);
    let add_label = format!("Add {} ({price}) to your order", item.name);
    let name = item.name.clone();

    view! {
        <li class="menu-item">
            <div>
                <p class="menu-item-name">{item.name}</p>
                <p class="menu-item-description">{item.description}</p>
            </div>
            <div>
                <span class="menu-item-price">{price}</span>
                <button
                    type="button"
                    class="add-to-order"
                    aria-label=add_label
                    on:click=move |_| {
                        storefront.update(|storefront| {
                            storefront.add_item(item.id, &name, item.price_minor, now());
                        });

                        schedule_expiry(storefront);
                    }
                >
                    "Add to order"
                </button>
            </div>
        </li>
    }
}

#[component]
fn MenuCategoryRegion(
    category: MenuCategory,
    tabs: RwSignal<CategoryTabs>,
    storefront: RwSignal<Storefront>,
) -> impl IntoView {
    let key_for_display = category.key.clone();

    view! {
        <section
            id=category.key
            class="menu-category"
            style:display=move || tabs.with(|tabs| region_display(tabs, &key_for_display))
        >
            <h3 class="menu-category-title">{category.title}</h3>
            <ul class="menu-items">
                {category
                    .items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <MenuItemRow item=item storefront=storefront />
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

/// Menu panel: category tabs and one region per category.
#[component]
pub fn MenuPanel(
    /// Menu loaded from fixtures.
    menu: Arc<Menu>,
    /// Shared cart and notifications.
    storefront: RwSignal<Storefront>,
) -> impl IntoView {
    let tabs = RwSignal::new(CategoryTabs::new(menu.category_keys()));
    let categories = menu.categories().to_vec();

    view! {
        <section class="menu-panel">
            <h2 class="panel-title">"Menu"</h2>
            <CategoryTabBar categories=categories.clone() tabs=tabs />
            {categories
                .into_iter()
                .map(|category| {
                    view! {
                        <MenuCategoryRegion
                            category=category
                            tabs=tabs
                            storefront=storefront
                        />
                    }
                })
                .collect_view()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> CategoryTabs {
        CategoryTabs::new(vec!["burgers".to_string(), "sides".to_string()])
    }

    #[test]
    fn first_region_shown_by_default() {
        let tabs = tabs();

        assert_eq!(region_display(&tabs, "burgers"), "block");
        assert_eq!(region_display(&tabs, "sides"), "none");
    }

    #[test]
    fn switching_moves_active_tab() {
        let mut tabs = tabs();

        tabs.show("sides");

        assert_eq!(tab_class(&tabs, "sides"), "category-tab active");
        assert_eq!(tab_class(&tabs, "burgers"), "category-tab");
        assert_eq!(region_display(&tabs, "burgers"), "none");
    }

    #[test]
    fn tab_signal_updates_visibility() {
        let tabs = RwSignal::new(tabs());

        tabs.update(|tabs| {
            tabs.show("sides");
        });

        assert_eq!(tabs.with_untracked(|tabs| region_display(tabs, "sides")), "block");
    }
}
