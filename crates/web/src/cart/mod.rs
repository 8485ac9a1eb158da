use std::sync::Arc;

use bistro::{
    settings::Settings,
    storefront::Storefront,
    summary::{CartSummary, EMPTY_CART_LINES},
};
use leptos::prelude::*;

pub(super) mod line_item;
pub(super) mod summary;

use line_item::CartLine;
use summary::CartTotals;

fn render_order_items(summary: CartSummary, storefront: RwSignal<Storefront>) -> AnyView {
    if summary.is_empty() {
        let [headline, hint] = EMPTY_CART_LINES;

        return view! {
            <div class="empty-order">
                <p>{headline}</p>
                <p>{hint}</p>
            </div>
        }
        .into_any();
    }

    summary
        .lines
        .into_iter()
        .map(|line| view! { <CartLine line=line storefront=storefront /> })
        .collect_view()
        .into_any()
}

fn render_cart_panel_content(
    storefront: RwSignal<Storefront>,
    settings: &Arc<Settings>,
) -> AnyView {
    let summary = storefront.with(Storefront::summary);
    let total = summary.total.clone();
    let show_place_order = summary.show_place_order;

    view! {
        <div id="order-items" class="order-items">
            {render_order_items(summary, storefront)}
        </div>
        <CartTotals
            total=total
            show_place_order=show_place_order
            storefront=storefront
            settings=Arc::clone(settings)
        />
    }
    .into_any()
}

/// Cart panel component.
#[component]
pub fn CartPanel(
    /// Shared cart and notifications.
    storefront: RwSignal<Storefront>,
    /// Page settings (order endpoint).
    settings: Arc<Settings>,
) -> impl IntoView {
    let item_count = move || storefront.with(|storefront| storefront.cart().len());

    view! {
        <aside id="order-panel" class="order-panel">
            <h2 class="panel-title">{move || format!("Your Order ({})", item_count())}</h2>
            <div class="panel-card">
                {move || render_cart_panel_content(storefront, &settings)}
            </div>
        </aside>
    }
}
